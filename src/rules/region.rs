// SPDX-License-Identifier: PMPL-1.0-or-later

//! Region subtags (BCP 47 §2.2.4): two letters or three digits, UPPERCASE
//! by convention.
//!
//! Private use covers `AA`, `QM`–`QZ`, `XA`–`XZ` and `ZZ`. The two ranges
//! appear in the registry as range records; `AA` and `ZZ` have records of
//! their own.

use crate::registry::RegistryStore;
use crate::rules::{grammar_matches, in_alpha_range, WellFormedOptions};
use crate::types::RecordType;
use regex::Regex;
use std::sync::LazyLock;

pub const PRIVATE_USE_RANGE_Q: &str = "QM..QZ";
pub const PRIVATE_USE_RANGE_X: &str = "XA..XZ";

static FOLLOWS_CASE_CONVENTIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Z]{2}|[0-9]{3})$").unwrap());
static WELL_FORMED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[a-zA-Z]{2}|[0-9]{3})$").unwrap());

pub fn is_private_use(region: &str) -> bool {
    map_private_use_to_registered(region).is_some()
}

pub fn is_private_use_range(range: &str) -> bool {
    range.eq_ignore_ascii_case(PRIVATE_USE_RANGE_Q) || range.eq_ignore_ascii_case(PRIVATE_USE_RANGE_X)
}

pub fn is_registered(registry: &RegistryStore, region: &str) -> bool {
    if is_private_use_range(region) {
        return false;
    }
    registry.search_index(region, &[RecordType::Region]).is_some()
}

pub fn is_valid(registry: &RegistryStore, region: &str, options: WellFormedOptions) -> bool {
    is_well_formed(region, options) && (is_registered(registry, region) || is_private_use(region))
}

pub fn is_well_formed(region: &str, options: WellFormedOptions) -> bool {
    grammar_matches(region, options, &FOLLOWS_CASE_CONVENTIONS, &WELL_FORMED)
}

/// The registry record key describing a private-use region.
pub fn map_private_use_to_registered(region: &str) -> Option<&'static str> {
    if region.eq_ignore_ascii_case("aa") {
        Some("AA")
    } else if region.eq_ignore_ascii_case("zz") {
        Some("ZZ")
    } else if in_alpha_range(region, 2, "qm", "qz") {
        Some(PRIVATE_USE_RANGE_Q)
    } else if in_alpha_range(region, 2, "xa", "xz") {
        Some(PRIVATE_USE_RANGE_X)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_or_digits() {
        let loose = WellFormedOptions::default();
        assert!(is_well_formed("us", loose));
        assert!(is_well_formed("419", loose));
        assert!(!is_well_formed("41", loose));
        assert!(!is_well_formed("u1", loose));
        assert!(!is_well_formed("usa", loose));
    }

    #[test]
    fn uppercase_convention() {
        let strict = WellFormedOptions::case_sensitive();
        assert!(is_well_formed("US", strict));
        assert!(!is_well_formed("us", strict));
        assert!(!is_well_formed("Us", strict));
        assert!(is_well_formed("001", strict));
    }

    #[test]
    fn private_use_mapping() {
        assert_eq!(map_private_use_to_registered("qy"), Some(PRIVATE_USE_RANGE_Q));
        assert_eq!(map_private_use_to_registered("QM"), Some(PRIVATE_USE_RANGE_Q));
        assert_eq!(map_private_use_to_registered("xt"), Some(PRIVATE_USE_RANGE_X));
        assert_eq!(map_private_use_to_registered("aa"), Some("AA"));
        assert_eq!(map_private_use_to_registered("ZZ"), Some("ZZ"));
        assert_eq!(map_private_use_to_registered("ql"), None);
        assert_eq!(map_private_use_to_registered("us"), None);
        assert_eq!(map_private_use_to_registered("999"), None);
    }
}
