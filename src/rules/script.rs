// SPDX-License-Identifier: PMPL-1.0-or-later

//! Script subtags (BCP 47 §2.2.3): four letters, Titlecase by convention.
//! `Qaaa`–`Qabx` is reserved for private use.

use crate::registry::RegistryStore;
use crate::rules::{grammar_matches, in_alpha_range, WellFormedOptions};
use crate::types::RecordType;
use regex::Regex;
use std::sync::LazyLock;

pub const PRIVATE_USE_RANGE: &str = "Qaaa..Qabx";

static FOLLOWS_CASE_CONVENTIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]{3}$").unwrap());
static WELL_FORMED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z]{4}$").unwrap());

pub fn is_private_use(script: &str) -> bool {
    in_alpha_range(script, 4, "qaaa", "qabx")
}

pub fn is_private_use_range(range: &str) -> bool {
    range.eq_ignore_ascii_case(PRIVATE_USE_RANGE)
}

pub fn is_registered(registry: &RegistryStore, script: &str) -> bool {
    if is_private_use_range(script) {
        return false;
    }
    registry.search_index(script, &[RecordType::Script]).is_some()
}

pub fn is_valid(registry: &RegistryStore, script: &str, options: WellFormedOptions) -> bool {
    is_well_formed(script, options) && (is_registered(registry, script) || is_private_use(script))
}

pub fn is_well_formed(script: &str, options: WellFormedOptions) -> bool {
    grammar_matches(script, options, &FOLLOWS_CASE_CONVENTIONS, &WELL_FORMED)
}

pub fn map_private_use_to_registered(script: &str) -> Option<&'static str> {
    is_private_use(script).then_some(PRIVATE_USE_RANGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titlecase_convention() {
        let strict = WellFormedOptions::case_sensitive();
        assert!(is_well_formed("Latn", strict));
        assert!(!is_well_formed("latn", strict));
        assert!(!is_well_formed("LATN", strict));
        assert!(is_well_formed("latn", WellFormedOptions::default()));
    }

    #[test]
    fn private_use_bounds() {
        assert!(is_private_use("qaaa"));
        assert!(is_private_use("QAAA"));
        assert!(is_private_use("qaba"));
        assert!(is_private_use("qabx"));
        assert!(!is_private_use("qaby"));
        assert!(!is_private_use("qaa"));
        assert!(!is_private_use("qaaaa"));
        assert_eq!(map_private_use_to_registered("qaab"), Some(PRIVATE_USE_RANGE));
        assert_eq!(map_private_use_to_registered("Latn"), None);
    }
}
