// SPDX-License-Identifier: PMPL-1.0-or-later

//! Private-use subtags: the 1–8 alphanumeric pieces after an `x` singleton.
//! They are private use by definition and never registered, so validity is
//! just well-formedness.

use crate::rules::{grammar_matches, WellFormedOptions};
use regex::Regex;
use std::sync::LazyLock;

static FOLLOWS_CASE_CONVENTIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]{1,8}$").unwrap());
static WELL_FORMED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{1,8}$").unwrap());

pub fn is_valid(private_use: &str, options: WellFormedOptions) -> bool {
    is_well_formed(private_use, options)
}

pub fn is_well_formed(private_use: &str, options: WellFormedOptions) -> bool {
    grammar_matches(private_use, options, &FOLLOWS_CASE_CONVENTIONS, &WELL_FORMED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_to_eight_alphanumerics() {
        let loose = WellFormedOptions::default();
        assert!(is_valid("a", loose));
        assert!(is_valid("12345678", loose));
        assert!(is_valid("ABC123", loose));
        assert!(!is_valid("", loose));
        assert!(!is_valid("abcdefghi", loose));
        assert!(!is_valid("ab-c", loose));
        assert!(!is_valid("ABC123", WellFormedOptions::case_sensitive()));
    }
}
