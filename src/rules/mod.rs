// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-type subtag rules.
//!
//! Each module answers the same questions for one subtag type: is the string
//! well-formed under the BCP 47 grammar, is it registered, is it valid, and
//! (where the type reserves one) does it fall in a private-use range.
//! Every function is total. Strings that fail the grammar are simply `false`.

pub mod extlang;
pub mod language;
pub mod privateuse;
pub mod region;
pub mod script;
pub mod singleton;
pub mod variant;

use regex::Regex;

/// Options shared by every well-formedness check that only cares about case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WellFormedOptions {
    /// Also require the registry's case convention for the type
    /// (lowercase, Titlecase script, UPPERCASE region).
    pub follows_case_conventions: bool,
}

impl WellFormedOptions {
    pub fn case_sensitive() -> Self {
        Self {
            follows_case_conventions: true,
        }
    }
}

/// Picks the case-convention grammar or the case-insensitive one.
pub(crate) fn grammar_matches(
    subtag: &str,
    options: WellFormedOptions,
    follows_case_conventions: &Regex,
    well_formed: &Regex,
) -> bool {
    if options.follows_case_conventions {
        follows_case_conventions.is_match(subtag)
    } else {
        well_formed.is_match(subtag)
    }
}

/// `true` when `value` has exactly `len` ASCII letters and sorts within
/// `[low, high]` after lowercasing. Both bounds must be lowercase.
pub(crate) fn in_alpha_range(value: &str, len: usize, low: &str, high: &str) -> bool {
    if value.len() != len || !value.bytes().all(|b| b.is_ascii_alphabetic()) {
        return false;
    }
    let lowered = value.to_ascii_lowercase();
    lowered.as_str() >= low && lowered.as_str() <= high
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_range_checks_length_letters_and_bounds() {
        assert!(in_alpha_range("qaa", 3, "qaa", "qtz"));
        assert!(in_alpha_range("QTZ", 3, "qaa", "qtz"));
        assert!(!in_alpha_range("qua", 3, "qaa", "qtz"));
        assert!(!in_alpha_range("qaaa", 3, "qaa", "qtz"));
        assert!(!in_alpha_range("qb1", 3, "qaa", "qtz"));
        assert!(!in_alpha_range("", 3, "qaa", "qtz"));
    }
}
