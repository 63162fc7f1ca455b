// SPDX-License-Identifier: PMPL-1.0-or-later

//! Singleton subtags: the single character that opens an extension (`t`,
//! `u`, ...), a private-use sequence (`x`) or an irregular grandfathered
//! tag (`i`).
//!
//! Which singletons count as extensions is not known here. Callers pass the
//! set of extension singletons in; the composition root owns that set.

use crate::rules::{grammar_matches, WellFormedOptions};
use regex::Regex;
use std::sync::LazyLock;

pub const GRANDFATHERED_SINGLETON: char = 'i';
pub const PRIVATE_USE_SINGLETON: char = 'x';

static FOLLOWS_CASE_CONVENTIONS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9]$").unwrap());
static WELL_FORMED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]$").unwrap());

/// Which singleton families count as registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingletonRegisteredOptions {
    pub include_extensions: bool,
    pub include_grandfathered: bool,
    pub include_private_use: bool,
}

impl Default for SingletonRegisteredOptions {
    fn default() -> Self {
        Self {
            include_extensions: true,
            include_grandfathered: false,
            include_private_use: false,
        }
    }
}

/// Validity options. Unlike registration, private use is included by
/// default, and `strict = false` reduces validity to well-formedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingletonValidOptions {
    pub follows_case_conventions: bool,
    pub include_extensions: bool,
    pub include_grandfathered: bool,
    pub include_private_use: bool,
    pub strict: bool,
}

impl Default for SingletonValidOptions {
    fn default() -> Self {
        Self {
            follows_case_conventions: false,
            include_extensions: true,
            include_grandfathered: false,
            include_private_use: true,
            strict: true,
        }
    }
}

impl SingletonValidOptions {
    pub fn registered_options(&self) -> SingletonRegisteredOptions {
        SingletonRegisteredOptions {
            include_extensions: self.include_extensions,
            include_grandfathered: self.include_grandfathered,
            include_private_use: self.include_private_use,
        }
    }

    pub fn well_formed_options(&self) -> WellFormedOptions {
        WellFormedOptions {
            follows_case_conventions: self.follows_case_conventions,
        }
    }
}

/// `true` when `singleton` is exactly one character from `set`, ignoring
/// ASCII case.
pub fn is_one_of(singleton: &str, set: &[char]) -> bool {
    let mut chars = singleton.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => set.iter().any(|known| known.eq_ignore_ascii_case(&c)),
        _ => false,
    }
}

pub fn is_extension_singleton(singleton: &str, extension_singletons: &[char]) -> bool {
    is_one_of(singleton, extension_singletons)
}

pub fn is_grandfathered_singleton(singleton: &str) -> bool {
    is_one_of(singleton, &[GRANDFATHERED_SINGLETON])
}

pub fn is_private_use_singleton(singleton: &str) -> bool {
    is_one_of(singleton, &[PRIVATE_USE_SINGLETON])
}

pub fn is_private_use(singleton: &str) -> bool {
    is_private_use_singleton(singleton)
}

pub fn is_registered(
    singleton: &str,
    extension_singletons: &[char],
    options: SingletonRegisteredOptions,
) -> bool {
    (options.include_extensions && is_extension_singleton(singleton, extension_singletons))
        || (options.include_grandfathered && is_grandfathered_singleton(singleton))
        || (options.include_private_use && is_private_use_singleton(singleton))
}

pub fn is_valid(singleton: &str, extension_singletons: &[char], options: SingletonValidOptions) -> bool {
    is_well_formed(singleton, options.well_formed_options())
        && (!options.strict
            || is_registered(singleton, extension_singletons, options.registered_options()))
}

pub fn is_well_formed(singleton: &str, options: WellFormedOptions) -> bool {
    grammar_matches(singleton, options, &FOLLOWS_CASE_CONVENTIONS, &WELL_FORMED)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: &[char] = &['t', 'u'];

    #[test]
    fn one_of_is_single_character_and_case_insensitive() {
        assert!(is_one_of("t", KNOWN));
        assert!(is_one_of("U", KNOWN));
        assert!(!is_one_of("tu", KNOWN));
        assert!(!is_one_of("", KNOWN));
        assert!(!is_one_of("a", KNOWN));
    }

    #[test]
    fn registration_toggles() {
        let none = SingletonRegisteredOptions {
            include_extensions: false,
            include_grandfathered: false,
            include_private_use: false,
        };
        for singleton in ["t", "u", "i", "x", "a"] {
            assert!(!is_registered(singleton, KNOWN, none), "{singleton} with all families off");
        }

        let defaults = SingletonRegisteredOptions::default();
        assert!(is_registered("t", KNOWN, defaults));
        assert!(!is_registered("i", KNOWN, defaults));
        assert!(!is_registered("x", KNOWN, defaults));

        let grandfathered = SingletonRegisteredOptions {
            include_grandfathered: true,
            ..none
        };
        assert!(is_registered("I", KNOWN, grandfathered));
        assert!(!is_registered("t", KNOWN, grandfathered));
    }

    #[test]
    fn validity_defaults_include_private_use() {
        let defaults = SingletonValidOptions::default();
        assert!(is_valid("x", KNOWN, defaults));
        assert!(is_valid("u", KNOWN, defaults));
        assert!(!is_valid("i", KNOWN, defaults));
        assert!(!is_valid("a", KNOWN, defaults));

        let lax = SingletonValidOptions {
            strict: false,
            ..defaults
        };
        assert!(is_valid("a", KNOWN, lax));
        assert!(is_valid("0", KNOWN, lax));
        assert!(!is_valid("ab", KNOWN, lax));
    }
}
