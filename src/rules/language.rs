// SPDX-License-Identifier: PMPL-1.0-or-later

//! Primary language subtags (BCP 47 §2.2.1).
//!
//! A language subtag is 2–8 letters, or 2–3 letters when an extended
//! language subtag follows it. `qaa`–`qtz` is reserved for private use and
//! appears in the registry only as the range record `qaa..qtz`.

use crate::registry::RegistryStore;
use crate::rules::in_alpha_range;
use crate::types::RecordType;
use regex::Regex;
use std::sync::LazyLock;

pub const PRIVATE_USE_RANGE: &str = "qaa..qtz";

static FOLLOWS_CASE_CONVENTIONS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z]+$").unwrap());
static WELL_FORMED_WITH_EXTLANG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]{2,3}$").unwrap());
static WELL_FORMED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z]{2,8}$").unwrap());

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageWellFormedOptions {
    /// Require all-lowercase.
    pub follows_case_conventions: bool,
    /// The subtag is followed by an extlang, so only 2–3 letters are allowed.
    pub using_extended_language: bool,
}

/// Case-insensitive check against `qaa`–`qtz`.
pub fn is_private_use(language: &str) -> bool {
    in_alpha_range(language, 3, "qaa", "qtz")
}

/// Whether `range` is the registry's private-use range literal.
pub fn is_private_use_range(range: &str) -> bool {
    range.eq_ignore_ascii_case(PRIVATE_USE_RANGE)
}

/// Registered as a language subtag. The private-use range literal is never
/// considered registered, and neither are subtags inside the range.
pub fn is_registered(registry: &RegistryStore, language: &str) -> bool {
    if is_private_use_range(language) {
        return false;
    }
    registry
        .search_index(language, &[RecordType::Language])
        .is_some()
}

pub fn is_valid(registry: &RegistryStore, language: &str, options: LanguageWellFormedOptions) -> bool {
    is_well_formed(language, options) && (is_registered(registry, language) || is_private_use(language))
}

pub fn is_well_formed(language: &str, options: LanguageWellFormedOptions) -> bool {
    if options.follows_case_conventions && !FOLLOWS_CASE_CONVENTIONS.is_match(language) {
        return false;
    }
    if options.using_extended_language {
        WELL_FORMED_WITH_EXTLANG.is_match(language)
    } else {
        WELL_FORMED.is_match(language)
    }
}

/// The registry range whose record describes a private-use language subtag.
pub fn map_private_use_to_registered(language: &str) -> Option<&'static str> {
    is_private_use(language).then_some(PRIVATE_USE_RANGE)
}
