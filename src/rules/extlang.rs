// SPDX-License-Identifier: PMPL-1.0-or-later

//! Extended language subtags (BCP 47 §2.2.2): exactly three letters.
//! There is no private-use range for extlangs.

use crate::registry::RegistryStore;
use crate::rules::{grammar_matches, WellFormedOptions};
use crate::types::RecordType;
use regex::Regex;
use std::sync::LazyLock;

static FOLLOWS_CASE_CONVENTIONS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z]{3}$").unwrap());
static WELL_FORMED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z]{3}$").unwrap());

pub fn is_registered(registry: &RegistryStore, extended_language: &str) -> bool {
    registry
        .search_index(extended_language, &[RecordType::Extlang])
        .is_some()
}

pub fn is_valid(registry: &RegistryStore, extended_language: &str, options: WellFormedOptions) -> bool {
    is_well_formed(extended_language, options) && is_registered(registry, extended_language)
}

pub fn is_well_formed(extended_language: &str, options: WellFormedOptions) -> bool {
    grammar_matches(
        extended_language,
        options,
        &FOLLOWS_CASE_CONVENTIONS,
        &WELL_FORMED,
    )
}
