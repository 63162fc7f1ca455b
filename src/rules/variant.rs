// SPDX-License-Identifier: PMPL-1.0-or-later

//! Variant subtags (BCP 47 §2.2.5): 5–8 alphanumerics, or a digit followed
//! by three alphanumerics. Variants have no private-use range.

use crate::registry::RegistryStore;
use crate::rules::{grammar_matches, WellFormedOptions};
use crate::types::RecordType;
use regex::Regex;
use std::sync::LazyLock;

static FOLLOWS_CASE_CONVENTIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[a-z0-9]{5,8}|[0-9][a-z0-9]{3})$").unwrap());
static WELL_FORMED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[a-zA-Z0-9]{5,8}|[0-9][a-zA-Z0-9]{3})$").unwrap());

pub fn is_registered(registry: &RegistryStore, variant: &str) -> bool {
    registry.search_index(variant, &[RecordType::Variant]).is_some()
}

pub fn is_valid(registry: &RegistryStore, variant: &str, options: WellFormedOptions) -> bool {
    is_well_formed(variant, options) && is_registered(registry, variant)
}

pub fn is_well_formed(variant: &str, options: WellFormedOptions) -> bool {
    grammar_matches(variant, options, &FOLLOWS_CASE_CONVENTIONS, &WELL_FORMED)
}
