// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serializable inspection reports

pub mod formatter;

use crate::extension::{Extension, ExtensionSpec, ExtensionSubtagOptions};
use crate::facade::SubtagRegistry;
use crate::registry::RegistryRecord;
use crate::subtag::{LanguageSubtag, SubtagOrTag};
use crate::types::{ExtensionSubtagKind, RecordScope, RecordType, SubtagTypeExtended};
use chrono::NaiveDate;
use serde::Serialize;

pub use formatter::ReportFormatter;

#[derive(Debug, Clone, Serialize)]
pub struct TagReport {
    pub tag: String,
    pub well_formed: bool,
    pub grandfathered: bool,
    pub regular_grandfathered: bool,
    pub irregular_grandfathered: bool,
    pub redundant: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<RegistryRecord>,
}

impl TagReport {
    pub fn new(registry: &SubtagRegistry, tag: &str) -> Self {
        let record = registry
            .get_record(RecordType::Grandfathered, tag)
            .or_else(|| registry.get_record(RecordType::Redundant, tag))
            .cloned();
        Self {
            tag: tag.to_string(),
            well_formed: registry.is_tag_well_formed(tag),
            grandfathered: registry.is_grandfathered_tag(tag),
            regular_grandfathered: registry.is_regular_grandfathered_tag(tag),
            irregular_grandfathered: registry.is_irregular_grandfathered_tag(tag),
            redundant: registry.search_index(tag, &[RecordType::Redundant]).is_some(),
            record,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubtagReport {
    pub subtag: String,
    pub formatted: String,
    #[serde(rename = "type")]
    pub subtag_type: &'static str,
    pub well_formed: bool,
    pub registered: bool,
    pub valid: bool,
    pub private_use: bool,
    pub deprecated: bool,
    /// Registry key of the range record describing a private-use subtag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_use_range: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<RecordScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macrolanguage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppressed_script: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefixes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension_singleton: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension_kind: Option<ExtensionSubtagKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<char>>,
}

impl SubtagReport {
    pub fn new(subtag: &LanguageSubtag) -> Self {
        let private_use_range = match subtag.subtag_type() {
            SubtagTypeExtended::Subtag(ty) if subtag.is_private_use() => {
                crate::facade::map_private_use_to_registered(ty, subtag.to_string_with(false))
            }
            _ => None,
        };
        Self {
            subtag: subtag.to_string_with(false).to_string(),
            formatted: subtag.to_string(),
            subtag_type: subtag.subtag_type().as_str(),
            well_formed: subtag.is_well_formed(),
            registered: subtag.is_registered(),
            valid: subtag.is_valid(),
            private_use: subtag.is_private_use(),
            deprecated: subtag.is_deprecated(),
            private_use_range,
            descriptions: subtag.descriptions().map(<[String]>::to_vec),
            comments: subtag
                .comments()
                .filter(|comments| !comments.is_empty())
                .map(<[String]>::to_vec),
            added: subtag.date_added(),
            deprecated_on: subtag.date_deprecated(),
            scope: subtag.scope(),
            macrolanguage: subtag.macrolanguage().map(ToString::to_string),
            suppressed_script: subtag.suppressed_script().map(ToString::to_string),
            preferred_value: subtag.preferred_value().map(SubtagOrTag::to_string),
            prefixes: subtag
                .prefixes()
                .filter(|prefixes| !prefixes.is_empty())
                .map(|prefixes| prefixes.iter().map(ToString::to_string).collect()),
            extension_singleton: subtag.extension_singleton().map(str::to_string),
            extension_kind: subtag.extension_subtag_kind(),
            extensions: subtag.extensions().map(<[char]>::to_vec),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LookupEntry {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub index: usize,
    pub record: RegistryRecord,
}

/// Every record the index holds for one key.
#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    pub tag: String,
    pub entries: Vec<LookupEntry>,
}

impl LookupReport {
    pub fn new(registry: &SubtagRegistry, tag: &str) -> Self {
        let entries = registry
            .search_index(tag, &[])
            .map(|entry| {
                entry
                    .entries()
                    .filter_map(|(record_type, index)| {
                        registry.get_record_by_index(index).map(|record| LookupEntry {
                            record_type,
                            index,
                            record: record.clone(),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();
        Self {
            tag: tag.to_string(),
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtensionMatch {
    pub singleton: char,
    pub name: &'static str,
    /// Slots (`attr`, `key`, `type`) the subtag occupies.
    pub kinds: Vec<ExtensionSubtagKind>,
    pub valid: bool,
}

/// Which extensions recognize a subtag, and in which slots.
#[derive(Debug, Clone, Serialize)]
pub struct ExtensionsReport {
    pub subtag: String,
    pub extensions: Vec<ExtensionMatch>,
}

impl ExtensionsReport {
    pub fn new(registry: &SubtagRegistry, subtag: &str) -> Self {
        let extensions = registry
            .get_extensions_by_subtag(subtag)
            .into_iter()
            .map(|ext| Self::describe(ext, subtag))
            .collect();
        Self {
            subtag: subtag.to_string(),
            extensions,
        }
    }

    fn describe(ext: &Extension, subtag: &str) -> ExtensionMatch {
        let kinds = [ExtensionSubtagKind::Attr, ExtensionSubtagKind::Key, ExtensionSubtagKind::Type]
            .into_iter()
            .filter(|kind| ext.is_extension_subtag_registered(subtag, ExtensionSubtagOptions::of_kind(*kind)))
            .collect();
        ExtensionMatch {
            singleton: ext.singleton(),
            name: ext.name(),
            kinds,
            valid: ext.is_extension_subtag_valid(subtag, ExtensionSubtagOptions::default()),
        }
    }
}
