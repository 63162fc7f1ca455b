// SPDX-License-Identifier: PMPL-1.0-or-later

//! Registry record and index entry shapes.
//!
//! Field names follow the JSON distribution of the IANA language subtag
//! registry, so the files decode without any renaming pass.

use crate::types::{RecordScope, RecordType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const REGISTRY_DATE_FORMAT: &str = "%Y-%m-%d";

/// One entry of the language subtag registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryRecord {
    #[serde(rename = "Type")]
    pub record_type: RecordType,

    /// Present for language, extlang, script, region and variant records.
    #[serde(rename = "Subtag", default, skip_serializing_if = "Option::is_none")]
    pub subtag: Option<String>,

    /// Present for grandfathered and redundant records.
    #[serde(rename = "Tag", default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(rename = "Description")]
    pub description: Vec<String>,

    #[serde(rename = "Added")]
    pub added: String,

    #[serde(rename = "Deprecated", default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,

    #[serde(rename = "Comments", default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<String>>,

    #[serde(rename = "Macrolanguage", default, skip_serializing_if = "Option::is_none")]
    pub macrolanguage: Option<String>,

    /// For extlang, grandfathered and redundant records this is a whole
    /// tag; for every other type it is a subtag of the same type.
    #[serde(rename = "Preferred-Value", default, skip_serializing_if = "Option::is_none")]
    pub preferred_value: Option<String>,

    #[serde(rename = "Prefix", default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<Vec<String>>,

    #[serde(rename = "Scope", default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<RecordScope>,

    #[serde(rename = "Suppress-Script", default, skip_serializing_if = "Option::is_none")]
    pub suppress_script: Option<String>,
}

impl RegistryRecord {
    /// The subtag or tag this record describes.
    pub fn key(&self) -> &str {
        self.subtag
            .as_deref()
            .or(self.tag.as_deref())
            .unwrap_or_default()
    }

    pub fn date_added(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.added, REGISTRY_DATE_FORMAT).ok()
    }

    pub fn date_deprecated(&self) -> Option<NaiveDate> {
        self.deprecated
            .as_deref()
            .and_then(|date| NaiveDate::parse_from_str(date, REGISTRY_DATE_FORMAT).ok())
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_some()
    }

    pub fn prefixes(&self) -> &[String] {
        self.prefix.as_deref().unwrap_or_default()
    }

    /// Checks the subtag/tag exclusivity rule and the non-empty description.
    pub(crate) fn shape_problem(&self) -> Option<String> {
        match (self.record_type.has_subtag(), &self.subtag, &self.tag) {
            (true, None, _) => return Some("missing Subtag field".to_string()),
            (true, Some(_), Some(_)) => return Some("has both Subtag and Tag".to_string()),
            (false, _, None) => return Some("missing Tag field".to_string()),
            (false, Some(_), Some(_)) => return Some("has both Tag and Subtag".to_string()),
            _ => {}
        }
        if self.description.is_empty() {
            return Some("empty Description".to_string());
        }
        None
    }
}

/// Where a lowercased subtag or tag lives in the record table, per type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extlang: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grandfathered: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redundant: Option<usize>,
}

impl IndexEntry {
    pub fn get(&self, record_type: RecordType) -> Option<usize> {
        match record_type {
            RecordType::Language => self.language,
            RecordType::Extlang => self.extlang,
            RecordType::Script => self.script,
            RecordType::Region => self.region,
            RecordType::Variant => self.variant,
            RecordType::Grandfathered => self.grandfathered,
            RecordType::Redundant => self.redundant,
        }
    }

    pub fn contains(&self, record_type: RecordType) -> bool {
        self.get(record_type).is_some()
    }

    /// Every (type, record index) pair present, in registry type order.
    pub fn entries(&self) -> impl Iterator<Item = (RecordType, usize)> + '_ {
        RecordType::all()
            .iter()
            .filter_map(move |ty| self.get(*ty).map(|index| (*ty, index)))
    }

    pub(crate) fn slot_mut(&mut self, record_type: RecordType) -> &mut Option<usize> {
        match record_type {
            RecordType::Language => &mut self.language,
            RecordType::Extlang => &mut self.extlang,
            RecordType::Script => &mut self.script,
            RecordType::Region => &mut self.region,
            RecordType::Variant => &mut self.variant,
            RecordType::Grandfathered => &mut self.grandfathered,
            RecordType::Redundant => &mut self.redundant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(subtag: &str) -> RegistryRecord {
        RegistryRecord {
            record_type: RecordType::Region,
            subtag: Some(subtag.to_string()),
            tag: None,
            description: vec!["Somewhere".to_string()],
            added: "2005-10-16".to_string(),
            deprecated: None,
            comments: None,
            macrolanguage: None,
            preferred_value: None,
            prefix: None,
            scope: None,
            suppress_script: None,
        }
    }

    #[test]
    fn decodes_iana_field_names() {
        let json = r#"{
            "Type": "language",
            "Subtag": "in",
            "Description": ["Indonesian"],
            "Added": "2005-10-16",
            "Deprecated": "1989-01-01",
            "Preferred-Value": "id",
            "Suppress-Script": "Latn",
            "Macrolanguage": "ms"
        }"#;
        let record: RegistryRecord = serde_json::from_str(json).expect("record should decode");
        assert_eq!(record.record_type, RecordType::Language);
        assert_eq!(record.key(), "in");
        assert_eq!(record.preferred_value.as_deref(), Some("id"));
        assert_eq!(record.suppress_script.as_deref(), Some("Latn"));
        assert_eq!(record.date_added(), NaiveDate::from_ymd_opt(2005, 10, 16));
        assert_eq!(record.date_deprecated(), NaiveDate::from_ymd_opt(1989, 1, 1));
        assert!(record.is_deprecated());
        assert!(record.shape_problem().is_none());
    }

    #[test]
    fn shape_problems_are_reported() {
        let mut record = region("US");
        assert!(record.shape_problem().is_none());

        record.tag = Some("en-US".to_string());
        assert!(record.shape_problem().is_some());

        record.record_type = RecordType::Redundant;
        record.subtag = None;
        assert!(record.shape_problem().is_none());

        record.description.clear();
        assert_eq!(record.shape_problem().as_deref(), Some("empty Description"));
    }

    #[test]
    fn index_entry_lists_present_types() {
        let mut entry = IndexEntry::default();
        *entry.slot_mut(RecordType::Region) = Some(7);
        *entry.slot_mut(RecordType::Language) = Some(3);
        let entries: Vec<_> = entry.entries().collect();
        assert_eq!(entries, vec![(RecordType::Language, 3), (RecordType::Region, 7)]);
        assert!(!entry.contains(RecordType::Script));
    }
}
