// SPDX-License-Identifier: PMPL-1.0-or-later

//! Extension sub-registry tables.
//!
//! Each Unicode-style extension ships four JSON files: descriptor arrays for
//! attributes, keys and types, and a membership map from lowercase subtag to
//! the indices of every attr/key/type record that uses it. Keys additionally
//! map each of their type names to an index into the type table.

use crate::error::{DataError, Result};
use crate::types::ExtensionSubtagKind;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionAttrRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionKeyRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    #[serde(rename = "valueType", default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    /// Type name to index into the type table.
    #[serde(default)]
    pub types: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionTypeRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
}

impl ExtensionTypeRecord {
    pub fn is_deprecated(&self) -> bool {
        self.deprecated.as_deref() == Some("true")
    }
}

/// The slots a subtag string occupies within one extension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtagEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<usize>>,
}

impl SubtagEntry {
    pub fn indices(&self, kind: ExtensionSubtagKind) -> Option<&[usize]> {
        match kind {
            ExtensionSubtagKind::Attr => self.attrs.as_deref(),
            ExtensionSubtagKind::Key => self.keys.as_deref(),
            ExtensionSubtagKind::Type => self.types.as_deref(),
        }
    }

    pub fn has(&self, kind: ExtensionSubtagKind) -> bool {
        self.indices(kind).is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExtensionData {
    attrs: Vec<ExtensionAttrRecord>,
    keys: Vec<ExtensionKeyRecord>,
    types: Vec<ExtensionTypeRecord>,
    subtags: HashMap<String, SubtagEntry>,
}

/// The raw JSON documents making up one sub-registry.
#[derive(Debug, Clone, Copy)]
pub struct ExtensionSources<'a> {
    pub attrs: &'a str,
    pub keys: &'a str,
    pub types: &'a str,
    pub subtags: &'a str,
}

impl ExtensionData {
    pub fn from_json(sources: ExtensionSources<'_>, origin: &str) -> Result<Self> {
        let decode_error = |file: &str| {
            let origin = format!("{origin}/{file}");
            move |err| DataError::json(origin, err)
        };
        let attrs: Vec<ExtensionAttrRecord> =
            serde_json::from_str(sources.attrs).map_err(decode_error("attrs.json"))?;
        let keys: Vec<ExtensionKeyRecord> =
            serde_json::from_str(sources.keys).map_err(decode_error("keys.json"))?;
        let types: Vec<ExtensionTypeRecord> =
            serde_json::from_str(sources.types).map_err(decode_error("types.json"))?;
        let raw_subtags: HashMap<String, SubtagEntry> =
            serde_json::from_str(sources.subtags).map_err(decode_error("subtags.json"))?;

        let subtags = raw_subtags
            .into_iter()
            .map(|(subtag, entry)| (subtag.to_lowercase(), entry))
            .collect();

        let data = Self {
            attrs,
            keys,
            types,
            subtags,
        };
        data.check_references(origin)?;
        debug!(
            origin,
            attrs = data.attrs.len(),
            keys = data.keys.len(),
            types = data.types.len(),
            subtags = data.subtags.len(),
            "loaded extension sub-registry"
        );
        Ok(data)
    }

    /// Load `attrs.json`, `keys.json`, `types.json` and `subtags.json`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let read = |file: &str| {
            let path = dir.join(file);
            fs::read_to_string(&path).map_err(|err| DataError::io(&path, err))
        };
        let attrs = read("attrs.json")?;
        let keys = read("keys.json")?;
        let types = read("types.json")?;
        let subtags = read("subtags.json")?;
        Self::from_json(
            ExtensionSources {
                attrs: &attrs,
                keys: &keys,
                types: &types,
                subtags: &subtags,
            },
            &dir.display().to_string(),
        )
    }

    fn check_references(&self, origin: &str) -> Result<()> {
        let dangling = |subtag: &str, table: &'static str, index: usize| DataError::DanglingExtensionIndex {
            origin: origin.to_string(),
            subtag: subtag.to_string(),
            table,
            index,
        };

        for (subtag, entry) in &self.subtags {
            let tables = [
                (entry.attrs.as_deref(), "attrs", self.attrs.len()),
                (entry.keys.as_deref(), "keys", self.keys.len()),
                (entry.types.as_deref(), "types", self.types.len()),
            ];
            for (indices, table, len) in tables {
                if let Some(&bad) = indices.unwrap_or_default().iter().find(|&&i| i >= len) {
                    return Err(dangling(subtag, table, bad));
                }
            }
        }

        for key in &self.keys {
            if let Some(&bad) = key.types.values().find(|&&i| i >= self.types.len()) {
                return Err(dangling(&key.name, "types", bad));
            }
        }
        Ok(())
    }

    /// Membership entry for a subtag. Case-insensitive.
    pub fn subtag_entry(&self, subtag: &str) -> Option<&SubtagEntry> {
        self.subtags.get(&subtag.to_lowercase())
    }

    /// The first key record named `name`.
    pub fn key(&self, name: &str) -> Option<&ExtensionKeyRecord> {
        let index = *self.subtag_entry(name)?.keys.as_ref()?.first()?;
        self.keys.get(index)
    }

    /// The first attribute record named `name`.
    pub fn attr(&self, name: &str) -> Option<&ExtensionAttrRecord> {
        let index = *self.subtag_entry(name)?.attrs.as_ref()?.first()?;
        self.attrs.get(index)
    }

    /// Every type record named `name`. The same name can be declared under
    /// several keys (`ascii` for both `s0` and `d0`).
    pub fn type_records(&self, name: &str) -> Vec<&ExtensionTypeRecord> {
        self.subtag_entry(name)
            .and_then(|entry| entry.types.as_deref())
            .unwrap_or_default()
            .iter()
            .filter_map(|&index| self.types.get(index))
            .collect()
    }

    /// The type records declared under `key`, in name order.
    pub fn key_types(&self, key: &str) -> Vec<&ExtensionTypeRecord> {
        self.key(key)
            .map(|record| {
                record
                    .types
                    .values()
                    .filter_map(|&index| self.types.get(index))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether `key` declares a type named `type_name`. Case-insensitive.
    pub fn key_accepts_type(&self, key: &str, type_name: &str) -> bool {
        self.key(key).is_some_and(|record| {
            record
                .types
                .keys()
                .any(|name| name.eq_ignore_ascii_case(type_name))
        })
    }

    pub fn attrs(&self) -> &[ExtensionAttrRecord] {
        &self.attrs
    }

    pub fn keys(&self) -> &[ExtensionKeyRecord] {
        &self.keys
    }

    pub fn types(&self) -> &[ExtensionTypeRecord] {
        &self.types
    }

    pub fn subtag_count(&self) -> usize {
        self.subtags.len()
    }
}
