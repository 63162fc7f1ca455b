// SPDX-License-Identifier: PMPL-1.0-or-later

//! Registry store: the immutable language subtag registry and its index.
//!
//! A subtag string can name records of several types at once (`bh` is both
//! a language and a region), so every lookup is qualified by record type.
//! The store is built once and only ever read afterwards.

mod links;
mod record;
mod text;

pub use record::{IndexEntry, RegistryRecord};

use crate::error::{DataError, Result};
use crate::types::RecordType;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};
use tracing::debug;

const BUNDLED_REGISTRY: &str = include_str!("../../data/registry/registry.json");
const BUNDLED_INDEX: &str = include_str!("../../data/registry/index.json");

/// File name of the record-jar registry inside a registry directory.
pub const REGISTRY_TEXT_FILE: &str = "language-subtag-registry";

static BUNDLED: LazyLock<Arc<RegistryStore>> = LazyLock::new(|| {
    RegistryStore::from_json(BUNDLED_REGISTRY, BUNDLED_INDEX, "bundled registry")
        .map(Arc::new)
        .unwrap_or_else(|err| panic!("bundled registry data is corrupt: {err}"))
});

#[derive(Debug, Clone)]
pub struct RegistryStore {
    records: Vec<RegistryRecord>,
    index: HashMap<String, IndexEntry>,
}

impl RegistryStore {
    /// The registry compiled into the crate.
    pub fn bundled() -> &'static RegistryStore {
        &BUNDLED
    }

    /// Shared handle to the bundled registry.
    pub fn bundled_shared() -> Arc<RegistryStore> {
        Arc::clone(&BUNDLED)
    }

    /// Decode a registry and its index, then check that they agree.
    pub fn from_json(registry_json: &str, index_json: &str, origin: &str) -> Result<Self> {
        let records: Vec<RegistryRecord> = serde_json::from_str(registry_json)
            .map_err(|err| DataError::json(format!("{origin} (registry)"), err))?;
        let index: HashMap<String, IndexEntry> = serde_json::from_str(index_json)
            .map_err(|err| DataError::json(format!("{origin} (index)"), err))?;

        let store = Self::assemble(records, index)?;
        debug!(
            origin,
            records = store.records.len(),
            keys = store.index.len(),
            "loaded language subtag registry"
        );
        Ok(store)
    }

    /// Decode the record-jar text IANA publishes, deriving the index.
    pub fn from_registry_text(text: &str, origin: &str) -> Result<Self> {
        let jar = text::parse(text, origin)?;
        let store = Self::from_records(jar.records)?;
        debug!(
            origin,
            file_date = jar.file_date.as_deref().unwrap_or("unknown"),
            records = store.records.len(),
            "loaded record-jar language subtag registry"
        );
        Ok(store)
    }

    /// Load a registry directory.
    ///
    /// An IANA `language-subtag-registry` file takes precedence; otherwise
    /// `registry.json` and `index.json` are read.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let text_path = dir.join(REGISTRY_TEXT_FILE);
        if text_path.is_file() {
            let text = fs::read_to_string(&text_path).map_err(|err| DataError::io(&text_path, err))?;
            return Self::from_registry_text(&text, &text_path.display().to_string());
        }

        let registry_path = dir.join("registry.json");
        let index_path = dir.join("index.json");
        let registry_json =
            fs::read_to_string(&registry_path).map_err(|err| DataError::io(&registry_path, err))?;
        let index_json =
            fs::read_to_string(&index_path).map_err(|err| DataError::io(&index_path, err))?;
        Self::from_json(&registry_json, &index_json, &dir.display().to_string())
    }

    /// Build a store from records alone, deriving the index.
    pub fn from_records(records: Vec<RegistryRecord>) -> Result<Self> {
        let mut index: HashMap<String, IndexEntry> = HashMap::new();
        for (position, record) in records.iter().enumerate() {
            if let Some(reason) = record.shape_problem() {
                return Err(DataError::MalformedRecord {
                    index: position,
                    record_type: record.record_type,
                    reason,
                });
            }
            let slot = index
                .entry(record.key().to_lowercase())
                .or_default()
                .slot_mut(record.record_type);
            if slot.is_some() {
                return Err(DataError::MalformedRecord {
                    index: position,
                    record_type: record.record_type,
                    reason: format!("duplicate {} record for {:?}", record.record_type, record.key()),
                });
            }
            *slot = Some(position);
        }
        Self::assemble(records, index)
    }

    fn assemble(records: Vec<RegistryRecord>, index: HashMap<String, IndexEntry>) -> Result<Self> {
        for (position, record) in records.iter().enumerate() {
            if let Some(reason) = record.shape_problem() {
                return Err(DataError::MalformedRecord {
                    index: position,
                    record_type: record.record_type,
                    reason,
                });
            }
        }

        for (tag, entry) in &index {
            for (record_type, position) in entry.entries() {
                let record = records.get(position).ok_or_else(|| DataError::IndexOutOfBounds {
                    tag: tag.clone(),
                    record_type,
                    index: position,
                    len: records.len(),
                })?;
                if record.record_type != record_type || record.key().to_lowercase() != *tag {
                    return Err(DataError::IndexMismatch {
                        tag: tag.clone(),
                        record_type,
                        index: position,
                    });
                }
            }
        }

        if let Some(cycle) = links::find_cycle(&records, &index) {
            let first = &records[cycle[0]];
            return Err(DataError::ReferenceCycle {
                tag: first.key().to_string(),
                record_type: first.record_type,
                index: cycle[0],
                cycle: cycle.iter().map(|&position| records[position].key().to_string()).collect(),
            });
        }

        Ok(Self { records, index })
    }

    /// Case-insensitive index lookup.
    ///
    /// Returns `None` when the tag is unknown or when any of `required_types`
    /// is missing from its entry. An empty `required_types` accepts any entry.
    pub fn search_index(&self, tag: &str, required_types: &[RecordType]) -> Option<&IndexEntry> {
        let entry = self.index.get(&tag.to_lowercase())?;
        required_types
            .iter()
            .all(|ty| entry.contains(*ty))
            .then_some(entry)
    }

    /// The record of `record_type` registered under `tag`, if any.
    pub fn get_record(&self, record_type: RecordType, tag: &str) -> Option<&RegistryRecord> {
        let entry = self.search_index(tag, &[record_type])?;
        self.get_record_by_index(entry.get(record_type)?)
    }

    /// Bounds-checked access into the record table.
    pub fn get_record_by_index(&self, index: usize) -> Option<&RegistryRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[RegistryRecord] {
        &self.records
    }

    pub fn records_of(&self, record_type: RecordType) -> impl Iterator<Item = &RegistryRecord> + '_ {
        self.records
            .iter()
            .filter(move |record| record.record_type == record_type)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
