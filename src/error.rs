// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dataset loading errors.
//!
//! Classification itself never fails: malformed input simply yields `false`
//! or `None`. Only reading and decoding the registry datasets can go wrong.

use crate::types::RecordType;
use std::path::PathBuf;

/// Errors raised while loading registry or extension sub-registry data.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// A dataset file could not be read
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dataset file is not valid JSON for its schema
    #[error("JSON parse error in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// An index entry points past the end of the record table
    #[error("index entry {tag:?} ({record_type}) points at record {index}, but only {len} records exist")]
    IndexOutOfBounds {
        tag: String,
        record_type: RecordType,
        index: usize,
        len: usize,
    },

    /// An index entry points at a record of a different type or subtag
    #[error("index entry {tag:?} ({record_type}) points at record {index}, which does not describe it")]
    IndexMismatch {
        tag: String,
        record_type: RecordType,
        index: usize,
    },

    /// A record breaks the subtag/tag field invariant for its type
    #[error("record {index} ({record_type}) is malformed: {reason}")]
    MalformedRecord {
        index: usize,
        record_type: RecordType,
        reason: String,
    },

    /// A record-jar registry file has a line or record that cannot be read
    #[error("{origin}:{line}: {reason}")]
    RecordJar {
        origin: String,
        line: usize,
        reason: String,
    },

    /// Preferred-Value, Prefix, Macrolanguage or Suppress-Script links loop back
    #[error("record {index} ({record_type} {tag:?}) links back to itself via {}", .cycle.join(" -> "))]
    ReferenceCycle {
        tag: String,
        record_type: RecordType,
        index: usize,
        cycle: Vec<String>,
    },

    /// An extension sub-registry membership list points past its table
    #[error("extension data {origin}: subtag {subtag:?} references missing {table} entry {index}")]
    DanglingExtensionIndex {
        origin: String,
        subtag: String,
        table: &'static str,
        index: usize,
    },
}

impl DataError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(origin: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            origin: origin.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
