// SPDX-License-Identifier: PMPL-1.0-or-later

//! Record-to-record links and cycle detection.
//!
//! Subtag details are hydrated by following `Preferred-Value`, one-piece
//! `Prefix`, `Macrolanguage` and `Suppress-Script` values to the records
//! they name. A dataset in which those links loop would recurse forever,
//! so the store refuses it up front.

use super::{IndexEntry, RegistryRecord};
use crate::types::RecordType;
use std::collections::HashMap;

/// The (type, subtag) pairs hydration follows out of `record`.
fn outgoing(record: &RegistryRecord) -> Vec<(RecordType, &str)> {
    let record_type = record.record_type;
    if !record_type.has_subtag() {
        return Vec::new();
    }

    let mut links = Vec::new();
    if record_type != RecordType::Extlang {
        if let Some(value) = record.preferred_value.as_deref() {
            links.push((record_type, value));
        }
    }
    for prefix in record.prefixes() {
        if record_type == RecordType::Extlang || !prefix.contains('-') {
            links.push((RecordType::Language, prefix.as_str()));
        }
    }
    if let Some(value) = record.macrolanguage.as_deref() {
        links.push((RecordType::Language, value));
    }
    if let Some(value) = record.suppress_script.as_deref() {
        links.push((RecordType::Script, value));
    }
    links
}

/// Resolves a link target the way hydration does: by exact key, or by the
/// private-use range record that covers it.
struct Resolver<'a> {
    index: &'a HashMap<String, IndexEntry>,
    ranges: Vec<(RecordType, String, String, usize)>,
}

impl<'a> Resolver<'a> {
    fn new(records: &[RegistryRecord], index: &'a HashMap<String, IndexEntry>) -> Self {
        let ranges = records
            .iter()
            .enumerate()
            .filter_map(|(position, record)| {
                let (low, high) = record.subtag.as_deref()?.split_once("..")?;
                Some((record.record_type, low.to_lowercase(), high.to_lowercase(), position))
            })
            .collect();
        Self { index, ranges }
    }

    fn resolve(&self, record_type: RecordType, key: &str) -> Option<usize> {
        let key = key.to_lowercase();
        if let Some(position) = self.index.get(&key).and_then(|entry| entry.get(record_type)) {
            return Some(position);
        }
        self.ranges
            .iter()
            .find(|(ty, low, high, _)| {
                *ty == record_type && key.len() == low.len() && low.as_str() <= key.as_str() && key.as_str() <= high.as_str()
            })
            .map(|(_, _, _, position)| *position)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// The record positions of the first link cycle found, in link order.
///
/// Walks with an explicit stack so that long chains cannot exhaust the
/// call stack either.
pub(crate) fn find_cycle(records: &[RegistryRecord], index: &HashMap<String, IndexEntry>) -> Option<Vec<usize>> {
    let resolver = Resolver::new(records, index);
    let targets: Vec<Vec<usize>> = records
        .iter()
        .map(|record| {
            outgoing(record)
                .into_iter()
                .filter_map(|(ty, key)| resolver.resolve(ty, key))
                .collect()
        })
        .collect();

    let mut marks = vec![Mark::Unvisited; records.len()];
    for start in 0..records.len() {
        if marks[start] != Mark::Unvisited {
            continue;
        }
        let mut path: Vec<(usize, usize)> = vec![(start, 0)];
        marks[start] = Mark::OnPath;
        while let Some(top) = path.last_mut() {
            let node = top.0;
            let Some(&target) = targets[node].get(top.1) else {
                marks[node] = Mark::Done;
                path.pop();
                continue;
            };
            top.1 += 1;
            match marks[target] {
                Mark::Unvisited => {
                    marks[target] = Mark::OnPath;
                    path.push((target, 0));
                }
                Mark::OnPath => {
                    let from = path.iter().position(|(n, _)| *n == target).unwrap_or_default();
                    return Some(path[from..].iter().map(|(n, _)| *n).collect());
                }
                Mark::Done => {}
            }
        }
    }
    None
}
