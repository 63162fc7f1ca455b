// SPDX-License-Identifier: PMPL-1.0-or-later

//! The record-jar format IANA publishes the registry in.
//!
//! Records are separated by `%%` lines. Each field is `Name: value`, and a
//! line starting with whitespace continues the previous field. Non-ASCII
//! text is written as `&#xHHHH;` references. The leading record carries
//! only `File-Date`.

use super::RegistryRecord;
use crate::error::{DataError, Result};
use crate::types::{RecordScope, RecordType};

pub(crate) struct RecordJar {
    pub file_date: Option<String>,
    pub records: Vec<RegistryRecord>,
}

struct Field {
    name: String,
    value: String,
    line: usize,
}

pub(crate) fn parse(text: &str, origin: &str) -> Result<RecordJar> {
    let error = |line: usize, reason: String| DataError::RecordJar {
        origin: origin.to_string(),
        line,
        reason,
    };

    let mut jar = RecordJar {
        file_date: None,
        records: Vec::new(),
    };
    let mut fields: Vec<Field> = Vec::new();
    let flush = |fields: &mut Vec<Field>, jar: &mut RecordJar| -> Result<()> {
        if fields.is_empty() {
            return Ok(());
        }
        let taken = std::mem::take(fields);
        if !taken.iter().any(|field| field.name == "Type") {
            if let Some(date) = taken.iter().find(|field| field.name == "File-Date") {
                jar.file_date = Some(date.value.clone());
                return Ok(());
            }
        }
        jar.records.push(build(&taken).map_err(|(line, reason)| error(line, reason))?);
        Ok(())
    };

    for (number, raw) in text.lines().enumerate() {
        let line = number + 1;
        if raw.trim() == "%%" {
            flush(&mut fields, &mut jar)?;
        } else if raw.trim().is_empty() {
            continue;
        } else if raw.starts_with([' ', '\t']) {
            let Some(last) = fields.last_mut() else {
                return Err(error(line, "continuation line before any field".to_string()));
            };
            last.value.push(' ');
            last.value.push_str(&unescape(raw.trim()));
        } else {
            let Some((name, value)) = raw.split_once(':') else {
                return Err(error(line, format!("expected `Field: value`, found {raw:?}")));
            };
            fields.push(Field {
                name: name.trim().to_string(),
                value: unescape(value.trim()),
                line,
            });
        }
    }
    flush(&mut fields, &mut jar)?;
    Ok(jar)
}

fn build(fields: &[Field]) -> std::result::Result<RegistryRecord, (usize, String)> {
    let first_line = fields.first().map(|field| field.line).unwrap_or_default();
    let single = |name: &str| -> std::result::Result<Option<String>, (usize, String)> {
        let mut found = fields.iter().filter(|field| field.name == name);
        let value = found.next().map(|field| field.value.clone());
        match found.next() {
            Some(repeat) => Err((repeat.line, format!("{name} appears more than once"))),
            None => Ok(value),
        }
    };
    let many = |name: &str| -> Vec<String> {
        fields
            .iter()
            .filter(|field| field.name == name)
            .map(|field| field.value.clone())
            .collect()
    };
    let optional_list = |values: Vec<String>| (!values.is_empty()).then_some(values);

    let type_name = single("Type")?.ok_or((first_line, "record has no Type".to_string()))?;
    let record_type =
        RecordType::parse(&type_name).ok_or((first_line, format!("unknown record type {type_name:?}")))?;
    let scope = match single("Scope")? {
        Some(value) => Some(RecordScope::parse(&value).ok_or((first_line, format!("unknown scope {value:?}")))?),
        None => None,
    };

    Ok(RegistryRecord {
        record_type,
        subtag: single("Subtag")?,
        tag: single("Tag")?,
        description: many("Description"),
        added: single("Added")?.ok_or((first_line, "record has no Added date".to_string()))?,
        deprecated: single("Deprecated")?,
        comments: optional_list(many("Comments")),
        macrolanguage: single("Macrolanguage")?,
        preferred_value: single("Preferred-Value")?,
        prefix: optional_list(many("Prefix")),
        scope,
        suppress_script: single("Suppress-Script")?,
    })
}

/// Replace `&#xHHHH;` references with the characters they name.
fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("&#x") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 3..];
        let decoded = after.split_once(';').and_then(|(hex, tail)| {
            let ch = u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)?;
            Some((ch, tail))
        });
        match decoded {
            Some((ch, tail)) => {
                out.push(ch);
                rest = tail;
            }
            None => {
                out.push_str("&#x");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
