// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal and JSON rendering of inspection reports

use crate::report::{ExtensionsReport, LookupReport, SubtagReport, TagReport};
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFormatter {
    json: bool,
}

fn verdict(value: bool) -> ColoredString {
    if value {
        "yes".green()
    } else {
        "no".red()
    }
}

impl ReportFormatter {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn render_json<T: Serialize>(report: &T) -> Result<String> {
        serde_json::to_string_pretty(report).context("Failed to serialize report")
    }

    fn emit_json<T: Serialize>(&self, report: &T) -> Result<bool> {
        if self.json {
            println!("{}", Self::render_json(report)?);
        }
        Ok(self.json)
    }

    pub fn print_tag(&self, report: &TagReport) -> Result<()> {
        if self.emit_json(report)? {
            return Ok(());
        }
        println!("{} {}", "TAG".bold().cyan(), report.tag.bold());
        println!("  Well-formed:             {}", verdict(report.well_formed));
        println!("  Grandfathered:           {}", verdict(report.grandfathered));
        if report.grandfathered {
            println!("    regular:               {}", verdict(report.regular_grandfathered));
            println!("    irregular:             {}", verdict(report.irregular_grandfathered));
        }
        println!("  Redundant:               {}", verdict(report.redundant));
        if let Some(record) = &report.record {
            println!("  Description: {}", record.description.join("; "));
            if let Some(preferred) = &record.preferred_value {
                println!("  Preferred value: {}", preferred.yellow());
            }
        }
        Ok(())
    }

    pub fn print_subtag(&self, report: &SubtagReport) -> Result<()> {
        if self.emit_json(report)? {
            return Ok(());
        }
        println!(
            "{} {} ({})",
            report.subtag_type.to_uppercase().bold().cyan(),
            report.formatted.bold(),
            report.subtag
        );
        println!("  Well-formed: {}", verdict(report.well_formed));
        println!("  Registered:  {}", verdict(report.registered));
        println!("  Valid:       {}", verdict(report.valid));
        println!("  Private use: {}", verdict(report.private_use));
        if let Some(range) = report.private_use_range {
            println!("    range:     {}", range);
        }
        if report.deprecated {
            let since = report
                .deprecated_on
                .map(|date| date.to_string())
                .unwrap_or_default();
            println!("  {} {}", "Deprecated".yellow().bold(), since);
        }
        if let Some(descriptions) = &report.descriptions {
            println!("  Description: {}", descriptions.join("; "));
        }
        if let Some(added) = report.added {
            println!("  Added: {}", added);
        }
        if let Some(scope) = report.scope {
            println!("  Scope: {}", scope);
        }
        if let Some(macrolanguage) = &report.macrolanguage {
            println!("  Macrolanguage: {}", macrolanguage);
        }
        if let Some(script) = &report.suppressed_script {
            println!("  Suppress-Script: {}", script);
        }
        if let Some(preferred) = &report.preferred_value {
            println!("  Preferred value: {}", preferred.yellow());
        }
        if let Some(prefixes) = &report.prefixes {
            println!("  Prefixes: {}", prefixes.join(", "));
        }
        if let Some(comments) = &report.comments {
            for comment in comments {
                println!("  Comment: {}", comment.dimmed());
            }
        }
        if let Some(singleton) = &report.extension_singleton {
            let kind = report
                .extension_kind
                .map(|kind| kind.to_string())
                .unwrap_or_else(|| "any".to_string());
            println!("  Extension: {} ({})", singleton, kind);
        }
        if let Some(extensions) = &report.extensions {
            let list: Vec<String> = extensions.iter().map(char::to_string).collect();
            println!("  Recognized by: {}", if list.is_empty() { "-".to_string() } else { list.join(", ") });
        }
        Ok(())
    }

    pub fn print_lookup(&self, report: &LookupReport) -> Result<()> {
        if self.emit_json(report)? {
            return Ok(());
        }
        if report.is_empty() {
            println!("{} {}", report.tag.bold(), "is not in the registry index".red());
            return Ok(());
        }
        println!("{} {}", "LOOKUP".bold().cyan(), report.tag.bold());
        for entry in &report.entries {
            println!(
                "  [{}] {} #{}: {}",
                entry.record_type.to_string().yellow(),
                entry.record.key().bold(),
                entry.index,
                entry.record.description.join("; ")
            );
        }
        Ok(())
    }

    pub fn print_extensions(&self, report: &ExtensionsReport) -> Result<()> {
        if self.emit_json(report)? {
            return Ok(());
        }
        if report.extensions.is_empty() {
            println!("{} {}", report.subtag.bold(), "is not registered by any extension".red());
            return Ok(());
        }
        println!("{} {}", "EXTENSIONS".bold().cyan(), report.subtag.bold());
        for ext in &report.extensions {
            let kinds: Vec<&str> = ext.kinds.iter().map(|kind| kind.as_str()).collect();
            println!(
                "  {} {} as {} (valid: {})",
                ext.singleton.to_string().bold(),
                ext.name,
                kinds.join("/"),
                verdict(ext.valid)
            );
        }
        Ok(())
    }
}
