// SPDX-License-Identifier: PMPL-1.0-or-later

//! bcp47-registry: inspect BCP 47 tags and subtags against the bundled
//! (or a local) IANA Language Subtag Registry and CLDR extension data.

use anyhow::{anyhow, Context, Result};
use bcp47_registry::report::{ExtensionsReport, LookupReport, ReportFormatter, SubtagReport, TagReport};
use bcp47_registry::{Config, ExtensionSubtagKind, LanguageSubtag, SubtagOptions, SubtagRegistry, SubtagTypeExtended};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bcp47-registry")]
#[command(version)]
#[command(about = "Classify BCP 47 language tags and subtags against the subtag registry")]
#[command(long_about = None)]
struct Cli {
    /// Directory holding registry/, transform/ and unicode/ datasets
    /// (defaults to $BCP47_DATA_DIR, then the bundled data)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a whole tag: well-formedness and grandfathered status
    Tag {
        #[arg(value_name = "TAG")]
        tag: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify one subtag and show its registry record
    Subtag {
        /// language, extlang, script, region, variant, extension,
        /// privateuse, singleton or grandfathered
        #[arg(value_name = "TYPE")]
        subtag_type: String,

        #[arg(value_name = "SUBTAG")]
        subtag: String,

        /// Extension singleton an extension subtag belongs to
        #[arg(short, long)]
        singleton: Option<String>,

        /// Extension slot: attr, key or type
        #[arg(short, long)]
        kind: Option<String>,

        /// Require the registry's case conventions
        #[arg(short, long)]
        case: bool,

        /// Language subtag is followed by an extlang
        #[arg(long)]
        extlang: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show every registry record indexed under a subtag or tag
    Lookup {
        #[arg(value_name = "TAG")]
        tag: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the extensions that register a subtag
    Extensions {
        #[arg(value_name = "SUBTAG")]
        subtag: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::from_env().with_data_dir(cli.data_dir);
    let registry = SubtagRegistry::from_config(&config)
        .with_context(|| format!("Failed to load datasets from {}", config.describe_source()))?;
    debug!(source = %config.describe_source(), "datasets ready");

    match cli.command {
        Commands::Tag { tag, json } => {
            ReportFormatter::new(json).print_tag(&TagReport::new(&registry, &tag))?;
        }

        Commands::Subtag {
            subtag_type,
            subtag,
            singleton,
            kind,
            case,
            extlang,
            json,
        } => {
            let subtag_type = SubtagTypeExtended::parse(&subtag_type)
                .ok_or_else(|| anyhow!("Unknown subtag type: {}", subtag_type))?;
            let kind = kind
                .map(|value| {
                    ExtensionSubtagKind::parse(&value)
                        .ok_or_else(|| anyhow!("Unknown extension subtag kind: {}", value))
                })
                .transpose()?;

            let mut options = match singleton.as_deref() {
                Some(singleton) => SubtagOptions::extension(singleton, kind),
                None => SubtagOptions {
                    extension_kind: kind,
                    ..Default::default()
                },
            };
            options.follows_case_conventions = case;
            options.using_extended_language = extlang;

            let classified = LanguageSubtag::new(&registry, subtag_type, &subtag, &options);
            ReportFormatter::new(json).print_subtag(&SubtagReport::new(&classified))?;
        }

        Commands::Lookup { tag, json } => {
            ReportFormatter::new(json).print_lookup(&LookupReport::new(&registry, &tag))?;
        }

        Commands::Extensions { subtag, json } => {
            ReportFormatter::new(json).print_extensions(&ExtensionsReport::new(&registry, &subtag))?;
        }
    }

    Ok(())
}
