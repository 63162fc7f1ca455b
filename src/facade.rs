// SPDX-License-Identifier: PMPL-1.0-or-later

//! The unified subtag facade.
//!
//! [`SubtagRegistry`] owns the language subtag registry and the extension
//! registry and routes every per-type question to the matching rule module.
//! It also holds the two whole-tag grammars used for grandfathered tags.

use crate::config::Config;
use crate::error::Result;
use crate::extension::{Extension, ExtensionOptions, ExtensionRegistry, ExtensionSelector, ExtensionSubtagOptions};
use crate::registry::{IndexEntry, RegistryRecord, RegistryStore};
use crate::rules::language::LanguageWellFormedOptions;
use crate::rules::singleton::{SingletonRegisteredOptions, SingletonValidOptions};
use crate::rules::{extlang, language, privateuse, region, script, singleton, variant, WellFormedOptions};
use crate::types::{ExtensionSubtagKind, RecordType, SubtagType};
use regex::Regex;
use std::sync::{Arc, LazyLock};
use tracing::debug;

/// BCP 47 `Language-Tag`: irregular grandfathered literals, regular
/// grandfathered tags, `langtag` and bare private use.
static WELL_FORMED_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:",
        r"(?:en-GB-oed|i-ami|i-bnn|i-default|i-enochian|i-hak|i-klingon|i-lux|i-mingo|i-navajo|i-pwn|i-tao|i-tay|i-tsu|sgn-BE-FR|sgn-BE-NL|sgn-CH-DE)",
        r"|(?:art-lojban|cel-gaulish|no-bok|no-nyn|zh-guoyu|zh-hakka|zh-min|zh-min-nan|zh-xiang)",
        r"|(?:(?:[A-Za-z]{2,3}(?:-[A-Za-z]{3}(?:-[A-Za-z]{3}){0,2})?|[A-Za-z]{4}|[A-Za-z]{5,8})",
        r"(?:-[A-Za-z]{4})?",
        r"(?:-(?:[A-Za-z]{2}|[0-9]{3}))?",
        r"(?:-(?:[A-Za-z0-9]{5,8}|[0-9][A-Za-z0-9]{3}))*",
        r"(?:-[0-9A-WY-Za-wy-z](?:-[A-Za-z0-9]{2,8})+)*",
        r"(?:-x(?:-[A-Za-z0-9]{1,8})+)?)",
        r"|(?:x(?:-[A-Za-z0-9]{1,8})+)",
        r")$"
    ))
    .unwrap()
});

/// The same grammar without the irregular literals. The private-use
/// singleton must be a lowercase `x` here.
static WELL_FORMED_REGULAR_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:",
        r"(?:(?:[A-Za-z]{2,3}(?:-[A-Za-z]{3}(?:-[A-Za-z]{3}){0,2})?|[A-Za-z]{4}|[A-Za-z]{5,8})",
        r"(?:-[A-Za-z]{4})?",
        r"(?:-(?:[A-Za-z]{2}|[0-9]{3}))?",
        r"(?:-(?:[A-Za-z0-9]{5,8}|[0-9][A-Za-z0-9]{3}))*",
        r"(?:-[0-9A-WY-Za-wy-z](?:-[A-Za-z0-9]{2,8})+)*",
        r"(?:-x(?:-[A-Za-z0-9]{1,8})+)?)",
        r"|(?:x(?:-[A-Za-z0-9]{1,8})+)",
        r")$"
    ))
    .unwrap()
});

static BUNDLED: LazyLock<SubtagRegistry> =
    LazyLock::new(|| SubtagRegistry::new(RegistryStore::bundled_shared(), ExtensionRegistry::bundled_shared()));

/// Every option any subtag type understands. Each type reads the fields
/// that concern it and ignores the rest.
#[derive(Debug, Clone, Copy)]
pub struct SubtagOptions<'a> {
    /// Language, script, region, variant, extension, private use, singleton.
    pub follows_case_conventions: bool,
    /// Language only: an extlang follows, so 2–3 letters.
    pub using_extended_language: bool,
    /// Singleton registration: extension singletons count.
    pub include_extensions: bool,
    /// Singleton registration: `i` counts.
    pub include_grandfathered: bool,
    /// Singleton registration: `x` counts.
    pub include_private_use: bool,
    /// Singleton validity: `x` counts.
    pub include_private_use_valid: bool,
    /// Singleton validity requires registration. `false` leaves only
    /// well-formedness.
    pub strict: bool,
    /// Extension subtags: the extension they belong to.
    pub singleton: Option<ExtensionSelector<'a>>,
    /// Extension subtags: the slot they occupy.
    pub extension_kind: Option<ExtensionSubtagKind>,
}

impl Default for SubtagOptions<'_> {
    fn default() -> Self {
        Self {
            follows_case_conventions: false,
            using_extended_language: false,
            include_extensions: true,
            include_grandfathered: false,
            include_private_use: false,
            include_private_use_valid: true,
            strict: true,
            singleton: None,
            extension_kind: None,
        }
    }
}

impl<'a> SubtagOptions<'a> {
    pub fn case_sensitive() -> Self {
        Self {
            follows_case_conventions: true,
            ..Default::default()
        }
    }

    /// Options for a subtag of the extension introduced by `singleton`.
    pub fn extension(singleton: &'a str, kind: Option<ExtensionSubtagKind>) -> Self {
        Self {
            singleton: Some(ExtensionSelector::Singleton(singleton)),
            extension_kind: kind,
            ..Default::default()
        }
    }

    pub fn well_formed(&self) -> WellFormedOptions {
        WellFormedOptions {
            follows_case_conventions: self.follows_case_conventions,
        }
    }

    pub fn language(&self) -> LanguageWellFormedOptions {
        LanguageWellFormedOptions {
            follows_case_conventions: self.follows_case_conventions,
            using_extended_language: self.using_extended_language,
        }
    }

    pub fn singleton_registered(&self) -> SingletonRegisteredOptions {
        SingletonRegisteredOptions {
            include_extensions: self.include_extensions,
            include_grandfathered: self.include_grandfathered,
            include_private_use: self.include_private_use,
        }
    }

    pub fn singleton_valid(&self) -> SingletonValidOptions {
        SingletonValidOptions {
            follows_case_conventions: self.follows_case_conventions,
            include_extensions: self.include_extensions,
            include_grandfathered: self.include_grandfathered,
            include_private_use: self.include_private_use_valid,
            strict: self.strict,
        }
    }

    pub fn extension_options(&self) -> ExtensionOptions<'a> {
        ExtensionOptions {
            singleton: self.singleton,
            subtag: ExtensionSubtagOptions {
                follows_case_conventions: self.follows_case_conventions,
                kind: self.extension_kind,
            },
        }
    }
}

/// Registry data plus the extensions, answering every subtag question.
#[derive(Debug, Clone)]
pub struct SubtagRegistry {
    registry: Arc<RegistryStore>,
    extensions: Arc<ExtensionRegistry>,
}

impl SubtagRegistry {
    pub fn new(registry: Arc<RegistryStore>, extensions: Arc<ExtensionRegistry>) -> Self {
        Self { registry, extensions }
    }

    /// Shared instance over the compiled-in data.
    pub fn bundled() -> &'static SubtagRegistry {
        &BUNDLED
    }

    /// Bundled data, or the datasets under `config.data_dir`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let Some(registry_dir) = config.registry_dir() else {
            return Ok(Self::bundled().clone());
        };
        debug!(source = %config.describe_source(), "loading datasets");
        let registry = RegistryStore::from_dir(&registry_dir)?;
        let extensions = ExtensionRegistry::from_config(config)?;
        Ok(Self::new(Arc::new(registry), Arc::new(extensions)))
    }

    pub fn registry(&self) -> &RegistryStore {
        &self.registry
    }

    pub fn extensions(&self) -> &ExtensionRegistry {
        &self.extensions
    }

    pub fn search_index(&self, tag: &str, required_types: &[RecordType]) -> Option<&IndexEntry> {
        self.registry.search_index(tag, required_types)
    }

    pub fn get_record(&self, record_type: RecordType, tag: &str) -> Option<&RegistryRecord> {
        self.registry.get_record(record_type, tag)
    }

    pub fn get_record_by_index(&self, index: usize) -> Option<&RegistryRecord> {
        self.registry.get_record_by_index(index)
    }

    pub fn get_extension_by_singleton(&self, singleton: &str) -> Option<&Extension> {
        self.extensions.get_extension_by_singleton(singleton)
    }

    pub fn get_extensions_by_subtag(&self, subtag: &str) -> Vec<&Extension> {
        self.extensions.get_extensions_by_subtag(subtag)
    }

    pub fn is_tag_well_formed(&self, tag: &str) -> bool {
        WELL_FORMED_TAG.is_match(tag)
    }

    pub fn is_grandfathered_tag(&self, tag: &str) -> bool {
        self.registry
            .search_index(tag, &[RecordType::Grandfathered])
            .is_some()
    }

    /// Grandfathered, yet matching the ordinary `langtag` grammar.
    pub fn is_regular_grandfathered_tag(&self, tag: &str) -> bool {
        self.is_grandfathered_tag(tag) && WELL_FORMED_REGULAR_TAG.is_match(tag)
    }

    /// Grandfathered and matching nothing but its own literal.
    pub fn is_irregular_grandfathered_tag(&self, tag: &str) -> bool {
        self.is_grandfathered_tag(tag) && !WELL_FORMED_REGULAR_TAG.is_match(tag)
    }

    pub fn is_subtag_well_formed(&self, subtag_type: SubtagType, subtag: &str, options: &SubtagOptions<'_>) -> bool {
        match subtag_type {
            SubtagType::Language => language::is_well_formed(subtag, options.language()),
            SubtagType::Extlang => extlang::is_well_formed(subtag, options.well_formed()),
            SubtagType::Script => script::is_well_formed(subtag, options.well_formed()),
            SubtagType::Region => region::is_well_formed(subtag, options.well_formed()),
            SubtagType::Variant => variant::is_well_formed(subtag, options.well_formed()),
            SubtagType::Extension => self
                .extensions
                .is_well_formed(subtag, &options.extension_options()),
            SubtagType::PrivateUse => privateuse::is_well_formed(subtag, options.well_formed()),
            SubtagType::Singleton => singleton::is_well_formed(subtag, options.well_formed()),
        }
    }

    pub fn is_subtag_registered(&self, subtag_type: SubtagType, subtag: &str, options: &SubtagOptions<'_>) -> bool {
        match subtag_type {
            SubtagType::Language => language::is_registered(&self.registry, subtag),
            SubtagType::Extlang => extlang::is_registered(&self.registry, subtag),
            SubtagType::Script => script::is_registered(&self.registry, subtag),
            SubtagType::Region => region::is_registered(&self.registry, subtag),
            SubtagType::Variant => variant::is_registered(&self.registry, subtag),
            SubtagType::Extension => self
                .extensions
                .is_registered(subtag, &options.extension_options()),
            SubtagType::Singleton => singleton::is_registered(
                subtag,
                self.extensions.singletons(),
                options.singleton_registered(),
            ),
            SubtagType::PrivateUse => false,
        }
    }

    pub fn is_subtag_valid(&self, subtag_type: SubtagType, subtag: &str, options: &SubtagOptions<'_>) -> bool {
        match subtag_type {
            SubtagType::Language => language::is_valid(&self.registry, subtag, options.language()),
            SubtagType::Extlang => extlang::is_valid(&self.registry, subtag, options.well_formed()),
            SubtagType::Script => script::is_valid(&self.registry, subtag, options.well_formed()),
            SubtagType::Region => region::is_valid(&self.registry, subtag, options.well_formed()),
            SubtagType::Variant => variant::is_valid(&self.registry, subtag, options.well_formed()),
            SubtagType::Extension => self.extensions.is_valid(subtag, &options.extension_options()),
            SubtagType::PrivateUse => privateuse::is_valid(subtag, options.well_formed()),
            SubtagType::Singleton => {
                singleton::is_valid(subtag, self.extensions.singletons(), options.singleton_valid())
            }
        }
    }

    /// Extlang, variant and extension subtags have no private-use range.
    /// Every private-use subtag is, by definition, private use.
    pub fn is_subtag_private_use(&self, subtag_type: SubtagType, subtag: &str) -> bool {
        match subtag_type {
            SubtagType::Language => language::is_private_use(subtag),
            SubtagType::Script => script::is_private_use(subtag),
            SubtagType::Region => region::is_private_use(subtag),
            SubtagType::Singleton => singleton::is_private_use(subtag),
            SubtagType::PrivateUse => true,
            SubtagType::Extlang | SubtagType::Variant | SubtagType::Extension => false,
        }
    }

    /// The registry key whose record describes a private-use subtag.
    pub fn map_private_use_to_registered(&self, subtag_type: SubtagType, subtag: &str) -> Option<&'static str> {
        map_private_use_to_registered(subtag_type, subtag)
    }
}

pub fn map_private_use_to_registered(subtag_type: SubtagType, subtag: &str) -> Option<&'static str> {
    match subtag_type {
        SubtagType::Language => language::map_private_use_to_registered(subtag),
        SubtagType::Script => script::map_private_use_to_registered(subtag),
        SubtagType::Region => region::map_private_use_to_registered(subtag),
        _ => None,
    }
}
