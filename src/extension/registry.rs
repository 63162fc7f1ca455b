// SPDX-License-Identifier: PMPL-1.0-or-later

//! Routing extension subtags to the extension their singleton names.

use crate::config::Config;
use crate::error::Result;
use crate::extension::{
    Extension, ExtensionSpec, ExtensionSubtagOptions, TransformedContentExtension, UnicodeLocaleExtension,
};
use crate::rules::singleton;
use regex::Regex;
use std::sync::{Arc, LazyLock};
use tracing::{debug, trace};

static FOLLOWS_CASE_CONVENTIONS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9]{2,8}$").unwrap());
static WELL_FORMED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{2,8}$").unwrap());

static BUNDLED: LazyLock<Arc<ExtensionRegistry>> = LazyLock::new(|| {
    Arc::new(ExtensionRegistry::new(
        TransformedContentExtension::bundled(),
        UnicodeLocaleExtension::bundled(),
    ))
});

/// Names the extension a subtag belongs to.
#[derive(Debug, Clone, Copy)]
pub enum ExtensionSelector<'a> {
    Singleton(&'a str),
    Extension(&'a Extension),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionOptions<'a> {
    /// Without a resolvable singleton nothing is registered or valid, and
    /// well-formedness falls back to the generic extension grammar.
    pub singleton: Option<ExtensionSelector<'a>>,
    pub subtag: ExtensionSubtagOptions,
}

/// The fixed set of supported extensions, transformed content first.
#[derive(Debug, Clone)]
pub struct ExtensionRegistry {
    extensions: Vec<Extension>,
    singletons: Vec<char>,
}

impl ExtensionRegistry {
    pub fn new(transformed_content: TransformedContentExtension, unicode_locale: UnicodeLocaleExtension) -> Self {
        let extensions = vec![
            Extension::TransformedContent(transformed_content),
            Extension::UnicodeLocale(unicode_locale),
        ];
        let singletons = extensions.iter().map(ExtensionSpec::singleton).collect();
        Self { extensions, singletons }
    }

    pub fn bundled() -> &'static ExtensionRegistry {
        &BUNDLED
    }

    pub fn bundled_shared() -> Arc<ExtensionRegistry> {
        Arc::clone(&BUNDLED)
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let (Some(transform_dir), Some(unicode_dir)) = (
            config.extension_dir(TransformedContentExtension::DATA_PATH),
            config.extension_dir(UnicodeLocaleExtension::DATA_PATH),
        ) else {
            return Ok(Self::bundled().clone());
        };
        debug!(source = %config.describe_source(), "loading extension sub-registries");
        Ok(Self::new(
            TransformedContentExtension::from_dir(&transform_dir)?,
            UnicodeLocaleExtension::from_dir(&unicode_dir)?,
        ))
    }

    /// Singletons of every supported extension, lowercase.
    pub fn singletons(&self) -> &[char] {
        &self.singletons
    }

    pub fn iter(&self) -> impl Iterator<Item = &Extension> {
        self.extensions.iter()
    }

    pub fn is_extension_singleton(&self, singleton: &str) -> bool {
        singleton::is_extension_singleton(singleton, &self.singletons)
    }

    /// Case-insensitive lookup by singleton.
    pub fn get_extension_by_singleton(&self, singleton: &str) -> Option<&Extension> {
        if !self.is_extension_singleton(singleton) {
            return None;
        }
        self.extensions
            .iter()
            .find(|ext| singleton::is_one_of(singleton, &[ext.singleton()]))
    }

    /// Every extension whose sub-registry recognizes `subtag` in any slot.
    pub fn get_extensions_by_subtag(&self, subtag: &str) -> Vec<&Extension> {
        self.extensions
            .iter()
            .filter(|ext| ext.is_extension_subtag_registered(subtag, ExtensionSubtagOptions::default()))
            .collect()
    }

    pub fn transformed_content(&self) -> &TransformedContentExtension {
        self.extensions
            .iter()
            .find_map(Extension::as_transformed_content)
            .unwrap_or_else(|| unreachable!("constructed with a transformed-content extension"))
    }

    pub fn unicode_locale(&self) -> &UnicodeLocaleExtension {
        self.extensions
            .iter()
            .find_map(Extension::as_unicode_locale)
            .unwrap_or_else(|| unreachable!("constructed with a unicode-locale extension"))
    }

    fn resolve<'a>(&'a self, selector: Option<ExtensionSelector<'a>>) -> Option<&'a Extension> {
        let resolved = match selector? {
            ExtensionSelector::Extension(ext) => Some(ext),
            ExtensionSelector::Singleton(singleton) => self.get_extension_by_singleton(singleton),
        };
        if resolved.is_none() {
            trace!(?selector, "no extension for singleton");
        }
        resolved
    }

    pub fn is_registered(&self, subtag: &str, options: &ExtensionOptions<'_>) -> bool {
        self.resolve(options.singleton)
            .is_some_and(|ext| ext.is_extension_subtag_registered(subtag, options.subtag))
    }

    pub fn is_valid(&self, subtag: &str, options: &ExtensionOptions<'_>) -> bool {
        self.resolve(options.singleton)
            .is_some_and(|ext| ext.is_extension_subtag_valid(subtag, options.subtag))
    }

    pub fn is_well_formed(&self, subtag: &str, options: &ExtensionOptions<'_>) -> bool {
        match self.resolve(options.singleton) {
            Some(ext) => ext.is_extension_subtag_well_formed(subtag, options.subtag),
            None if options.subtag.follows_case_conventions => FOLLOWS_CASE_CONVENTIONS.is_match(subtag),
            None => WELL_FORMED.is_match(subtag),
        }
    }
}
