// SPDX-License-Identifier: PMPL-1.0-or-later

//! Unicode-defined extensions (`t` and `u`).
//!
//! Both share one implementation, [`UnicodeBaseExtension`], and differ only
//! in singleton, data directory and the transformed-content private-use
//! carve-out.

use crate::error::Result;
use crate::extension::data::{ExtensionData, ExtensionSources};
use crate::extension::{assert_singleton, ExtensionSpec, ExtensionSubtagOptions};
use crate::types::ExtensionSubtagKind;
use regex::Regex;
use std::path::Path;
use std::sync::{Arc, LazyLock};

static ATTR_WELL_FORMED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{3,8}$").unwrap());
static KEY_WELL_FORMED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{2}$").unwrap());
static TYPE_WELL_FORMED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{3,8}$").unwrap());
static SUBTAG_WELL_FORMED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{2,8}$").unwrap());
static FOLLOWS_CASE_CONVENTIONS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9]*$").unwrap());

static BUNDLED_TRANSFORM: LazyLock<Arc<ExtensionData>> = LazyLock::new(|| {
    let sources = ExtensionSources {
        attrs: include_str!("../../data/transform/attrs.json"),
        keys: include_str!("../../data/transform/keys.json"),
        types: include_str!("../../data/transform/types.json"),
        subtags: include_str!("../../data/transform/subtags.json"),
    };
    match ExtensionData::from_json(sources, "bundled:transform") {
        Ok(data) => Arc::new(data),
        Err(err) => panic!("bundled transformed-content data is corrupt: {err}"),
    }
});

static BUNDLED_UNICODE: LazyLock<Arc<ExtensionData>> = LazyLock::new(|| {
    let sources = ExtensionSources {
        attrs: include_str!("../../data/unicode/attrs.json"),
        keys: include_str!("../../data/unicode/keys.json"),
        types: include_str!("../../data/unicode/types.json"),
        subtags: include_str!("../../data/unicode/subtags.json"),
    };
    match ExtensionData::from_json(sources, "bundled:unicode") {
        Ok(data) => Arc::new(data),
        Err(err) => panic!("bundled unicode-locale data is corrupt: {err}"),
    }
});

/// Shared attr/key/type behaviour of the Unicode extensions.
#[derive(Debug, Clone)]
pub struct UnicodeBaseExtension {
    singleton: char,
    data_path: &'static str,
    data: Arc<ExtensionData>,
}

impl UnicodeBaseExtension {
    /// # Panics
    ///
    /// When `singleton` is not a well-formed singleton subtag.
    pub fn new(singleton: char, data_path: &'static str, data: Arc<ExtensionData>) -> Self {
        assert_singleton(singleton);
        Self {
            singleton: singleton.to_ascii_lowercase(),
            data_path,
            data,
        }
    }

    /// Directory of this extension's tables, relative to the data root.
    pub fn data_path(&self) -> &'static str {
        self.data_path
    }

    pub fn data(&self) -> &ExtensionData {
        &self.data
    }
}

impl ExtensionSpec for UnicodeBaseExtension {
    fn singleton(&self) -> char {
        self.singleton
    }

    fn is_extension_subtag_registered(&self, subtag: &str, options: ExtensionSubtagOptions) -> bool {
        match (self.data.subtag_entry(subtag), options.kind) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(entry), Some(kind)) => entry.has(kind),
        }
    }

    fn is_extension_subtag_valid(&self, subtag: &str, options: ExtensionSubtagOptions) -> bool {
        self.is_extension_subtag_well_formed(subtag, options)
            && self.is_extension_subtag_registered(subtag, options)
    }

    fn is_extension_subtag_well_formed(&self, subtag: &str, options: ExtensionSubtagOptions) -> bool {
        if options.follows_case_conventions && !FOLLOWS_CASE_CONVENTIONS.is_match(subtag) {
            return false;
        }
        let grammar = match options.kind {
            None => &SUBTAG_WELL_FORMED,
            Some(ExtensionSubtagKind::Attr) => &ATTR_WELL_FORMED,
            Some(ExtensionSubtagKind::Key) => &KEY_WELL_FORMED,
            Some(ExtensionSubtagKind::Type) => &TYPE_WELL_FORMED,
        };
        grammar.is_match(subtag)
    }
}

/// The `t` extension (RFC 6497): transformed content.
///
/// Its sub-registry marks private-use types with the `PRIVATE_USE` range
/// marker (the type of key `x0`). The marker itself is never registered,
/// and any well-formed type is acceptable where the marker is declared.
#[derive(Debug, Clone)]
pub struct TransformedContentExtension {
    base: UnicodeBaseExtension,
}

impl TransformedContentExtension {
    pub const SINGLETON: char = 't';
    pub const DATA_PATH: &'static str = "transform";
    pub const PRIVATE_USE_MARKER: &'static str = "PRIVATE_USE";

    pub fn new(data: Arc<ExtensionData>) -> Self {
        Self {
            base: UnicodeBaseExtension::new(Self::SINGLETON, Self::DATA_PATH, data),
        }
    }

    pub fn bundled() -> Self {
        Self::new(Arc::clone(&BUNDLED_TRANSFORM))
    }

    /// Load the tables from a directory laid out like `data/transform`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let data = ExtensionData::from_dir(dir)?;
        Ok(Self::new(Arc::new(data)))
    }

    pub fn base(&self) -> &UnicodeBaseExtension {
        &self.base
    }

    pub fn is_extension_singleton(singleton: &str) -> bool {
        singleton.len() == 1 && singleton.eq_ignore_ascii_case(Self::SINGLETON.encode_utf8(&mut [0; 4]))
    }

    /// A private-use subtag is any well-formed `type` subtag, provided the
    /// sub-registry declares the private-use marker as a type. Asking about
    /// attributes or keys always yields `false`.
    pub fn is_extension_subtag_private_use(&self, subtag: &str, kind: Option<ExtensionSubtagKind>) -> bool {
        if !matches!(kind, None | Some(ExtensionSubtagKind::Type)) {
            return false;
        }
        self.base.is_extension_subtag_well_formed(subtag, ExtensionSubtagOptions::of_kind(ExtensionSubtagKind::Type))
            && self
                .base
                .data()
                .subtag_entry(Self::PRIVATE_USE_MARKER)
                .is_some_and(|entry| entry.has(ExtensionSubtagKind::Type))
    }

    /// Whether `subtag` is the private-use range marker itself.
    pub fn is_extension_subtag_private_use_range(&self, subtag: &str, kind: Option<ExtensionSubtagKind>) -> bool {
        matches!(kind, None | Some(ExtensionSubtagKind::Type))
            && subtag.eq_ignore_ascii_case(Self::PRIVATE_USE_MARKER)
    }
}

impl ExtensionSpec for TransformedContentExtension {
    fn singleton(&self) -> char {
        self.base.singleton()
    }

    fn is_extension_subtag_registered(&self, subtag: &str, options: ExtensionSubtagOptions) -> bool {
        !self.is_extension_subtag_private_use_range(subtag, options.kind)
            && self.base.is_extension_subtag_registered(subtag, options)
    }

    fn is_extension_subtag_valid(&self, subtag: &str, options: ExtensionSubtagOptions) -> bool {
        self.is_extension_subtag_well_formed(subtag, options)
            && (self.is_extension_subtag_registered(subtag, options)
                || self.is_extension_subtag_private_use(subtag, options.kind))
    }

    fn is_extension_subtag_well_formed(&self, subtag: &str, options: ExtensionSubtagOptions) -> bool {
        self.base.is_extension_subtag_well_formed(subtag, options)
    }
}

/// The `u` extension (RFC 6067): Unicode locale keywords.
#[derive(Debug, Clone)]
pub struct UnicodeLocaleExtension {
    base: UnicodeBaseExtension,
}

impl UnicodeLocaleExtension {
    pub const SINGLETON: char = 'u';
    pub const DATA_PATH: &'static str = "unicode";

    pub fn new(data: Arc<ExtensionData>) -> Self {
        Self {
            base: UnicodeBaseExtension::new(Self::SINGLETON, Self::DATA_PATH, data),
        }
    }

    pub fn bundled() -> Self {
        Self::new(Arc::clone(&BUNDLED_UNICODE))
    }

    /// Load the tables from a directory laid out like `data/unicode`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let data = ExtensionData::from_dir(dir)?;
        Ok(Self::new(Arc::new(data)))
    }

    pub fn base(&self) -> &UnicodeBaseExtension {
        &self.base
    }

    pub fn is_extension_singleton(singleton: &str) -> bool {
        singleton.len() == 1 && singleton.eq_ignore_ascii_case(Self::SINGLETON.encode_utf8(&mut [0; 4]))
    }
}

impl ExtensionSpec for UnicodeLocaleExtension {
    fn singleton(&self) -> char {
        self.base.singleton()
    }

    fn is_extension_subtag_registered(&self, subtag: &str, options: ExtensionSubtagOptions) -> bool {
        self.base.is_extension_subtag_registered(subtag, options)
    }

    fn is_extension_subtag_valid(&self, subtag: &str, options: ExtensionSubtagOptions) -> bool {
        self.base.is_extension_subtag_valid(subtag, options)
    }

    fn is_extension_subtag_well_formed(&self, subtag: &str, options: ExtensionSubtagOptions) -> bool {
        self.base.is_extension_subtag_well_formed(subtag, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lower() -> ExtensionSubtagOptions {
        ExtensionSubtagOptions {
            follows_case_conventions: true,
            kind: None,
        }
    }

    #[test]
    fn grammar_depends_on_kind() {
        let ext = UnicodeLocaleExtension::bundled();
        let attr = ExtensionSubtagOptions::of_kind(ExtensionSubtagKind::Attr);
        let key = ExtensionSubtagOptions::of_kind(ExtensionSubtagKind::Key);
        let ty = ExtensionSubtagOptions::of_kind(ExtensionSubtagKind::Type);

        assert!(ext.is_extension_subtag_well_formed("ca", key));
        assert!(!ext.is_extension_subtag_well_formed("cal", key));
        assert!(!ext.is_extension_subtag_well_formed("ca", attr));
        assert!(!ext.is_extension_subtag_well_formed("ca", ty));
        assert!(ext.is_extension_subtag_well_formed("gregory", ty));
        assert!(!ext.is_extension_subtag_well_formed("gregorian", ty));
        assert!(ext.is_extension_subtag_well_formed("ca", ExtensionSubtagOptions::default()));
        assert!(!ext.is_extension_subtag_well_formed("c", ExtensionSubtagOptions::default()));
    }

    #[test]
    fn case_conventions_require_lowercase() {
        let ext = UnicodeLocaleExtension::bundled();
        assert!(ext.is_extension_subtag_well_formed("gregory", lower()));
        assert!(!ext.is_extension_subtag_well_formed("Gregory", lower()));
        assert!(ext.is_extension_subtag_well_formed("Gregory", ExtensionSubtagOptions::default()));
    }

    #[test]
    fn registration_honours_kind_slot() {
        let ext = UnicodeLocaleExtension::bundled();
        assert!(ext.is_extension_subtag_registered("CA", ExtensionSubtagOptions::default()));
        assert!(ext.is_extension_subtag_registered("ca", ExtensionSubtagOptions::of_kind(ExtensionSubtagKind::Key)));
        assert!(!ext.is_extension_subtag_registered("ca", ExtensionSubtagOptions::of_kind(ExtensionSubtagKind::Type)));
        assert!(ext.is_extension_subtag_valid("gregory", ExtensionSubtagOptions::default()));
        assert!(!ext.is_extension_subtag_valid("abcdef", ExtensionSubtagOptions::default()));
    }

    #[test]
    fn transform_private_use() {
        let ext = TransformedContentExtension::bundled();
        assert!(ext.is_extension_subtag_private_use("abcdef", None));
        assert!(ext.is_extension_subtag_private_use("abcdef", Some(ExtensionSubtagKind::Type)));
        assert!(!ext.is_extension_subtag_private_use("abcdef", Some(ExtensionSubtagKind::Key)));
        assert!(!ext.is_extension_subtag_private_use("ab", None));

        assert!(ext.is_extension_subtag_private_use_range("private_use", None));
        assert!(!ext.is_extension_subtag_private_use_range("PRIVATE_USE", Some(ExtensionSubtagKind::Attr)));
        assert!(!ext.is_extension_subtag_registered("PRIVATE_USE", ExtensionSubtagOptions::default()));
    }

    #[test]
    fn transform_validity() {
        let ext = TransformedContentExtension::bundled();
        let defaults = ExtensionSubtagOptions::default();
        assert!(ext.is_extension_subtag_registered("d0", defaults));
        assert!(!ext.is_extension_subtag_valid("ca", defaults));
        assert!(ext.is_extension_subtag_valid("ABCDEF", defaults));
        assert!(!ext.is_extension_subtag_valid("ABCDEF", lower()));
        assert!(!ext.is_extension_subtag_valid("abcdef", ExtensionSubtagOptions::of_kind(ExtensionSubtagKind::Key)));
    }

    #[test]
    fn singleton_helpers() {
        assert!(TransformedContentExtension::is_extension_singleton("T"));
        assert!(!TransformedContentExtension::is_extension_singleton("u"));
        assert!(UnicodeLocaleExtension::is_extension_singleton("u"));
        assert!(!UnicodeLocaleExtension::is_extension_singleton("uu"));
    }

    #[test]
    #[should_panic(expected = "well-formed singleton")]
    fn malformed_singleton_panics() {
        UnicodeBaseExtension::new('-', "nowhere", Arc::new(ExtensionData::default()));
    }
}
