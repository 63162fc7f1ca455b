// SPDX-License-Identifier: PMPL-1.0-or-later

//! Extension mechanism.
//!
//! An extension is keyed by a singleton and validates the subtags that
//! follow that singleton against its own sub-registry. The set of
//! extensions is closed: [`Extension`] enumerates every supported one and
//! dispatch is a `match`, not a lookup by runtime type.

pub mod data;
pub mod registry;
pub mod unicode;

pub use data::{ExtensionAttrRecord, ExtensionData, ExtensionKeyRecord, ExtensionTypeRecord, SubtagEntry};
pub use registry::{ExtensionOptions, ExtensionRegistry, ExtensionSelector};
pub use unicode::{TransformedContentExtension, UnicodeBaseExtension, UnicodeLocaleExtension};

use crate::rules::{singleton, WellFormedOptions};
use crate::types::ExtensionSubtagKind;

/// Options accepted by every extension subtag check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtensionSubtagOptions {
    /// Require lowercase. Extensions may demand more than that.
    pub follows_case_conventions: bool,
    /// Restrict the check to one slot of the extension. `None` accepts any.
    pub kind: Option<ExtensionSubtagKind>,
}

impl ExtensionSubtagOptions {
    pub fn of_kind(kind: ExtensionSubtagKind) -> Self {
        Self {
            kind: Some(kind),
            ..Default::default()
        }
    }
}

/// The capability set every extension provides.
pub trait ExtensionSpec {
    /// The singleton that introduces this extension inside a tag.
    fn singleton(&self) -> char;

    fn is_extension_subtag_registered(&self, subtag: &str, options: ExtensionSubtagOptions) -> bool;

    fn is_extension_subtag_valid(&self, subtag: &str, options: ExtensionSubtagOptions) -> bool;

    fn is_extension_subtag_well_formed(&self, subtag: &str, options: ExtensionSubtagOptions) -> bool;
}

/// Panics unless `singleton` is a well-formed singleton subtag. Building an
/// extension around anything else is a programming error.
pub(crate) fn assert_singleton(singleton: char) {
    assert!(
        singleton::is_well_formed(singleton.encode_utf8(&mut [0; 4]), WellFormedOptions::default()),
        "extension singleton {singleton:?} must be a well-formed singleton subtag"
    );
}

/// Every supported extension.
#[derive(Debug, Clone)]
pub enum Extension {
    TransformedContent(TransformedContentExtension),
    UnicodeLocale(UnicodeLocaleExtension),
}

impl Extension {
    pub fn name(&self) -> &'static str {
        match self {
            Extension::TransformedContent(_) => "transformed-content",
            Extension::UnicodeLocale(_) => "unicode-locale",
        }
    }

    pub fn base(&self) -> &UnicodeBaseExtension {
        match self {
            Extension::TransformedContent(ext) => ext.base(),
            Extension::UnicodeLocale(ext) => ext.base(),
        }
    }

    pub fn data(&self) -> &ExtensionData {
        self.base().data()
    }

    pub fn as_transformed_content(&self) -> Option<&TransformedContentExtension> {
        match self {
            Extension::TransformedContent(ext) => Some(ext),
            Extension::UnicodeLocale(_) => None,
        }
    }

    pub fn as_unicode_locale(&self) -> Option<&UnicodeLocaleExtension> {
        match self {
            Extension::UnicodeLocale(ext) => Some(ext),
            Extension::TransformedContent(_) => None,
        }
    }
}

impl ExtensionSpec for Extension {
    fn singleton(&self) -> char {
        match self {
            Extension::TransformedContent(ext) => ext.singleton(),
            Extension::UnicodeLocale(ext) => ext.singleton(),
        }
    }

    fn is_extension_subtag_registered(&self, subtag: &str, options: ExtensionSubtagOptions) -> bool {
        match self {
            Extension::TransformedContent(ext) => ext.is_extension_subtag_registered(subtag, options),
            Extension::UnicodeLocale(ext) => ext.is_extension_subtag_registered(subtag, options),
        }
    }

    fn is_extension_subtag_valid(&self, subtag: &str, options: ExtensionSubtagOptions) -> bool {
        match self {
            Extension::TransformedContent(ext) => ext.is_extension_subtag_valid(subtag, options),
            Extension::UnicodeLocale(ext) => ext.is_extension_subtag_valid(subtag, options),
        }
    }

    fn is_extension_subtag_well_formed(&self, subtag: &str, options: ExtensionSubtagOptions) -> bool {
        match self {
            Extension::TransformedContent(ext) => ext.is_extension_subtag_well_formed(subtag, options),
            Extension::UnicodeLocale(ext) => ext.is_extension_subtag_well_formed(subtag, options),
        }
    }
}

/// Two handles are the same extension when they answer to the same singleton.
impl PartialEq for Extension {
    fn eq(&self, other: &Self) -> bool {
        self.singleton() == other.singleton()
    }
}

impl Eq for Extension {}
