// SPDX-License-Identifier: PMPL-1.0-or-later

//! bcp47-registry: BCP 47 subtag classification.
//!
//! Answers, for any subtag of a language tag, whether it is well-formed,
//! registered, valid or private use, against the IANA Language Subtag
//! Registry and the CLDR sub-registries of the `t` and `u` extensions.
//!
//! ```
//! use bcp47_registry::{SubtagOptions, SubtagRegistry, SubtagType};
//!
//! let registry = SubtagRegistry::bundled();
//! let options = SubtagOptions::default();
//! assert!(registry.is_subtag_valid(SubtagType::Language, "en", &options));
//! assert!(registry.is_subtag_private_use(SubtagType::Language, "qab"));
//! assert!(registry.is_irregular_grandfathered_tag("i-ami"));
//! ```
//!
//! All registry data is immutable once loaded. The bundled datasets are
//! decoded on first use; [`SubtagRegistry::from_config`] loads others.

pub mod config;
pub mod error;
pub mod extension;
pub mod facade;
pub mod registry;
pub mod report;
pub mod rules;
pub mod subtag;
pub mod types;

pub use config::Config;
pub use error::{DataError, Result};
pub use extension::{
    Extension, ExtensionOptions, ExtensionRegistry, ExtensionSelector, ExtensionSpec, ExtensionSubtagOptions,
    TransformedContentExtension, UnicodeLocaleExtension,
};
pub use facade::{SubtagOptions, SubtagRegistry};
pub use registry::{IndexEntry, RegistryRecord, RegistryStore};
pub use subtag::{format_subtag, ComposedTag, LanguageSubtag, SubtagOrTag};
pub use types::{ExtensionSubtagKind, RecordScope, RecordType, SubtagType, SubtagTypeExtended};
