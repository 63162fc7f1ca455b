// SPDX-License-Identifier: PMPL-1.0-or-later

//! A classified subtag.
//!
//! [`LanguageSubtag`] runs every check once at construction and, when the
//! subtag is valid, hydrates the registry record describing it. Record
//! fields that name other subtags (macrolanguage, suppressed script,
//! preferred value, prefixes) become subtags in turn. Fields that name a
//! whole tag are kept as [`ComposedTag`].

use crate::extension::{ExtensionSelector, ExtensionSpec};
use crate::facade::{SubtagOptions, SubtagRegistry};
use crate::registry::RegistryRecord;
use crate::types::{ExtensionSubtagKind, RecordScope, SubtagType, SubtagTypeExtended};
use chrono::NaiveDate;
use std::fmt;

/// A reference to a whole language tag, for example an extlang's preferred
/// value or a variant prefix such as `ja-Latn-hepburn`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedTag {
    pub tag: String,
    pub well_formed: bool,
}

impl fmt::Display for ComposedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

#[derive(Debug, Clone)]
pub enum SubtagOrTag {
    Subtag(Box<LanguageSubtag>),
    Tag(ComposedTag),
}

impl SubtagOrTag {
    pub fn as_subtag(&self) -> Option<&LanguageSubtag> {
        match self {
            SubtagOrTag::Subtag(subtag) => Some(subtag),
            SubtagOrTag::Tag(_) => None,
        }
    }

    pub fn as_tag(&self) -> Option<&ComposedTag> {
        match self {
            SubtagOrTag::Tag(tag) => Some(tag),
            SubtagOrTag::Subtag(_) => None,
        }
    }
}

impl fmt::Display for SubtagOrTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubtagOrTag::Subtag(subtag) => fmt::Display::fmt(subtag, f),
            SubtagOrTag::Tag(tag) => fmt::Display::fmt(tag, f),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct RecordDetails {
    comments: Vec<String>,
    date_added: Option<NaiveDate>,
    date_deprecated: Option<NaiveDate>,
    descriptions: Vec<String>,
    macrolanguage: Option<Box<LanguageSubtag>>,
    preferred_value: Option<SubtagOrTag>,
    prefixes: Vec<SubtagOrTag>,
    scope: Option<RecordScope>,
    suppressed_script: Option<Box<LanguageSubtag>>,
}

/// Singleton option echoes, present only for singleton subtags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SingletonFlags {
    include_extensions: bool,
    include_grandfathered: bool,
    include_private_use: bool,
    include_private_use_valid: bool,
    strict: bool,
}

#[derive(Debug, Clone)]
pub struct LanguageSubtag {
    subtag: String,
    formatted: String,
    subtag_type: SubtagTypeExtended,
    extension_singleton: Option<String>,
    extension_subtag_kind: Option<ExtensionSubtagKind>,
    extensions: Option<Vec<char>>,
    followed_case_conventions: Option<bool>,
    singleton_flags: Option<SingletonFlags>,
    private_use: bool,
    registered: bool,
    valid: bool,
    well_formed: bool,
    details: Option<RecordDetails>,
}

/// Conventional case for a subtag: UPPERCASE region, Titlecase script,
/// lowercase everything else.
pub fn format_subtag(subtag_type: SubtagType, subtag: &str) -> String {
    match subtag_type {
        SubtagType::Region => subtag.to_uppercase(),
        SubtagType::Script => {
            let lowered = subtag.to_lowercase();
            let mut chars = lowered.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => lowered,
            }
        }
        _ => subtag.to_lowercase(),
    }
}

impl LanguageSubtag {
    pub fn new(
        registry: &SubtagRegistry,
        subtag_type: impl Into<SubtagTypeExtended>,
        subtag: &str,
        options: &SubtagOptions<'_>,
    ) -> Self {
        match subtag_type.into() {
            SubtagTypeExtended::Grandfathered => Self::grandfathered(subtag),
            SubtagTypeExtended::Subtag(subtag_type) => Self::classify(registry, subtag_type, subtag, options),
        }
    }

    /// A piece of a grandfathered tag. The pieces follow no subtag grammar,
    /// so they are neither well-formed nor registered, yet always valid.
    fn grandfathered(subtag: &str) -> Self {
        let lowered = subtag.to_lowercase();
        let formatted = if lowered == "gb" { "GB".to_string() } else { lowered };
        Self {
            subtag: subtag.to_string(),
            formatted,
            subtag_type: SubtagTypeExtended::Grandfathered,
            extension_singleton: None,
            extension_subtag_kind: None,
            extensions: None,
            followed_case_conventions: None,
            singleton_flags: None,
            private_use: false,
            registered: false,
            valid: true,
            well_formed: false,
            details: None,
        }
    }

    fn classify(registry: &SubtagRegistry, subtag_type: SubtagType, subtag: &str, options: &SubtagOptions<'_>) -> Self {
        let (extension_singleton, extension_subtag_kind) = if subtag_type == SubtagType::Extension {
            let singleton = options.singleton.map(|selector| match selector {
                ExtensionSelector::Singleton(singleton) => singleton.to_string(),
                ExtensionSelector::Extension(ext) => ext.singleton().to_string(),
            });
            (singleton, options.extension_kind)
        } else {
            (None, None)
        };

        let singleton_flags = (subtag_type == SubtagType::Singleton).then_some(SingletonFlags {
            include_extensions: options.include_extensions,
            include_grandfathered: options.include_grandfathered,
            include_private_use: options.include_private_use,
            include_private_use_valid: options.include_private_use_valid,
            strict: options.strict,
        });

        let private_use = registry.is_subtag_private_use(subtag_type, subtag);
        let registered = registry.is_subtag_registered(subtag_type, subtag, options);
        let valid = registry.is_subtag_valid(subtag_type, subtag, options);
        let well_formed = registry.is_subtag_well_formed(subtag_type, subtag, options);

        let (extensions, details) = match subtag_type {
            SubtagType::Extension | SubtagType::Singleton if !valid => (Some(Vec::new()), None),
            SubtagType::Extension => {
                let found = registry.get_extensions_by_subtag(subtag);
                (Some(found.iter().map(|ext| ext.singleton()).collect()), None)
            }
            SubtagType::Singleton => {
                let found = registry.get_extension_by_singleton(subtag);
                (Some(found.map(|ext| ext.singleton()).into_iter().collect()), None)
            }
            _ if !valid => (None, None),
            _ => (None, Self::hydrate(registry, subtag_type, subtag, private_use)),
        };

        Self {
            subtag: subtag.to_string(),
            formatted: format_subtag(subtag_type, subtag),
            subtag_type: subtag_type.into(),
            extension_singleton,
            extension_subtag_kind,
            extensions,
            followed_case_conventions: Some(options.follows_case_conventions),
            singleton_flags,
            private_use,
            registered,
            valid,
            well_formed,
            details,
        }
    }

    fn hydrate(
        registry: &SubtagRegistry,
        subtag_type: SubtagType,
        subtag: &str,
        private_use: bool,
    ) -> Option<RecordDetails> {
        let record_type = subtag_type.record_type()?;
        let key = if private_use {
            registry.map_private_use_to_registered(subtag_type, subtag)?
        } else {
            subtag
        };
        let record = registry.get_record(record_type, key)?;
        Some(Self::details_from_record(registry, subtag_type, record))
    }

    fn details_from_record(registry: &SubtagRegistry, subtag_type: SubtagType, record: &RegistryRecord) -> RecordDetails {
        let defaults = SubtagOptions::default();
        let nested = |ty: SubtagType, value: &str| Box::new(LanguageSubtag::new(registry, ty, value, &defaults));
        let composed = |tag: &str| ComposedTag {
            tag: tag.to_string(),
            well_formed: registry.is_tag_well_formed(tag),
        };

        let preferred_value = record.preferred_value.as_deref().map(|value| {
            if subtag_type == SubtagType::Extlang {
                SubtagOrTag::Tag(composed(value))
            } else {
                SubtagOrTag::Subtag(nested(subtag_type, value))
            }
        });

        let prefixes = record
            .prefixes()
            .iter()
            .map(|prefix| {
                if subtag_type == SubtagType::Extlang {
                    SubtagOrTag::Subtag(nested(SubtagType::Language, prefix))
                } else if prefix.contains('-') {
                    SubtagOrTag::Tag(composed(prefix))
                } else {
                    // A one-piece prefix is a primary language subtag.
                    SubtagOrTag::Subtag(nested(SubtagType::Language, prefix))
                }
            })
            .collect();

        RecordDetails {
            comments: record.comments.clone().unwrap_or_default(),
            date_added: record.date_added(),
            date_deprecated: record.date_deprecated(),
            descriptions: record.description.clone(),
            macrolanguage: record
                .macrolanguage
                .as_deref()
                .map(|value| nested(SubtagType::Language, value)),
            preferred_value,
            prefixes,
            scope: record.scope,
            suppressed_script: record
                .suppress_script
                .as_deref()
                .map(|value| nested(SubtagType::Script, value)),
        }
    }

    pub fn subtag_type(&self) -> SubtagTypeExtended {
        self.subtag_type
    }

    pub fn comments(&self) -> Option<&[String]> {
        self.details.as_ref().map(|d| d.comments.as_slice())
    }

    pub fn date_added(&self) -> Option<NaiveDate> {
        self.details.as_ref().and_then(|d| d.date_added)
    }

    pub fn date_deprecated(&self) -> Option<NaiveDate> {
        self.details.as_ref().and_then(|d| d.date_deprecated)
    }

    pub fn descriptions(&self) -> Option<&[String]> {
        self.details.as_ref().map(|d| d.descriptions.as_slice())
    }

    /// The singleton given for an extension subtag, as passed in.
    pub fn extension_singleton(&self) -> Option<&str> {
        self.extension_singleton.as_deref()
    }

    pub fn extension_subtag_kind(&self) -> Option<ExtensionSubtagKind> {
        self.extension_subtag_kind
    }

    /// Singletons of the extensions this subtag belongs to. Only extension
    /// and singleton subtags carry this; it is empty when they are invalid.
    pub fn extensions(&self) -> Option<&[char]> {
        self.extensions.as_deref()
    }

    pub fn macrolanguage(&self) -> Option<&LanguageSubtag> {
        self.details.as_ref()?.macrolanguage.as_deref()
    }

    pub fn preferred_value(&self) -> Option<&SubtagOrTag> {
        self.details.as_ref()?.preferred_value.as_ref()
    }

    pub fn prefixes(&self) -> Option<&[SubtagOrTag]> {
        self.details.as_ref().map(|d| d.prefixes.as_slice())
    }

    pub fn scope(&self) -> Option<RecordScope> {
        self.details.as_ref()?.scope
    }

    pub fn suppressed_script(&self) -> Option<&LanguageSubtag> {
        self.details.as_ref()?.suppressed_script.as_deref()
    }

    pub fn followed_case_conventions(&self) -> Option<bool> {
        self.followed_case_conventions
    }

    pub fn included_extensions_registered(&self) -> Option<bool> {
        self.singleton_flags.map(|f| f.include_extensions)
    }

    pub fn included_grandfathered_registered(&self) -> Option<bool> {
        self.singleton_flags.map(|f| f.include_grandfathered)
    }

    pub fn included_private_use_registered(&self) -> Option<bool> {
        self.singleton_flags.map(|f| f.include_private_use)
    }

    pub fn included_private_use_valid(&self) -> Option<bool> {
        self.singleton_flags.map(|f| f.include_private_use_valid)
    }

    pub fn strict_singletons(&self) -> Option<bool> {
        self.singleton_flags.map(|f| f.strict)
    }

    pub fn is_deprecated(&self) -> bool {
        self.date_deprecated().is_some()
    }

    pub fn is_private_use(&self) -> bool {
        self.private_use
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_well_formed(&self) -> bool {
        self.well_formed
    }

    /// Whether a registry record was found and hydrated.
    pub fn has_record(&self) -> bool {
        self.details.is_some()
    }

    /// The subtag in conventional case, or exactly as given.
    pub fn to_string_with(&self, follow_case_conventions: bool) -> &str {
        if follow_case_conventions {
            &self.formatted
        } else {
            &self.subtag
        }
    }
}

impl fmt::Display for LanguageSubtag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_by_type() {
        assert_eq!(format_subtag(SubtagType::Script, "lATN"), "Latn");
        assert_eq!(format_subtag(SubtagType::Region, "us"), "US");
        assert_eq!(format_subtag(SubtagType::Language, "EN"), "en");
        assert_eq!(format_subtag(SubtagType::Script, ""), "");
    }

    #[test]
    fn grandfathered_pieces() {
        let registry = SubtagRegistry::bundled();
        let gb = LanguageSubtag::new(registry, SubtagTypeExtended::Grandfathered, "gb", &SubtagOptions::default());
        assert_eq!(gb.to_string(), "GB");
        assert!(gb.is_valid());
        assert!(!gb.is_well_formed());
        assert!(!gb.is_registered());
        assert_eq!(gb.followed_case_conventions(), None);

        let oed = LanguageSubtag::new(registry, SubtagTypeExtended::Grandfathered, "OED", &SubtagOptions::default());
        assert_eq!(oed.to_string(), "oed");
        assert_eq!(oed.to_string_with(false), "OED");
    }
}
