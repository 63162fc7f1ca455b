// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for bcp47-registry
//!
//! Record types and scopes mirror the field values of the IANA language
//! subtag registry. Subtag types cover every component a BCP 47 tag can be
//! decomposed into.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// The `Type` field of a registry record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Language,
    Extlang,
    Script,
    Region,
    Variant,
    Grandfathered,
    Redundant,
}

impl RecordType {
    /// Parse a record type name. Case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "language" => Some(RecordType::Language),
            "extlang" => Some(RecordType::Extlang),
            "script" => Some(RecordType::Script),
            "region" => Some(RecordType::Region),
            "variant" => Some(RecordType::Variant),
            "grandfathered" => Some(RecordType::Grandfathered),
            "redundant" => Some(RecordType::Redundant),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Language => "language",
            RecordType::Extlang => "extlang",
            RecordType::Script => "script",
            RecordType::Region => "region",
            RecordType::Variant => "variant",
            RecordType::Grandfathered => "grandfathered",
            RecordType::Redundant => "redundant",
        }
    }

    /// Records of these types carry a `Subtag` field; the rest carry a `Tag`.
    pub fn has_subtag(&self) -> bool {
        !matches!(self, RecordType::Grandfathered | RecordType::Redundant)
    }

    pub fn all() -> &'static [RecordType] {
        &[
            RecordType::Language,
            RecordType::Extlang,
            RecordType::Script,
            RecordType::Region,
            RecordType::Variant,
            RecordType::Grandfathered,
            RecordType::Redundant,
        ]
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `Scope` field of a language or extlang record. Absent means an
/// individual language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordScope {
    Macrolanguage,
    Collection,
    Special,
    PrivateUse,
}

impl RecordScope {
    /// Parse a scope value. Case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "macrolanguage" => Some(RecordScope::Macrolanguage),
            "collection" => Some(RecordScope::Collection),
            "special" => Some(RecordScope::Special),
            "private-use" => Some(RecordScope::PrivateUse),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordScope::Macrolanguage => "macrolanguage",
            RecordScope::Collection => "collection",
            RecordScope::Special => "special",
            RecordScope::PrivateUse => "private-use",
        }
    }
}

impl fmt::Display for RecordScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of component a subtag occupies within a language tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubtagType {
    Language,
    Extlang,
    Script,
    Region,
    Variant,
    Extension,
    PrivateUse,
    Singleton,
}

impl SubtagType {
    /// Parse a subtag type name. Case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "language" => Some(SubtagType::Language),
            "extlang" => Some(SubtagType::Extlang),
            "script" => Some(SubtagType::Script),
            "region" => Some(SubtagType::Region),
            "variant" => Some(SubtagType::Variant),
            "extension" => Some(SubtagType::Extension),
            "privateuse" => Some(SubtagType::PrivateUse),
            "singleton" => Some(SubtagType::Singleton),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubtagType::Language => "language",
            SubtagType::Extlang => "extlang",
            SubtagType::Script => "script",
            SubtagType::Region => "region",
            SubtagType::Variant => "variant",
            SubtagType::Extension => "extension",
            SubtagType::PrivateUse => "privateuse",
            SubtagType::Singleton => "singleton",
        }
    }

    /// The registry record type backing this subtag type, if any.
    pub fn record_type(&self) -> Option<RecordType> {
        match self {
            SubtagType::Language => Some(RecordType::Language),
            SubtagType::Extlang => Some(RecordType::Extlang),
            SubtagType::Script => Some(RecordType::Script),
            SubtagType::Region => Some(RecordType::Region),
            SubtagType::Variant => Some(RecordType::Variant),
            SubtagType::Extension | SubtagType::PrivateUse | SubtagType::Singleton => None,
        }
    }

    pub fn all() -> &'static [SubtagType] {
        &[
            SubtagType::Language,
            SubtagType::Extlang,
            SubtagType::Script,
            SubtagType::Region,
            SubtagType::Variant,
            SubtagType::Extension,
            SubtagType::PrivateUse,
            SubtagType::Singleton,
        ]
    }
}

impl fmt::Display for SubtagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A subtag type, or one piece of an irregular grandfathered tag.
///
/// Serialized as its lowercase name, the same string `as_str` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubtagTypeExtended {
    Subtag(SubtagType),
    Grandfathered,
}

impl From<SubtagType> for SubtagTypeExtended {
    fn from(value: SubtagType) -> Self {
        SubtagTypeExtended::Subtag(value)
    }
}

impl SubtagTypeExtended {
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("grandfathered") {
            return Some(SubtagTypeExtended::Grandfathered);
        }
        SubtagType::parse(value).map(SubtagTypeExtended::Subtag)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubtagTypeExtended::Subtag(ty) => ty.as_str(),
            SubtagTypeExtended::Grandfathered => "grandfathered",
        }
    }
}

impl fmt::Display for SubtagTypeExtended {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const EXTENDED_TYPE_NAMES: &[&str] = &[
    "language",
    "extlang",
    "script",
    "region",
    "variant",
    "extension",
    "privateuse",
    "singleton",
    "grandfathered",
];

impl Serialize for SubtagTypeExtended {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SubtagTypeExtended {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        SubtagTypeExtended::parse(&value).ok_or_else(|| de::Error::unknown_variant(&value, EXTENDED_TYPE_NAMES))
    }
}

/// The slot an extension subtag fills within a Unicode-style extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionSubtagKind {
    Attr,
    Key,
    Type,
}

impl ExtensionSubtagKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "attr" | "attribute" => Some(ExtensionSubtagKind::Attr),
            "key" => Some(ExtensionSubtagKind::Key),
            "type" => Some(ExtensionSubtagKind::Type),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExtensionSubtagKind::Attr => "attr",
            ExtensionSubtagKind::Key => "key",
            ExtensionSubtagKind::Type => "type",
        }
    }
}

impl fmt::Display for ExtensionSubtagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_types_parse_case_insensitively() {
        assert_eq!(RecordType::parse("language"), Some(RecordType::Language));
        assert_eq!(RecordType::parse("EXTLANG"), Some(RecordType::Extlang));
        assert_eq!(RecordType::parse("Redundant"), Some(RecordType::Redundant));
        assert_eq!(RecordType::parse("type"), None);
        assert_eq!(RecordType::parse(""), None);
    }

    #[test]
    fn record_scopes_parse_case_insensitively() {
        assert_eq!(RecordScope::parse("macrolanguage"), Some(RecordScope::Macrolanguage));
        assert_eq!(RecordScope::parse("Collection"), Some(RecordScope::Collection));
        assert_eq!(RecordScope::parse("special"), Some(RecordScope::Special));
        assert_eq!(RecordScope::parse("private-use"), Some(RecordScope::PrivateUse));
        assert_eq!(RecordScope::parse("scope"), None);
    }

    #[test]
    fn subtag_types_round_trip_through_names() {
        for ty in SubtagType::all() {
            assert_eq!(SubtagType::parse(ty.as_str()), Some(*ty));
        }
        assert_eq!(SubtagType::parse("grandfathered"), None);
        assert_eq!(
            SubtagTypeExtended::parse("grandfathered"),
            Some(SubtagTypeExtended::Grandfathered)
        );
    }

    #[test]
    fn extended_types_serialize_as_their_names() {
        let grandfathered = serde_json::to_string(&SubtagTypeExtended::Grandfathered).expect("serialize");
        assert_eq!(grandfathered, r#""grandfathered""#);

        let mut all: Vec<SubtagTypeExtended> = SubtagType::all().iter().copied().map(Into::into).collect();
        all.push(SubtagTypeExtended::Grandfathered);
        for ty in all {
            let json = serde_json::to_string(&ty).expect("serialize");
            assert_eq!(json, format!("\"{}\"", ty.as_str()));
            let back: SubtagTypeExtended = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(back, ty);
        }

        assert!(serde_json::from_str::<SubtagTypeExtended>(r#""subtag""#).is_err());
        assert!(serde_json::from_str::<SubtagTypeExtended>("null").is_err());
    }

    #[test]
    fn only_subtag_backed_types_map_to_records() {
        assert_eq!(SubtagType::Region.record_type(), Some(RecordType::Region));
        assert_eq!(SubtagType::Extension.record_type(), None);
        assert_eq!(SubtagType::PrivateUse.record_type(), None);
        assert_eq!(SubtagType::Singleton.record_type(), None);
    }
}
