// SPDX-License-Identifier: PMPL-1.0-or-later

//! Extension dispatch and the `t`/`u` sub-registries

use bcp47_registry::{
    ExtensionOptions, ExtensionRegistry, ExtensionSelector, ExtensionSpec, ExtensionSubtagKind,
    ExtensionSubtagOptions,
};

fn registry() -> &'static ExtensionRegistry {
    ExtensionRegistry::bundled()
}

#[test]
fn test_get_extension_by_singleton() {
    let t = registry().get_extension_by_singleton("t").expect("t extension");
    let u = registry().get_extension_by_singleton("U").expect("u extension");
    assert_eq!(t.singleton(), 't');
    assert_eq!(u.singleton(), 'u');
    assert_ne!(t, u);
    assert_eq!(t.name(), "transformed-content");
    assert_eq!(t.base().data_path(), "transform");
    assert_eq!(u.base().data_path(), "unicode");

    for other in ["x", "i", "a", "tu", ""] {
        assert!(
            registry().get_extension_by_singleton(other).is_none(),
            "{other:?} should not resolve"
        );
    }
}

#[test]
fn test_get_extensions_by_subtag_keeps_order() {
    let shared: Vec<char> = registry()
        .get_extensions_by_subtag("upper")
        .iter()
        .map(|ext| ext.singleton())
        .collect();
    assert_eq!(shared, vec!['t', 'u']);

    let unicode_only: Vec<char> = registry()
        .get_extensions_by_subtag("ca")
        .iter()
        .map(|ext| ext.singleton())
        .collect();
    assert_eq!(unicode_only, vec!['u']);

    let transform_only: Vec<char> = registry()
        .get_extensions_by_subtag("D0")
        .iter()
        .map(|ext| ext.singleton())
        .collect();
    assert_eq!(transform_only, vec!['t']);

    assert!(registry().get_extensions_by_subtag("abcdef").is_empty());
    assert!(registry().get_extensions_by_subtag("private_use").is_empty());
}

#[test]
fn test_transformed_content_scenarios() {
    let t = registry().transformed_content();
    let defaults = ExtensionSubtagOptions::default();

    assert!(t.is_extension_subtag_registered("d0", defaults));
    assert!(!t.is_extension_subtag_valid("ca", defaults));
    assert!(t.is_extension_subtag_valid("ABCDEF", defaults));
    assert!(t.is_extension_subtag_private_use("ABCDEF", None));
    assert!(!t.is_extension_subtag_registered("ABCDEF", defaults));
}

#[test]
fn test_transformed_content_kinds() {
    let t = registry().transformed_content();
    let key = ExtensionSubtagOptions::of_kind(ExtensionSubtagKind::Key);
    let ty = ExtensionSubtagOptions::of_kind(ExtensionSubtagKind::Type);

    assert!(t.is_extension_subtag_valid("d0", key));
    assert!(!t.is_extension_subtag_valid("d0", ty));
    assert!(t.is_extension_subtag_valid("upper", ty));
    assert!(!t.is_extension_subtag_valid("upper", key));
    assert!(t.is_extension_subtag_valid("zzzzz", ty));
    assert!(!t.is_extension_subtag_private_use("zzzzz", Some(ExtensionSubtagKind::Attr)));
}

#[test]
fn test_unicode_locale_has_no_private_use() {
    let u = registry().unicode_locale();
    let defaults = ExtensionSubtagOptions::default();
    assert!(u.is_extension_subtag_valid("ca", defaults));
    assert!(u.is_extension_subtag_valid("gregory", defaults));
    assert!(!u.is_extension_subtag_valid("abcdef", defaults));
    assert!(!u.is_extension_subtag_valid("d0", defaults));
}

#[test]
fn test_extension_data_tables() {
    let u = registry().unicode_locale();
    let data = u.base().data();
    let ca = data.key("ca").expect("ca key");
    assert_eq!(ca.alias.as_deref(), Some("calendar"));
    assert!(data.key_accepts_type("ca", "gregory"));
    assert!(data.key_accepts_type("CA", "ISO8601"));
    assert!(!data.key_accepts_type("co", "gregory"));
    assert!(data.key_types("ca").iter().any(|ty| ty.name == "hebrew"));

    let t = registry().transformed_content();
    let x0 = t.base().data().key("x0").expect("x0 key");
    assert!(x0.types.contains_key("PRIVATE_USE"));
}

#[test]
fn test_dispatch_requires_singleton() {
    let none = ExtensionOptions::default();
    assert!(!registry().is_registered("ca", &none));
    assert!(!registry().is_valid("ca", &none));
    assert!(registry().is_well_formed("ca", &none));
    assert!(registry().is_well_formed("ABCDEFGH", &none));
    assert!(!registry().is_well_formed("ABCDEFGHI", &none));

    let by_name = ExtensionOptions {
        singleton: Some(ExtensionSelector::Singleton("u")),
        ..Default::default()
    };
    assert!(registry().is_registered("ca", &by_name));
    assert!(registry().is_valid("ca", &by_name));

    let t = registry().get_extension_by_singleton("t").expect("t extension");
    let by_handle = ExtensionOptions {
        singleton: Some(ExtensionSelector::Extension(t)),
        subtag: ExtensionSubtagOptions::of_kind(ExtensionSubtagKind::Type),
    };
    assert!(!registry().is_registered("ca", &by_handle));
    assert!(registry().is_valid("abcdef", &by_handle));
    assert!(!registry().is_well_formed("ab", &by_handle));

    let unknown = ExtensionOptions {
        singleton: Some(ExtensionSelector::Singleton("q")),
        ..Default::default()
    };
    assert!(!registry().is_valid("ca", &unknown));
    assert!(registry().is_well_formed("ca", &unknown));
}
