// SPDX-License-Identifier: PMPL-1.0-or-later

//! Unified subtag facade and tag-level grammars

use bcp47_registry::{
    format_subtag, ExtensionSelector, ExtensionSubtagKind, RecordType, SubtagOptions, SubtagRegistry, SubtagType,
};

fn registry() -> &'static SubtagRegistry {
    SubtagRegistry::bundled()
}

#[test]
fn test_script_case_scenario() {
    let options = SubtagOptions::default();
    assert!(registry().is_subtag_well_formed(SubtagType::Script, "latn", &options));
    assert_eq!(format_subtag(SubtagType::Script, "latn"), "Latn");
}

#[test]
fn test_language_private_use_scenario() {
    let options = SubtagOptions::default();
    assert!(registry().is_subtag_registered(SubtagType::Language, "en", &options));
    assert!(!registry().is_subtag_registered(SubtagType::Language, "qab", &options));
    assert!(registry().is_subtag_private_use(SubtagType::Language, "qab"));
    assert!(registry().is_subtag_valid(SubtagType::Language, "qab", &options));
}

#[test]
fn test_region_case_scenario() {
    let options = SubtagOptions::case_sensitive();
    assert!(registry().is_subtag_well_formed(SubtagType::Region, "US", &options));
    assert!(!registry().is_subtag_well_formed(SubtagType::Region, "us", &options));
}

#[test]
fn test_extension_scenario() {
    let t = SubtagOptions::extension("t", None);
    assert!(registry().is_subtag_registered(SubtagType::Extension, "d0", &t));
    assert!(!registry().is_subtag_valid(SubtagType::Extension, "ca", &t));
    assert!(registry().is_subtag_valid(SubtagType::Extension, "ABCDEF", &t));

    let u = SubtagOptions::extension("u", Some(ExtensionSubtagKind::Key));
    assert!(registry().is_subtag_valid(SubtagType::Extension, "ca", &u));

    let handle = registry().get_extension_by_singleton("u").expect("u extension");
    let by_handle = SubtagOptions {
        singleton: Some(ExtensionSelector::Extension(handle)),
        ..Default::default()
    };
    assert!(registry().is_subtag_registered(SubtagType::Extension, "gregory", &by_handle));
}

#[test]
fn test_grandfathered_scenario() {
    assert!(registry().is_grandfathered_tag("i-ami"));
    assert!(registry().is_irregular_grandfathered_tag("i-ami"));
    assert!(!registry().is_regular_grandfathered_tag("i-ami"));
    assert!(registry().is_regular_grandfathered_tag("zh-min"));
    assert!(!registry().is_irregular_grandfathered_tag("zh-min"));

    assert!(registry().is_irregular_grandfathered_tag("en-GB-oed"));
    assert!(registry().is_irregular_grandfathered_tag("SGN-be-fr"));
    assert!(registry().is_regular_grandfathered_tag("art-lojban"));
    assert!(registry().is_regular_grandfathered_tag("zh-min-nan"));

    assert!(!registry().is_grandfathered_tag("zh-Hant"));
    assert!(!registry().is_regular_grandfathered_tag("en-US"));
    assert!(!registry().is_irregular_grandfathered_tag("en-US"));
}

#[test]
fn test_private_use_mapping_scenario() {
    assert_eq!(
        registry().map_private_use_to_registered(SubtagType::Region, "qy"),
        Some("QM..QZ")
    );
    assert_eq!(registry().map_private_use_to_registered(SubtagType::Region, "us"), None);
    for subtag_type in [
        SubtagType::Extlang,
        SubtagType::PrivateUse,
        SubtagType::Singleton,
        SubtagType::Variant,
        SubtagType::Extension,
    ] {
        for subtag in ["qaa", "qy", "Qaab", "x", "abcdef"] {
            assert_eq!(
                registry().map_private_use_to_registered(subtag_type, subtag),
                None,
                "{subtag_type} {subtag}"
            );
        }
    }
}

#[test]
fn test_private_use_dispatch_constants() {
    for subtag in ["abc", "qaa", "x"] {
        assert!(registry().is_subtag_private_use(SubtagType::PrivateUse, subtag));
        assert!(!registry().is_subtag_private_use(SubtagType::Extlang, subtag));
        assert!(!registry().is_subtag_private_use(SubtagType::Variant, subtag));
        assert!(!registry().is_subtag_private_use(SubtagType::Extension, subtag));
    }
    assert!(registry().is_subtag_private_use(SubtagType::Singleton, "x"));
    assert!(!registry().is_subtag_private_use(SubtagType::Singleton, "u"));
    assert!(!registry().is_subtag_registered(
        SubtagType::PrivateUse,
        "anything",
        &SubtagOptions::default()
    ));
}

#[test]
fn test_singleton_option_defaults() {
    let options = SubtagOptions::default();
    // validity includes x, registration does not
    assert!(registry().is_subtag_valid(SubtagType::Singleton, "x", &options));
    assert!(!registry().is_subtag_registered(SubtagType::Singleton, "x", &options));
    assert!(registry().is_subtag_valid(SubtagType::Singleton, "u", &options));
    assert!(!registry().is_subtag_valid(SubtagType::Singleton, "a", &options));

    let lax = SubtagOptions {
        strict: false,
        ..Default::default()
    };
    assert!(registry().is_subtag_valid(SubtagType::Singleton, "a", &lax));

    let no_private_use = SubtagOptions {
        include_private_use_valid: false,
        ..Default::default()
    };
    assert!(!registry().is_subtag_valid(SubtagType::Singleton, "x", &no_private_use));
}

#[test]
fn test_tag_well_formedness() {
    for tag in ["en-US", "zh-Hant-TW", "de-u-co-phonebk", "x-private", "i-default", "en-t-ja-m0-ungegn"] {
        assert!(registry().is_tag_well_formed(tag), "{tag}");
    }
    for tag in ["en_US", "en-", "i-unknown", "xx-x"] {
        assert!(!registry().is_tag_well_formed(tag), "{tag}");
    }
}

#[test]
fn test_record_access_delegates_to_registry() {
    let record = registry().get_record(RecordType::Region, "DE").expect("DE");
    assert_eq!(record.description[0], "Germany");
    let entry = registry().search_index("de", &[]).expect("de is indexed");
    assert!(entry.contains(RecordType::Language));
    assert!(entry.contains(RecordType::Region));
    let index = entry.get(RecordType::Region).expect("region slot");
    assert_eq!(registry().get_record_by_index(index), Some(record));
}

#[test]
fn test_everyday_subtags_are_registered() {
    let options = SubtagOptions::default();
    let samples = [
        (SubtagType::Language, ["hi", "tr", "pl", "sw", "yue", "tlh"].as_slice()),
        (SubtagType::Region, ["KR", "IN", "BR", "NG", "UA", "001"].as_slice()),
        (SubtagType::Script, ["Deva", "Thai", "Ethi", "Hang"].as_slice()),
        (SubtagType::Variant, ["valencia", "pinyin", "oxendict", "scotland"].as_slice()),
        (SubtagType::Extlang, ["arb", "zsm", "ase"].as_slice()),
    ];
    for (subtag_type, subtags) in samples {
        for subtag in subtags {
            assert!(
                registry().is_subtag_registered(subtag_type, subtag, &options),
                "{subtag_type} {subtag}"
            );
        }
    }

    let registered = |records: RecordType| registry().registry().records_of(records).count();
    assert!(registered(RecordType::Language) > 8_000);
    assert!(registered(RecordType::Region) > 300);
    assert!(registered(RecordType::Script) > 200);
    assert!(registered(RecordType::Redundant) > 60);
}

#[test]
fn test_everyday_unicode_keys_and_types_are_registered() {
    let u = SubtagOptions::extension("u", None);
    for subtag in ["rg", "sd", "cf", "dx", "fw", "kr", "mu", "islamicc", "usd"] {
        assert!(registry().is_subtag_registered(SubtagType::Extension, subtag, &u), "{subtag}");
    }
    // Region override values are described by a pattern, not listed.
    assert!(!registry().is_subtag_registered(SubtagType::Extension, "uszzzz", &u));

    let data = registry().extensions().unicode_locale().base().data();
    let islamicc = data.type_records("islamicc");
    assert!(islamicc[0].is_deprecated());
    assert_eq!(islamicc[0].preferred.as_deref(), Some("islamic-civil"));
    assert!(data.key_accepts_type("ca", "islamic-umalqura"));
    assert!(data.key("rg").is_some_and(|rg| rg.types.contains_key("RG_KEY_VALUE")));
}
