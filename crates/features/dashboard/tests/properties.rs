use fmdash_dashboard::exchange::{export_configuration, import_configuration};
use fmdash_dashboard::resolver::{get_visible_items_for_section, is_item_visible};
use fmdash_dashboard::validator::validate;
use fmdash_domain::{ConfigurationDocument, Item, Section};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z ]{0,8}".prop_map(Value::String),
        Just(Value::String("sections".into())),
        Just(Value::String("isVisible".into())),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        let key = prop_oneof![
            Just("sections".to_owned()),
            Just("items".to_owned()),
            Just("name".to_owned()),
            Just("isVisible".to_owned()),
            "[a-z]{1,4}",
        ];
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((key, inner), 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn arb_document() -> impl Strategy<Value = ConfigurationDocument> {
    let name = "[a-zA-Z][a-zA-Z0-9_]{0,10}";
    let item = (name, any::<bool>()).prop_map(|(name, visible)| Item::new(name, visible));
    let section = (name, prop::collection::vec(item, 0..8))
        .prop_map(|(name, items)| Section::new(name, items));
    prop::collection::vec(section, 0..6).prop_map(ConfigurationDocument::new)
}

proptest! {
    #[test]
    fn validator_is_total(value in arb_json()) {
        // Accepted values must also deserialize into a document.
        if validate(&value) {
            prop_assert!(serde_json::from_value::<ConfigurationDocument>(value).is_ok());
        }
    }

    #[test]
    fn import_never_panics(text in ".{0,64}") {
        let _ = import_configuration(&text);
    }

    #[test]
    fn export_import_round_trip(doc in arb_document()) {
        prop_assert_eq!(import_configuration(&export_configuration(&doc)), Some(doc));
    }

    #[test]
    fn visible_items_are_the_flagged_subsequence(doc in arb_document()) {
        for section in &doc.sections {
            let first = doc.section(&section.name).unwrap();
            let expected: Vec<&Item> = first.items.iter().filter(|item| item.is_visible).collect();
            prop_assert_eq!(get_visible_items_for_section(&doc, &section.name), expected);
        }
    }

    #[test]
    fn unknown_sections_are_never_visible(doc in arb_document(), item in "[a-z]{1,6}") {
        prop_assert!(!is_item_visible(&doc, "nonexistent-section", &item));
        prop_assert!(get_visible_items_for_section(&doc, "nonexistent-section").is_empty());
    }
}
