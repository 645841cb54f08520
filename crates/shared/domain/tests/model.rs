use fmdash_domain::{ConfigurationDocument, Item, Section};
use serde_json::json;

fn sample() -> ConfigurationDocument {
    ConfigurationDocument::new(vec![
        Section::new(
            "amc",
            vec![
                Item::visible("statusOverview"),
                Item::hidden("typeDistribution"),
                Item::visible("expiryAnalysis"),
            ],
        ),
        Section::new("tickets", vec![Item::visible("categoryWiseTickets")]),
    ])
}

#[test]
fn items_use_camel_case_visibility_flag() {
    let value = serde_json::to_value(Item::visible("statusOverview")).unwrap();
    assert_eq!(value, json!({ "name": "statusOverview", "isVisible": true }));

    let item: Item = serde_json::from_value(json!({ "name": "a", "isVisible": false })).unwrap();
    assert_eq!(item, Item::hidden("a"));
}

#[test]
fn unknown_fields_are_ignored() {
    let doc: ConfigurationDocument = serde_json::from_value(json!({
        "version": 3,
        "sections": [{ "name": "x", "label": "X", "items": [] }]
    }))
    .unwrap();
    assert_eq!(doc.section_names().collect::<Vec<_>>(), ["x"]);
}

#[test]
fn lookups_are_case_sensitive() {
    let doc = sample();
    assert!(doc.section("amc").is_some());
    assert!(doc.section("AMC").is_none());
    assert!(doc.section("amc").and_then(|s| s.item("statusoverview")).is_none());
}

#[test]
fn lookups_return_first_match_on_duplicates() {
    let mut doc = sample();
    doc.sections.push(Section::new("amc", vec![Item::hidden("statusOverview")]));

    let section = doc.section("amc").unwrap();
    assert_eq!(section.items.len(), 3);
    assert!(section.item("statusOverview").unwrap().is_visible);
}

#[test]
fn visible_items_keep_order() {
    let doc = sample();
    let names: Vec<_> =
        doc.section("amc").unwrap().visible_items().map(|item| item.name.as_str()).collect();
    assert_eq!(names, ["statusOverview", "expiryAnalysis"]);
    assert_eq!(doc.item_count(), 4);
}
