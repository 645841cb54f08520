//! Visibility queries over a configuration document.
//!
//! Unknown sections and items are not errors: documents routinely lag behind newly shipped
//! cards, so a miss simply means "not visible". Under duplicate names the first match wins.

use fmdash_domain::{ConfigurationDocument, Item, Section};

/// Visibility flag of `item` in `section`, `false` when either is missing.
#[must_use]
pub fn is_item_visible(document: &ConfigurationDocument, section: &str, item: &str) -> bool {
    document
        .section(section)
        .and_then(|section| section.item(item))
        .is_some_and(|item| item.is_visible)
}

/// Visible items of `section` in their original order; empty for an unknown section.
#[must_use]
pub fn get_visible_items_for_section<'a>(
    document: &'a ConfigurationDocument,
    section: &str,
) -> Vec<&'a Item> {
    document.section(section).map(|section| section.visible_items().collect()).unwrap_or_default()
}

#[must_use]
pub fn section_has_any_visible_item(document: &ConfigurationDocument, section: &str) -> bool {
    document.section(section).is_some_and(|section| section.visible_items().next().is_some())
}

/// Names of the visible items of `section`, for mounting cards by key.
#[must_use]
pub fn visible_item_names<'a>(document: &'a ConfigurationDocument, section: &str) -> Vec<&'a str> {
    get_visible_items_for_section(document, section)
        .into_iter()
        .map(|item| item.name.as_str())
        .collect()
}

/// Copy of `document` extended with whatever only `defaults` knows about.
///
/// Missing sections are appended whole, missing items are appended to their section, both in
/// default order with default visibility. Nothing already in `document` changes.
#[must_use]
pub fn merge_with_defaults(
    document: &ConfigurationDocument,
    defaults: &ConfigurationDocument,
) -> ConfigurationDocument {
    let mut merged = document.clone();

    for default_section in &defaults.sections {
        match merged.section_mut(&default_section.name) {
            Some(section) => {
                let missing: Vec<Item> = default_section
                    .items
                    .iter()
                    .filter(|item| section.item(&item.name).is_none())
                    .cloned()
                    .collect();
                section.items.extend(missing);
            },
            None => merged.sections.push(default_section.clone()),
        }
    }

    merged
}

/// Replacement items for `section` with `item` switched to `visible`, ready for a section
/// update. `None` when the section or the item is unknown.
#[must_use]
pub fn with_item_visibility(
    document: &ConfigurationDocument,
    section: &str,
    item: &str,
    visible: bool,
) -> Option<Vec<Item>> {
    let Section { items, .. } = document.section(section)?;
    let index = items.iter().position(|candidate| candidate.name == item)?;

    let mut items = items.clone();
    items[index].is_visible = visible;
    Some(items)
}
