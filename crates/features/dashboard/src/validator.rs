//! Shape checks for configuration documents that come from outside the process.
//!
//! A value is accepted when it has a `sections` array and every section has a non-empty
//! `name` plus an `items` array whose entries each carry a non-empty `name` and a boolean
//! `isVisible`. Unknown fields are ignored. Name uniqueness is not part of the shape; see
//! [`find_duplicates`].

use fmdash_domain::ConfigurationDocument;
use fxhash::FxHashSet;
use serde_json::Value;
use std::fmt;

/// `true` when `value` has the configuration document shape.
#[must_use]
pub fn validate(value: &Value) -> bool {
    check(value).is_ok()
}

/// Same as [`validate`] for an already typed document (only names can be wrong).
#[must_use]
pub fn validate_document(document: &ConfigurationDocument) -> bool {
    document.sections.iter().all(|section| {
        is_name(&section.name) && section.items.iter().all(|item| is_name(&item.name))
    })
}

/// Like [`validate`], but reports the first violation as a path-qualified message,
/// e.g. `sections[0].items[2].isVisible must be a boolean`.
///
/// # Errors
/// Returns the description of the first violation found.
pub fn check(value: &Value) -> Result<(), String> {
    let Some(root) = value.as_object() else {
        return Err("document must be a JSON object".to_owned());
    };
    let Some(sections) = root.get("sections").and_then(Value::as_array) else {
        return Err("sections must be an array".to_owned());
    };

    for (s, section) in sections.iter().enumerate() {
        let Some(section) = section.as_object() else {
            return Err(format!("sections[{s}] must be an object"));
        };
        if !section.get("name").and_then(Value::as_str).is_some_and(is_name) {
            return Err(format!("sections[{s}].name must be a non-empty string"));
        }
        let Some(items) = section.get("items").and_then(Value::as_array) else {
            return Err(format!("sections[{s}].items must be an array"));
        };

        for (i, item) in items.iter().enumerate() {
            let Some(item) = item.as_object() else {
                return Err(format!("sections[{s}].items[{i}] must be an object"));
            };
            if !item.get("name").and_then(Value::as_str).is_some_and(is_name) {
                return Err(format!("sections[{s}].items[{i}].name must be a non-empty string"));
            }
            if !item.get("isVisible").is_some_and(Value::is_boolean) {
                return Err(format!("sections[{s}].items[{i}].isVisible must be a boolean"));
            }
        }
    }

    Ok(())
}

fn is_name(name: &str) -> bool {
    !name.is_empty()
}

/// A name that appears more than once where it should be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Duplicate {
    Section(String),
    Item { section: String, item: String },
}

impl fmt::Display for Duplicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Section(name) => write!(f, "section '{name}'"),
            Self::Item { section, item } => write!(f, "item '{item}' in section '{section}'"),
        }
    }
}

/// Every repeated section name and every repeated item name within a section, reported once
/// each in document order. Lookups only ever see the first occurrence.
#[must_use]
pub fn find_duplicates(document: &ConfigurationDocument) -> Vec<Duplicate> {
    let mut found = Vec::new();
    let mut sections = FxHashSet::default();
    let mut reported = FxHashSet::default();

    for section in &document.sections {
        if !sections.insert(section.name.as_str()) && reported.insert(section.name.as_str()) {
            found.push(Duplicate::Section(section.name.clone()));
        }

        let mut items = FxHashSet::default();
        let mut reported_items = FxHashSet::default();
        for item in &section.items {
            if !items.insert(item.name.as_str()) && reported_items.insert(item.name.as_str()) {
                found.push(Duplicate::Item {
                    section: section.name.clone(),
                    item: item.name.clone(),
                });
            }
        }
    }

    found
}
