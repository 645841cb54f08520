use serde::{Deserialize, Serialize};

/// The full dashboard configuration: ordered sections, each holding ordered items.
///
/// Section names are expected to be unique within a document and item names unique within
/// a section. Lookups are linear and return the first match when that expectation is broken.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationDocument {
    pub sections: Vec<Section>,
}

/// A named group of dashboard cards, e.g. `tickets` or `amc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub items: Vec<Item>,
}

/// One dashboard card and whether it should render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    pub is_visible: bool,
}

impl ConfigurationDocument {
    #[must_use]
    pub const fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// First section called `name` (case-sensitive).
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.name == name)
    }

    /// Mutable access to the first section called `name`.
    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|section| section.name == name)
    }

    /// Section names in display order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|section| section.name.as_str())
    }

    /// Total number of items across all sections.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|section| section.items.len()).sum()
    }
}

impl Section {
    pub fn new(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self { name: name.into(), items }
    }

    /// First item called `name` (case-sensitive).
    #[must_use]
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Visible items in their original order.
    pub fn visible_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.is_visible)
    }
}

impl Item {
    pub fn new(name: impl Into<String>, is_visible: bool) -> Self {
        Self { name: name.into(), is_visible }
    }

    pub fn visible(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    pub fn hidden(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }
}
