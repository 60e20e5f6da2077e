use serde::{Deserialize, Serialize};

use super::common::{Displayable, NamedEntity};

/// One entry of the category catalog: the stable identifier plus its
/// presentation attributes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryDef {
    pub value: String,
    pub label: String,
    pub color: String,
    pub icon: String,
}

impl CategoryDef {
    pub fn new(
        value: impl Into<String>,
        label: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            color: color.into(),
            icon: icon.into(),
        }
    }
}

impl NamedEntity for CategoryDef {
    fn name(&self) -> &str {
        &self.label
    }
}

impl Displayable for CategoryDef {
    fn display_label(&self) -> String {
        format!("{} {}", self.icon, self.label)
    }
}

/// Fixed, ordered sequence of category definitions.
///
/// Supplied once at startup as configuration; the core treats it as an
/// immutable input. Catalog order is the display order and drives the order
/// of per-category aggregates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CategoryCatalog {
    entries: Vec<CategoryDef>,
}

impl CategoryCatalog {
    pub fn new(entries: Vec<CategoryDef>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CategoryDef] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryDef> {
        self.entries.iter()
    }

    pub fn first(&self) -> Option<&CategoryDef> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a definition by its identifier value.
    pub fn get(&self, value: &str) -> Option<&CategoryDef> {
        self.entries.iter().find(|def| def.value == value)
    }

    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.get(value).map(|def| def.label.as_str())
    }

    pub fn color_for(&self, value: &str) -> Option<&str> {
        self.get(value).map(|def| def.color.as_str())
    }

    pub fn icon_for(&self, value: &str) -> Option<&str> {
        self.get(value).map(|def| def.icon.as_str())
    }
}
