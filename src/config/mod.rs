//! Runtime configuration: locale/currency preferences and the category
//! catalog the host supplies at startup.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::core::services::DEFAULT_WINDOW_DAYS;
use crate::domain::category::{CategoryCatalog, CategoryDef};
use crate::errors::ExpenseError;

/// Stores the host-configurable presentation preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default = "Config::default_window_days")]
    pub window_days: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "es-MX".into(),
            currency: "MXN".into(),
            window_days: Self::default_window_days(),
        }
    }
}

impl Config {
    pub fn default_window_days() -> usize {
        DEFAULT_WINDOW_DAYS
    }
}

static DEFAULT_CATALOG: Lazy<CategoryCatalog> = Lazy::new(|| {
    CategoryCatalog::new(vec![
        CategoryDef::new("comida", "Comida", "#FF6B6B", "🍔"),
        CategoryDef::new("transporte", "Transporte", "#4ECDC4", "🚗"),
        CategoryDef::new("entretenimiento", "Entretenimiento", "#45B7D1", "🎮"),
        CategoryDef::new("salud", "Salud", "#96CEB4", "💊"),
        CategoryDef::new("servicios", "Servicios", "#FFEAA7", "💡"),
        CategoryDef::new("otros", "Otros", "#DDA0DD", "📦"),
    ])
});

/// Built-in category catalog used when the host supplies none.
pub fn default_catalog() -> &'static CategoryCatalog {
    &DEFAULT_CATALOG
}

/// Parses a catalog from its JSON configuration form: a plain entry list.
pub fn catalog_from_json(json: &str) -> Result<CategoryCatalog, ExpenseError> {
    Ok(serde_json::from_str(json)?)
}

/// Parses host preferences from JSON configuration.
pub fn config_from_json(json: &str) -> Result<Config, ExpenseError> {
    Ok(serde_json::from_str(json)?)
}
