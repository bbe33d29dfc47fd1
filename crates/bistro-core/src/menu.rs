//! # Menu Types
//!
//! Menu items and reviews. The menu seeds from `config/menu.toml` at
//! startup; the core never mutates a menu item once read.

use serde::{Deserialize, Serialize};

/// A menu item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique identifier (e.g. "margherita-pizza")
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name
    pub name: String,

    /// Category (e.g. "pizza", "salad", "dessert")
    pub category: String,

    /// Price in the display currency (non-negative)
    pub price: f64,

    /// Short description
    #[serde(default)]
    pub recipe: String,

    /// Optional image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A customer review (plain pass-through collection)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub details: String,
    pub rating: f64,
}

/// Menu seed file layout (`config/menu.toml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuSeed {
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl MenuSeed {
    /// Parse a seed from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_seed_from_toml() {
        let seed = MenuSeed::from_toml(
            r#"
            [[items]]
            _id = "greek-salad"
            name = "Greek Salad"
            category = "salad"
            price = 10.0
            recipe = "Tomatoes, feta, olives"
            "#,
        )
        .unwrap();

        assert_eq!(seed.items.len(), 1);
        assert_eq!(seed.items[0].category, "salad");
        assert_eq!(seed.items[0].price, 10.0);
    }

    #[test]
    fn test_empty_seed() {
        let seed = MenuSeed::from_toml("").unwrap();
        assert!(seed.items.is_empty());
    }
}
