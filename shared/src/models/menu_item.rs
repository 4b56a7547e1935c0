//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuCategory {
    #[default]
    Main,
    Side,
    Dessert,
    Beverage,
}

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub category: MenuCategory,
    /// Price in currency unit, strictly positive once created
    pub price: Decimal,
    pub available: bool,
    /// Ingredient names, display-only (no computation reads this)
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub category: MenuCategory,
    pub price: Decimal,
    /// Defaults to true
    pub available: Option<bool>,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl MenuItemCreate {
    pub fn new(name: impl Into<String>, category: MenuCategory, price: Decimal) -> Self {
        Self {
            name: name.into(),
            category,
            price,
            available: None,
            ingredients: Vec::new(),
        }
    }
}
