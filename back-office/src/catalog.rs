//! Menu catalog - menu item collection and the price lookup seam
//!
//! The catalog is the single owner of menu items; no other screen keeps a
//! price copy. The order book prices against it through
//! [`crate::orders::PriceLookup`] at creation time only.

use rust_decimal::Decimal;
use shared::error::{CoreResult, RejectReason};
use shared::models::{MenuItem, MenuItemCreate};
use shared::util::snowflake_id;

/// Menu catalog manager (insertion-ordered)
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a menu item.
    ///
    /// Rejects an empty (or whitespace-only) name and a non-positive price;
    /// nothing is mutated on rejection.
    pub fn add_item(&mut self, data: MenuItemCreate) -> CoreResult<MenuItem> {
        let name = data.name.trim();
        if name.is_empty() {
            return Err(RejectReason::EmptyName);
        }
        if data.price <= Decimal::ZERO {
            return Err(RejectReason::NonPositivePrice);
        }

        let item = MenuItem {
            id: snowflake_id(),
            name: name.to_string(),
            category: data.category,
            price: data.price,
            available: data.available.unwrap_or(true),
            ingredients: data.ingredients,
        };
        self.items.push(item.clone());
        tracing::debug!(id = item.id, name = %item.name, "menu item added");
        Ok(item)
    }

    /// Remove a menu item by id; no-op returning `false` when absent.
    ///
    /// Orders already referencing the item keep their lines and snapshot
    /// totals; the dangling reference just displays as missing.
    pub fn remove_item(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Get a menu item by id
    pub fn get(&self, id: i64) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Unit price for a menu item; `None` for unknown ids (never an error)
    pub fn price_of(&self, id: i64) -> Option<Decimal> {
        self.get(id).map(|item| item.price)
    }

    /// Menu items in insertion order
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
