//! Inventory Item Model

use serde::{Deserialize, Serialize};

/// Inventory item entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    /// Current stock count, never negative
    pub quantity: i64,
    /// Unit-of-measure label, free-form ("kg", "l", ...)
    pub unit: String,
    /// Reorder threshold
    pub min_threshold: i64,
    /// Last restock time (ISO 8601); moves only together with `quantity`
    pub last_restocked: String,
}

impl InventoryItem {
    /// Low stock iff the quantity has fallen to or below the threshold
    /// (boundary inclusive: `quantity == min_threshold` is low).
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_threshold
    }
}

/// Create inventory item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItemCreate {
    pub name: String,
    pub quantity: i64,
    pub unit: String,
    pub min_threshold: i64,
}
