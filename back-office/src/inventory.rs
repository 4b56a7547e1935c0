//! Inventory ledger - stock levels and the low-stock alert

use shared::models::{InventoryItem, InventoryItemCreate};
use shared::util::{now_iso, snowflake_id};

/// Inventory ledger manager (insertion-ordered)
#[derive(Debug, Clone, Default)]
pub struct InventoryLedger {
    items: Vec<InventoryItem>,
}

impl InventoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an inventory item, stamping its id and `last_restocked`.
    ///
    /// Negative quantities and thresholds clamp to zero; both fields are
    /// counts and never go below it.
    pub fn add_item(&mut self, data: InventoryItemCreate) -> InventoryItem {
        let item = InventoryItem {
            id: snowflake_id(),
            name: data.name,
            quantity: data.quantity.max(0),
            unit: data.unit,
            min_threshold: data.min_threshold.max(0),
            last_restocked: now_iso(),
        };
        self.items.push(item.clone());
        tracing::debug!(id = item.id, name = %item.name, "inventory item added");
        item
    }

    /// Remove an inventory item by id; no-op returning `false` when absent.
    pub fn remove_item(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Set a new stock count, moving `last_restocked` with it.
    ///
    /// Quantity and restock time always change together; restocking without
    /// updating the timestamp is never valid. Returns `false` for unknown
    /// ids without touching any entry.
    pub fn restock(&mut self, id: i64, new_quantity: i64, timestamp: impl Into<String>) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.quantity = new_quantity.max(0);
                item.last_restocked = timestamp.into();
                tracing::debug!(id, quantity = item.quantity, "inventory restocked");
                true
            }
            None => false,
        }
    }

    /// Count of items at or below their reorder threshold
    pub fn low_stock_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_low_stock()).count()
    }

    /// Items currently at or below their reorder threshold (alert tile rows)
    pub fn low_stock_items(&self) -> Vec<&InventoryItem> {
        self.items.iter().filter(|item| item.is_low_stock()).collect()
    }

    /// Get an inventory item by id
    pub fn get(&self, id: i64) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items in insertion order
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
