//! Composed back-office state
//!
//! One cloneable handle over the four managers. Each screen still owns its
//! collection exclusively; the handle only routes calls and covers the one
//! cross-manager flow there is: pricing a new order against the live catalog.

use crate::{InventoryLedger, MenuCatalog, OrderBook, SelectionBuffer, StaffRoster, StatusCounts};
use parking_lot::RwLock;
use rust_decimal::Decimal;
use shared::error::CoreResult;
use shared::models::{InventoryItemCreate, MenuCategory, MenuItemCreate, Order};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct BackOffice {
    pub catalog: Arc<RwLock<MenuCatalog>>,
    pub inventory: Arc<RwLock<InventoryLedger>>,
    pub orders: Arc<RwLock<OrderBook>>,
    pub staff: Arc<RwLock<StaffRoster>>,
}

impl std::fmt::Debug for BackOffice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackOffice")
            .field("menu_items", &self.catalog.read().len())
            .field("inventory_items", &self.inventory.read().len())
            .field("orders", &self.orders.read().len())
            .field("staff", &self.staff.read().len())
            .finish()
    }
}

impl BackOffice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an order priced against the current catalog, draining the
    /// given selection on success.
    ///
    /// The catalog is the single owner of menu prices; the order book only
    /// ever sees them through this call, at creation time.
    pub fn place_order(&self, selection: &mut SelectionBuffer) -> CoreResult<Order> {
        let catalog = self.catalog.read();
        let mut orders = self.orders.write();
        orders.create_order(selection, &*catalog)
    }

    /// The four status tiles of the order screen
    pub fn order_summary(&self) -> StatusCounts {
        self.orders.read().status_counts()
    }

    /// Number of inventory items at or below their reorder threshold
    pub fn stock_alert(&self) -> usize {
        self.inventory.read().low_stock_count()
    }

    /// Load the sample rows the dashboard ships with: Rice and Tomatoes in
    /// the ledger, Burger and Fries on the menu.
    pub fn seed_demo_data(&self) {
        {
            let mut inventory = self.inventory.write();
            inventory.add_item(InventoryItemCreate {
                name: "Rice".to_string(),
                quantity: 50,
                unit: "kg".to_string(),
                min_threshold: 20,
            });
            inventory.add_item(InventoryItemCreate {
                name: "Tomatoes".to_string(),
                quantity: 15,
                unit: "kg".to_string(),
                min_threshold: 10,
            });
        }

        {
            let mut catalog = self.catalog.write();
            for (name, category, cents) in [
                ("Burger", MenuCategory::Main, 1299),
                ("Fries", MenuCategory::Side, 499),
            ] {
                // Seed rows are well-formed; a reject here is a programming error
                catalog
                    .add_item(MenuItemCreate::new(name, category, Decimal::new(cents, 2)))
                    .expect("seed menu item is valid");
            }
        }

        tracing::info!(state = ?self, "demo data seeded");
    }
}
