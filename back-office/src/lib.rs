//! Cafeteria Planner back-office core
//!
//! Three independent in-memory managers, each backing one dashboard screen:
//!
//! - [`MenuCatalog`] — menu items; sole owner of prices
//! - [`InventoryLedger`] — stock levels and the low-stock alert
//! - [`OrderBook`] — orders, snapshot totals, status overwrites
//!
//! plus a [`StaffRoster`] for the staff schedule screen and a composed
//! [`BackOffice`] handle a presentation shell can hold. Every mutation is
//! synchronous and completes before the next one is processed; re-renders
//! are a pure projection of the latest collection state.

pub mod catalog;
pub mod inventory;
pub mod orders;
pub mod staff;
pub mod state;

// Re-exports
pub use catalog::MenuCatalog;
pub use inventory::InventoryLedger;
pub use orders::{OrderBook, PriceLookup, SelectionBuffer, StatusCounts};
pub use staff::StaffRoster;
pub use state::BackOffice;
