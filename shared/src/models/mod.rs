//! Data models
//!
//! Shared between the back-office managers and whatever shell renders them.
//! All IDs are `i64` (snowflake, see `util::snowflake_id`); all timestamps
//! are ISO-8601 strings; all money is `rust_decimal::Decimal`.

pub mod inventory_item;
pub mod menu_item;
pub mod order;
pub mod staff;

// Re-exports
pub use inventory_item::*;
pub use menu_item::*;
pub use order::*;
pub use staff::*;
