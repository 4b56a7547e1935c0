//! Order Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order lifecycle status.
///
/// A free-form overwrite, not a guarded workflow: any status is reachable
/// from any other and COMPLETED is not terminal. There is deliberately no
/// error/cancelled state; no operation can produce one, so the display
/// mapping stays exhaustive over these four.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Completed,
}

impl OrderStatus {
    /// All statuses, in dashboard tile order
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
    ];

    /// Lowercase display label for summary tiles
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Completed => "completed",
        }
    }
}

/// One order line: a weak reference to a menu item plus a quantity.
///
/// If the referenced menu item is removed later the line dangles; it then
/// displays as missing and prices as zero. The order keeps its snapshot
/// total either way.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderLine {
    pub menu_item_id: i64,
    pub quantity: i64,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: i64,
    pub items: Vec<OrderLine>,
    pub status: OrderStatus,
    /// Snapshot total fixed at creation time from the prices then in
    /// effect; never recomputed, even if menu prices change afterwards
    pub total_amount: Decimal,
    /// Creation time (ISO 8601), immutable
    pub timestamp: String,
}
