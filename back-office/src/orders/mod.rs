//! Order book - order creation, status overwrites, and summary counts
//!
//! Totals are snapshots: computed once at creation from the prices in effect
//! at that moment and never recomputed afterwards, so later menu edits never
//! drift an existing order's amount.

mod selection;

pub use selection::SelectionBuffer;

use crate::catalog::MenuCatalog;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::error::{CoreResult, RejectReason};
use shared::models::{Order, OrderStatus};
use shared::util::{now_iso, snowflake_id};
use std::collections::HashMap;

/// Price lookup capability the order book consults at creation time.
///
/// Unknown ids resolve to `None` and price as zero; a dangling menu
/// reference is display noise, not a failure.
pub trait PriceLookup {
    fn price_of(&self, menu_item_id: i64) -> Option<Decimal>;
}

impl PriceLookup for MenuCatalog {
    fn price_of(&self, menu_item_id: i64) -> Option<Decimal> {
        MenuCatalog::price_of(self, menu_item_id)
    }
}

/// Fixed price table; the order screen's offline fallback and the test seam
impl PriceLookup for HashMap<i64, Decimal> {
    fn price_of(&self, menu_item_id: i64) -> Option<Decimal> {
        self.get(&menu_item_id).copied()
    }
}

/// Per-status order counts (the four dashboard summary tiles)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub preparing: usize,
    pub ready: usize,
    pub completed: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.pending + self.preparing + self.ready + self.completed
    }
}

/// Order book manager (most-recent-first)
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an order from the current selection.
    ///
    /// Rejects an empty selection without creating anything. On success the
    /// order gets a fresh id, the current timestamp, `PENDING` status, and a
    /// snapshot total of `Σ price × quantity` over the selected lines
    /// (unresolved menu ids contribute zero); it is inserted at the front of
    /// the collection and the selection buffer is drained.
    pub fn create_order(
        &mut self,
        selection: &mut SelectionBuffer,
        prices: &impl PriceLookup,
    ) -> CoreResult<Order> {
        if selection.is_empty() {
            return Err(RejectReason::EmptySelection);
        }

        let items = selection.lines().to_vec();
        let total_amount: Decimal = items
            .iter()
            .map(|line| {
                let unit = prices.price_of(line.menu_item_id).unwrap_or(Decimal::ZERO);
                unit * Decimal::from(line.quantity)
            })
            .sum();

        let order = Order {
            id: snowflake_id(),
            items,
            status: OrderStatus::Pending,
            total_amount,
            timestamp: now_iso(),
        };

        self.orders.insert(0, order.clone());
        selection.clear();
        tracing::info!(id = order.id, total = %order.total_amount, "order created");
        Ok(order)
    }

    /// Overwrite an order's status in place.
    ///
    /// Any status is reachable from any other; there is no transition graph
    /// and no terminal state. Unknown ids leave every entry untouched and
    /// return `false`.
    pub fn set_status(&mut self, order_id: i64, status: OrderStatus) -> bool {
        match self.orders.iter_mut().find(|order| order.id == order_id) {
            Some(order) => {
                order.status = status;
                tracing::debug!(id = order_id, status = status.label(), "order status set");
                true
            }
            None => false,
        }
    }

    /// Count of orders currently in the given status
    pub fn count_by_status(&self, status: OrderStatus) -> usize {
        self.orders
            .iter()
            .filter(|order| order.status == status)
            .count()
    }

    /// All four tile counts in one read
    pub fn status_counts(&self) -> StatusCounts {
        StatusCounts {
            pending: self.count_by_status(OrderStatus::Pending),
            preparing: self.count_by_status(OrderStatus::Preparing),
            ready: self.count_by_status(OrderStatus::Ready),
            completed: self.count_by_status(OrderStatus::Completed),
        }
    }

    /// Get an order by id
    pub fn get(&self, order_id: i64) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == order_id)
    }

    /// Orders, most recent first
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
