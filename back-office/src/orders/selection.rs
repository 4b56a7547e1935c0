//! Selection buffer - the not-yet-committed lines of a new order

use serde::{Deserialize, Serialize};
use shared::models::OrderLine;

/// Transient item selection a user assembles before submitting an order.
///
/// Plain data with no hidden state; the order book drains it only after a
/// successful creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionBuffer {
    lines: Vec<OrderLine>,
}

impl SelectionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select one more unit of a menu item.
    ///
    /// An already-selected item gets its quantity bumped by one instead of a
    /// duplicate line.
    pub fn add(&mut self, menu_item_id: i64) {
        match self
            .lines
            .iter_mut()
            .find(|line| line.menu_item_id == menu_item_id)
        {
            Some(line) => line.quantity += 1,
            None => self.lines.push(OrderLine {
                menu_item_id,
                quantity: 1,
            }),
        }
    }

    /// Drop a menu item from the selection entirely (not decrement-by-one)
    pub fn remove(&mut self, menu_item_id: i64) {
        self.lines.retain(|line| line.menu_item_id != menu_item_id);
    }

    /// Selected lines, in first-selected order
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BURGER: i64 = 1;
    const FRIES: i64 = 2;

    #[test]
    fn test_add_new_item_appends_single_unit() {
        let mut buffer = SelectionBuffer::new();
        buffer.add(BURGER);

        assert_eq!(
            buffer.lines(),
            &[OrderLine {
                menu_item_id: BURGER,
                quantity: 1
            }]
        );
    }

    #[test]
    fn test_add_existing_item_increments_not_duplicates() {
        let mut buffer = SelectionBuffer::new();
        buffer.add(BURGER);
        buffer.add(BURGER);

        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.lines()[0].quantity, 2);
    }

    #[test]
    fn test_remove_drops_whole_line() {
        let mut buffer = SelectionBuffer::new();
        buffer.add(BURGER);
        buffer.add(BURGER);
        buffer.add(FRIES);

        buffer.remove(BURGER);
        assert_eq!(
            buffer.lines(),
            &[OrderLine {
                menu_item_id: FRIES,
                quantity: 1
            }]
        );
    }

    #[test]
    fn test_remove_absent_item_is_noop() {
        let mut buffer = SelectionBuffer::new();
        buffer.add(FRIES);
        buffer.remove(BURGER);

        assert_eq!(buffer.len(), 1);
    }
}
