//! End-to-end walk of the three dashboard screens against one shared handle.

use back_office::{BackOffice, SelectionBuffer};
use rust_decimal::Decimal;
use shared::error::RejectReason;
use shared::models::{MenuCategory, MenuItemCreate, OrderStatus};

#[test]
fn test_full_dashboard_flow() {
    let office = BackOffice::new();
    office.seed_demo_data();

    // Inventory screen: seeded rows are above threshold
    assert_eq!(office.stock_alert(), 0);

    // Menu screen: invalid drafts never land; valid ones append
    assert_eq!(
        office.catalog.write().add_item(MenuItemCreate::new(
            "",
            MenuCategory::Dessert,
            Decimal::new(350, 2)
        )),
        Err(RejectReason::EmptyName)
    );
    let flan = office
        .catalog
        .write()
        .add_item(MenuItemCreate::new(
            "Flan",
            MenuCategory::Dessert,
            Decimal::new(350, 2),
        ))
        .unwrap();
    assert_eq!(office.catalog.read().len(), 3);

    // Order screen: assemble 2x Burger + 1x Fries + 1x Flan
    let (burger, fries) = {
        let catalog = office.catalog.read();
        (catalog.items()[0].id, catalog.items()[1].id)
    };
    let mut selection = SelectionBuffer::new();
    selection.add(burger);
    selection.add(burger);
    selection.add(fries);
    selection.add(flan.id);
    selection.remove(flan.id); // changed our mind, whole line goes

    let order = office.place_order(&mut selection).unwrap();
    assert_eq!(order.total_amount, Decimal::new(3097, 2));
    assert_eq!(order.status, OrderStatus::Pending);
    assert!(selection.is_empty());
    assert_eq!(office.orders.read().orders()[0].id, order.id);

    // Deleting the burger afterwards must not drift the snapshot total
    assert!(office.catalog.write().remove_item(burger));
    assert_eq!(
        office.orders.read().get(order.id).unwrap().total_amount,
        Decimal::new(3097, 2)
    );

    // Kitchen moves the order through to completion
    for status in [OrderStatus::Preparing, OrderStatus::Ready, OrderStatus::Completed] {
        assert!(office.orders.write().set_status(order.id, status));
    }
    let summary = office.order_summary();
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.total(), 1);

    // Inventory screen: Tomatoes fall to their threshold and trip the alert
    let tomatoes = office.inventory.read().items()[1].id;
    assert!(office
        .inventory
        .write()
        .restock(tomatoes, 10, "2026-08-30T12:00:00Z"));
    assert_eq!(office.stock_alert(), 1);
}

#[test]
fn test_managers_are_independent() {
    let office = BackOffice::new();
    office.seed_demo_data();

    // Emptying the catalog touches neither inventory nor existing orders
    let ids: Vec<i64> = office.catalog.read().items().iter().map(|i| i.id).collect();
    let mut selection = SelectionBuffer::new();
    selection.add(ids[0]);
    let order = office.place_order(&mut selection).unwrap();

    for id in ids {
        office.catalog.write().remove_item(id);
    }

    assert!(office.catalog.read().is_empty());
    assert_eq!(office.inventory.read().len(), 2);
    assert_eq!(office.orders.read().len(), 1);
    assert!(office.orders.read().get(order.id).is_some());

    // An order created now prices every dangling line as zero
    let mut selection = SelectionBuffer::new();
    selection.add(order.items[0].menu_item_id);
    let orphan = office.place_order(&mut selection).unwrap();
    assert_eq!(orphan.total_amount, Decimal::ZERO);
}
