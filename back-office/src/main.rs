use anyhow::Result;
use back_office::{BackOffice, SelectionBuffer};
use shared::models::OrderStatus;
use tracing_subscriber::EnvFilter;

/// Walks the dashboard flows once against seeded data: assemble a selection,
/// place an order, move it through the kitchen, and read the summary tiles.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Cafeteria Planner back office starting...");

    let office = BackOffice::new();
    office.seed_demo_data();

    // Order screen: two burgers and a fries
    let (burger, fries) = {
        let catalog = office.catalog.read();
        (catalog.items()[0].id, catalog.items()[1].id)
    };
    let mut selection = SelectionBuffer::new();
    selection.add(burger);
    selection.add(burger);
    selection.add(fries);

    let order = office.place_order(&mut selection)?;
    tracing::info!(order = %serde_json::to_string(&order)?, "order placed");

    // Kitchen walks the order forward
    for status in [OrderStatus::Preparing, OrderStatus::Ready, OrderStatus::Completed] {
        office.orders.write().set_status(order.id, status);
        tracing::info!(id = order.id, status = status.label(), "status updated");
    }

    // Inventory screen: Tomatoes drop to their threshold
    let tomatoes = office.inventory.read().items()[1].id;
    office
        .inventory
        .write()
        .restock(tomatoes, 10, shared::util::now_iso());

    let summary = office.order_summary();
    tracing::info!(
        completed = summary.completed,
        total = summary.total(),
        low_stock = office.stock_alert(),
        "dashboard summary"
    );
    for item in office.inventory.read().low_stock_items() {
        tracing::warn!(
            name = %item.name,
            quantity = item.quantity,
            min = item.min_threshold,
            "low stock"
        );
    }

    Ok(())
}
