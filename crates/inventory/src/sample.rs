//! Built-in demonstration data: five products and a mixed batch.

use crate::product::{Inventory, Product};
use crate::transaction::Transaction;

pub fn sample_inventory() -> Inventory {
    Inventory::new()
        .with_product("SKU001", stocked("Product A", 150, 50.0, 7, "Zone-A", 30))
        .with_product("SKU002", stocked("Product B", 25, 40.0, 5, "Zone-B", 20))
        .with_product("SKU003", stocked("Product C", 200, 100.0, 10, "Zone-C", 50))
        .with_product("SKU004", stocked("Product D", 50, 25.0, 3, "Zone-A", 15))
        .with_product("SKU005", stocked("Product E", 75, 60.0, 14, "Zone-B", 30))
}

pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new("SKU001", "sale", 10),
        Transaction::new("SKU001", "PURCHASE", 100),
        Transaction::new("SKU002", "sale", 15),
        Transaction::new("SKU002", "RETURN", 5),
        Transaction::new("SKU003", "sale", 50),
        Transaction::new("SKU004", "sale", 12),
        Transaction::new("SKU005", "PURCHASE", 200),
    ]
}

fn stocked(name: &str, quantity: u64, reorder_point: f64, lead_time_days: u32, location: &str, safety_stock: u64) -> Product {
    Product::new(name, quantity)
        .with_reorder_point(reorder_point)
        .with_lead_time_days(lead_time_days)
        .with_location(location)
        .with_safety_stock(safety_stock)
}
