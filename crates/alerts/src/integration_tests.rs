//! End-to-end: apply the sample batch, then derive alerts from the result.

use chrono::{TimeZone, Utc};

use stockpulse_core::FixedClock;
use stockpulse_inventory::sample::{sample_inventory, sample_transactions};
use stockpulse_inventory::{process_transactions_with, TransactionKind};

use crate::{stock_alerts_with, AlertThresholds, Priority};

#[test]
fn sample_batch_feeds_alerts() {
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 11, 1, 15, 0, 0).unwrap());
    let inventory = sample_inventory();

    let (updated, log) = process_transactions_with(&inventory, &sample_transactions(), &clock).unwrap();

    assert_eq!(log.len(), 7);
    assert_eq!(log[1].kind, TransactionKind::Purchase);
    assert_eq!(log[3].kind, TransactionKind::Return);
    assert_eq!(log[3].resulting_stock, 15);

    let alerts = stock_alerts_with(&updated, &AlertThresholds::new().with_default_reorder(10.0), &clock);

    let order: Vec<(&str, Priority)> = alerts.iter().map(|a| (a.product_id.as_str(), a.priority)).collect();
    assert_eq!(
        order,
        [
            ("SKU002", Priority::Warning),
            ("SKU003", Priority::Info),
            ("SKU004", Priority::Info),
            ("SKU001", Priority::Info),
            ("SKU005", Priority::Info),
        ]
    );

    let sku002 = &alerts[0];
    assert_eq!(sku002.stock, 15);
    assert_eq!(sku002.avg_daily_sales, 0.5);
    assert_eq!(sku002.days_until_stockout, 30.0);
    assert!(alerts[4].days_until_stockout.is_infinite());
}

#[test]
fn failed_batch_leaves_snapshot_usable_for_alerts() {
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 11, 1, 15, 0, 0).unwrap());
    let inventory = sample_inventory();
    let mut batch = sample_transactions();
    batch.insert(2, stockpulse_inventory::Transaction::sale("SKU002", 1_000));

    assert!(process_transactions_with(&inventory, &batch, &clock).is_err());

    let alerts = stock_alerts_with(&inventory, &AlertThresholds::new(), &clock);
    let sku002 = alerts.iter().find(|a| a.product_id.as_str() == "SKU002").unwrap();
    assert_eq!(sku002.stock, 25);
    assert_eq!(sku002.priority, Priority::Warning);
}
