//! Reorder alerting.
//!
//! Read-only over inventory snapshots: estimates sales velocity per product,
//! classifies stock against reorder points, and orders the result so the most
//! urgent products come first.

pub mod alert;
pub mod thresholds;
pub mod velocity;

#[cfg(test)]
mod integration_tests;

pub use alert::{stock_alerts, stock_alerts_with, Priority, StockAlert};
pub use thresholds::{AlertThresholds, FALLBACK_REORDER_POINT};
pub use velocity::{average_daily_sales, DEFAULT_WINDOW_DAYS};
