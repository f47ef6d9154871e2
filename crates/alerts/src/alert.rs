use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockpulse_core::{Clock, ProductId, SystemClock};
use stockpulse_inventory::{Inventory, Product};

use crate::thresholds::AlertThresholds;
use crate::velocity::average_daily_sales;

/// Alert urgency. Declaration order is sort order: critical first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    Warning,
    Info,
}

impl Priority {
    /// Classify `stock` against `reorder_point` (both bounds inclusive):
    /// at or below a quarter of the reorder point is critical, at or below the
    /// reorder point is a warning, anything above is informational.
    pub fn classify(stock: u64, reorder_point: f64) -> Self {
        let stock = stock as f64;
        if stock <= reorder_point * 0.25 {
            Priority::Critical
        } else if stock <= reorder_point {
            Priority::Warning
        } else {
            Priority::Info
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            Priority::Critical => 0,
            Priority::Warning => 1,
            Priority::Info => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::Warning => "warning",
            Priority::Info => "info",
        }
    }
}

impl core::fmt::Display for Priority {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reorder alert for one product.
///
/// `days_until_stockout` is rounded to one decimal and `avg_daily_sales` to
/// two. A product with no recent sales never stocks out: its
/// `days_until_stockout` is `f64::INFINITY`, serialized as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAlert {
    pub product_id: ProductId,
    pub product_name: String,
    pub stock: u64,
    pub reorder_point: f64,
    #[serde(with = "infinite_as_null")]
    pub days_until_stockout: f64,
    pub avg_daily_sales: f64,
    pub priority: Priority,
}

/// Alerts for every product in `inventory`, most urgent first, as of today.
pub fn stock_alerts(inventory: &Inventory, thresholds: &AlertThresholds) -> Vec<StockAlert> {
    stock_alerts_with(inventory, thresholds, &SystemClock)
}

/// Alerts for every product in `inventory`, with "today" taken from `clock`.
///
/// Ordered by priority, then by `days_until_stockout` ascending. The sort is
/// stable, so ties keep inventory order.
pub fn stock_alerts_with<C: Clock + ?Sized>(
    inventory: &Inventory,
    thresholds: &AlertThresholds,
    clock: &C,
) -> Vec<StockAlert> {
    let today = clock.today();

    let mut alerts: Vec<StockAlert> = inventory
        .iter()
        .map(|(id, product)| build_alert(id, product, thresholds, today))
        .collect();

    alerts.sort_by(|a, b| {
        a.priority
            .rank()
            .cmp(&b.priority.rank())
            .then_with(|| a.days_until_stockout.total_cmp(&b.days_until_stockout))
    });

    tracing::debug!(
        products = inventory.len(),
        critical = alerts.iter().filter(|a| a.priority == Priority::Critical).count(),
        warning = alerts.iter().filter(|a| a.priority == Priority::Warning).count(),
        "stock alerts generated"
    );

    alerts
}

fn build_alert(id: &ProductId, product: &Product, thresholds: &AlertThresholds, today: NaiveDate) -> StockAlert {
    let stock = product.quantity;
    let reorder_point = thresholds.reorder_point_for(product);

    let avg_daily_sales = average_daily_sales(product, thresholds.velocity_window_days, today);
    let days_until_stockout = if avg_daily_sales > 0.0 {
        stock as f64 / avg_daily_sales
    } else {
        f64::INFINITY
    };

    StockAlert {
        product_id: id.clone(),
        product_name: product.name.clone(),
        stock,
        reorder_point,
        days_until_stockout: round_to(days_until_stockout, 1),
        avg_daily_sales: round_to(avg_daily_sales, 2),
        priority: Priority::classify(stock, reorder_point),
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

mod infinite_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}
