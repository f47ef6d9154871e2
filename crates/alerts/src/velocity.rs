use chrono::{Days, NaiveDate};

use stockpulse_inventory::Product;

/// Trailing window used when none is configured.
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// Average units sold per day over the `window_days` days up to `today`.
///
/// Sales dated on or after `today - window_days` count. The total is divided
/// by the window length (at least 1), not by the number of days that actually
/// saw sales, so sparse history gives a diluted average: one sale of 30 units
/// ten days ago over a 30-day window is 1.0/day.
pub fn average_daily_sales(product: &Product, window_days: u32, today: NaiveDate) -> f64 {
    if product.sales_history.is_empty() {
        return 0.0;
    }

    let cutoff = today
        .checked_sub_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MIN);

    let total_sold: u64 = product
        .sales_history
        .iter()
        .filter(|sale| sale.date >= cutoff)
        .map(|sale| sale.quantity)
        .sum();

    total_sold as f64 / f64::from(window_days.max(1))
}
