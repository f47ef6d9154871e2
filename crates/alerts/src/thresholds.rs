//! Alert threshold configuration.

use serde::{Deserialize, Serialize};

use stockpulse_inventory::product::non_negative;
use stockpulse_inventory::Product;

use crate::velocity::DEFAULT_WINDOW_DAYS;

/// Reorder point used when neither the product nor the thresholds set one.
pub const FALLBACK_REORDER_POINT: f64 = 10.0;

/// Configuration consumed by the alert generator.
///
/// Every field has a default, so `{}` is a valid configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertThresholds {
    /// Reorder point for products that do not carry their own.
    #[serde(deserialize_with = "non_negative::deserialize")]
    pub default_reorder: Option<f64>,
    /// Trailing window, in days, for the sales velocity estimate.
    pub velocity_window_days: u32,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            default_reorder: None,
            velocity_window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl AlertThresholds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_reorder(mut self, default_reorder: f64) -> Self {
        self.default_reorder = Some(default_reorder);
        self
    }

    pub fn with_velocity_window_days(mut self, days: u32) -> Self {
        self.velocity_window_days = days;
        self
    }

    /// Product's own reorder point, else the configured default, else
    /// [`FALLBACK_REORDER_POINT`].
    pub fn reorder_point_for(&self, product: &Product) -> f64 {
        product
            .reorder_point
            .or(self.default_reorder)
            .unwrap_or(FALLBACK_REORDER_POINT)
    }
}
