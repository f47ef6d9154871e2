use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockpulse_core::{InventoryError, ProductId};

/// Kind of stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Purchase,
    Sale,
    Return,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Purchase => "purchase",
            TransactionKind::Sale => "sale",
            TransactionKind::Return => "return",
        }
    }
}

impl core::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive: `"PURCHASE"`, `"Purchase"` and `"purchase"` all parse.
impl FromStr for TransactionKind {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase();
        match normalized.as_str() {
            "purchase" => Ok(TransactionKind::Purchase),
            "sale" => Ok(TransactionKind::Sale),
            "return" => Ok(TransactionKind::Return),
            _ => Err(InventoryError::invalid_type(normalized)),
        }
    }
}

/// Inbound transaction, as submitted by the caller.
///
/// `kind` stays a raw string so that an unknown type is reported when the
/// batch reaches it, not when the batch is deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub product_id: ProductId,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub quantity: i64,
    /// Caller-side timestamp; informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Transaction {
    pub fn new(product_id: impl Into<ProductId>, kind: impl Into<String>, quantity: i64) -> Self {
        Self {
            product_id: product_id.into(),
            kind: kind.into(),
            quantity,
            timestamp: None,
        }
    }

    pub fn purchase(product_id: impl Into<ProductId>, quantity: i64) -> Self {
        Self::new(product_id, TransactionKind::Purchase.as_str(), quantity)
    }

    pub fn sale(product_id: impl Into<ProductId>, quantity: i64) -> Self {
        Self::new(product_id, TransactionKind::Sale.as_str(), quantity)
    }

    pub fn customer_return(product_id: impl Into<ProductId>, quantity: i64) -> Self {
        Self::new(product_id, TransactionKind::Return.as_str(), quantity)
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// Record of one applied transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionLogEntry {
    pub timestamp: DateTime<Utc>,
    pub product_id: ProductId,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub quantity: u64,
    pub resulting_stock: u64,
}
