//! Inventory error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the inventory layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Failure raised while applying a transaction batch.
///
/// Every variant is fatal to the batch that produced it: processing stops at
/// the offending transaction and no partial result is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A transaction referenced a product that is not in the inventory.
    #[error("invalid product ID: {0}")]
    InvalidProduct(ProductId),

    /// The transaction type is not one of purchase, sale or return.
    #[error("invalid transaction type: {0}")]
    InvalidTransactionType(String),

    /// A sale asked for more units than are on hand.
    #[error("insufficient stock for product {product_id} (available={available}, requested={requested})")]
    InsufficientStock {
        product_id: ProductId,
        available: u64,
        requested: u64,
    },

    /// Negative quantity, or a movement that would overflow the stock counter.
    #[error("invalid quantity {quantity} for product {product_id}")]
    InvalidQuantity { product_id: ProductId, quantity: i64 },
}

impl InventoryError {
    pub fn invalid_product(product_id: impl Into<ProductId>) -> Self {
        Self::InvalidProduct(product_id.into())
    }

    pub fn invalid_type(kind: impl Into<String>) -> Self {
        Self::InvalidTransactionType(kind.into())
    }

    pub fn insufficient_stock(product_id: impl Into<ProductId>, available: u64, requested: u64) -> Self {
        Self::InsufficientStock {
            product_id: product_id.into(),
            available,
            requested,
        }
    }

    pub fn invalid_quantity(product_id: impl Into<ProductId>, quantity: i64) -> Self {
        Self::InvalidQuantity {
            product_id: product_id.into(),
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_product() {
        let err = InventoryError::insufficient_stock("SKU001", 5, 10);
        assert_eq!(
            err.to_string(),
            "insufficient stock for product SKU001 (available=5, requested=10)"
        );

        let err = InventoryError::invalid_product("SKU999");
        assert_eq!(err.to_string(), "invalid product ID: SKU999");
    }
}
