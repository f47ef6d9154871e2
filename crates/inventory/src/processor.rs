//! Transaction processor: applies a batch to a private copy of an inventory.

use stockpulse_core::{Clock, InventoryError, InventoryResult, SystemClock};

use crate::product::{Inventory, SaleRecord};
use crate::transaction::{Transaction, TransactionKind, TransactionLogEntry};

/// Apply `transactions` in order against a copy of `inventory`, stamping with
/// the system clock.
///
/// See [`process_transactions_with`].
pub fn process_transactions(
    inventory: &Inventory,
    transactions: &[Transaction],
) -> InventoryResult<(Inventory, Vec<TransactionLogEntry>)> {
    process_transactions_with(inventory, transactions, &SystemClock)
}

/// Apply `transactions` in order against a copy of `inventory`.
///
/// On success returns the updated snapshot and one log entry per transaction.
/// The first failing transaction aborts the batch: later transactions are not
/// considered, and the working copy (with whatever was applied before the
/// failure) is dropped. `inventory` itself is never touched, so an error
/// simply means "batch not applied".
pub fn process_transactions_with<C: Clock + ?Sized>(
    inventory: &Inventory,
    transactions: &[Transaction],
    clock: &C,
) -> InventoryResult<(Inventory, Vec<TransactionLogEntry>)> {
    let mut working = inventory.clone();
    let mut log = Vec::with_capacity(transactions.len());

    for (index, tx) in transactions.iter().enumerate() {
        match apply(&mut working, tx, clock) {
            Ok(entry) => {
                tracing::debug!(
                    index,
                    product_id = %entry.product_id,
                    kind = %entry.kind,
                    quantity = entry.quantity,
                    resulting_stock = entry.resulting_stock,
                    "transaction applied"
                );
                log.push(entry);
            }
            Err(err) => {
                tracing::warn!(index, product_id = %tx.product_id, error = %err, "transaction batch aborted");
                return Err(err);
            }
        }
    }

    tracing::info!(applied = log.len(), "transaction batch applied");
    Ok((working, log))
}

fn apply<C: Clock + ?Sized>(
    working: &mut Inventory,
    tx: &Transaction,
    clock: &C,
) -> InventoryResult<TransactionLogEntry> {
    let product = working
        .get_mut(tx.product_id.as_str())
        .ok_or_else(|| InventoryError::invalid_product(tx.product_id.clone()))?;

    let kind: TransactionKind = tx.kind.parse()?;

    let amount = u64::try_from(tx.quantity)
        .map_err(|_| InventoryError::invalid_quantity(tx.product_id.clone(), tx.quantity))?;

    let current = product.quantity;
    let now = clock.now();

    let resulting_stock = match kind {
        TransactionKind::Purchase | TransactionKind::Return => current
            .checked_add(amount)
            .ok_or_else(|| InventoryError::invalid_quantity(tx.product_id.clone(), tx.quantity))?,
        TransactionKind::Sale => {
            if current < amount {
                return Err(InventoryError::insufficient_stock(tx.product_id.clone(), current, amount));
            }
            // Sale records are strictly positive; an empty sale moves nothing.
            if amount > 0 {
                product.sales_history.push(SaleRecord::new(now.date_naive(), amount));
            }
            current - amount
        }
    };

    product.quantity = resulting_stock;
    product.last_updated = Some(now);

    Ok(TransactionLogEntry {
        timestamp: now,
        product_id: tx.product_id.clone(),
        kind,
        quantity: amount,
        resulting_stock,
    })
}
