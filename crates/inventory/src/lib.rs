//! Inventory domain module.
//!
//! This crate holds the inventory snapshot model and the transaction
//! processor that applies purchase/sale/return batches to it. Everything here
//! is deterministic domain logic (no IO, no storage); time is injected via
//! [`stockpulse_core::Clock`].

pub mod processor;
pub mod product;
pub mod sample;
pub mod transaction;

pub use processor::{process_transactions, process_transactions_with};
pub use product::{Inventory, Product, SaleRecord};
pub use transaction::{Transaction, TransactionKind, TransactionLogEntry};
