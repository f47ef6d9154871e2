//! `stockpulse-core` — shared building blocks for the inventory workspace.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod clock;
pub mod error;
pub mod id;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{InventoryError, InventoryResult};
pub use id::ProductId;
