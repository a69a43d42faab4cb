//! Inventory domain module.
//!
//! An in-memory ledger of item quantities. Pure domain logic: no IO, no
//! storage backend, no internal synchronization.

pub mod item;
pub mod ledger;

pub use item::Item;
pub use ledger::{StockLedger, Storage};

#[cfg(any(test, feature = "mock"))]
pub use ledger::MockStockLedger;
