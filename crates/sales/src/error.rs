use thiserror::Error;

use stockroom_core::DomainError;
use stockroom_inventory::Item;

/// Failure to place an order.
///
/// Terminal for the call that produced it; nothing is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// The ledger holds less than the requested quantity. The ledger was not
    /// modified.
    #[error("insufficient inventory for {item}: requested {requested}, available {available}")]
    InsufficientInventory {
        item: Item,
        requested: u64,
        available: u64,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}
