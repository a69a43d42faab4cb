//! Item-quantity lookup port.

use stockroom_inventory::{Item, StockLedger, Storage};

/// Looks up how much of an item is available.
#[cfg_attr(test, mockall::automock)]
pub trait ItemPort {
    fn get_item_quantity(&self, item: Item) -> u64;
}

/// Reads an item quantity through the injected [`ItemPort`].
#[derive(Debug)]
pub struct GetItemQuantityUseCase<P> {
    port: P,
}

impl<P: ItemPort> GetItemQuantityUseCase<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    pub fn execute(&self, item: Item) -> u64 {
        self.port.get_item_quantity(item)
    }
}

/// [`ItemPort`] adapter over an in-memory ledger.
#[derive(Debug, Clone, Copy)]
pub struct StorageItemPort<'a> {
    storage: &'a Storage,
}

impl<'a> StorageItemPort<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }
}

impl ItemPort for StorageItemPort<'_> {
    fn get_item_quantity(&self, item: Item) -> u64 {
        self.storage.get_quantity(item)
    }
}
