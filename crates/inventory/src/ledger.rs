use std::collections::HashMap;

use stockroom_core::{DomainError, DomainResult, Entity, LedgerId};

use crate::item::Item;

/// Read/deduct capability the order service needs from a ledger.
///
/// `Storage` is the in-memory implementation; tests substitute
/// `MockStockLedger` to observe which calls the order service makes.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait StockLedger {
    /// Identity of the ledger, recorded on every order it fulfils.
    fn ledger_id(&self) -> LedgerId;

    /// True iff the stored quantity for `item` is at least `quantity`.
    ///
    /// Items never stocked count as zero.
    fn has_enough_items(&self, item: Item, quantity: u64) -> bool;

    /// Current stored quantity (zero for items never stocked).
    fn get_quantity(&self, item: Item) -> u64;

    /// Deduct `quantity` from `item`.
    ///
    /// No availability policy lives here: callers check `has_enough_items`
    /// first. A deduction that would take stock below zero is refused and
    /// leaves the ledger unchanged.
    fn remove_quantity(&mut self, item: Item, quantity: u64) -> DomainResult<()>;
}

/// In-memory inventory ledger: item -> quantity.
///
/// Quantities only change through `add_items`, `remove_quantity` and
/// `try_take`. Not synchronized; a `&mut Storage` is exclusive ownership for
/// the duration of an order placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storage {
    id: LedgerId,
    inventory: HashMap<Item, u64>,
}

impl Storage {
    /// Empty ledger with a fresh identifier.
    pub fn new() -> Self {
        Self::with_id(LedgerId::new())
    }

    pub fn with_id(id: LedgerId) -> Self {
        Self {
            id,
            inventory: HashMap::new(),
        }
    }

    /// Increase the stored quantity of `item`, initializing it if absent.
    pub fn add_items(&mut self, item: Item, quantity: u64) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        let current = self.quantity_of(item);
        let updated = current
            .checked_add(quantity)
            .ok_or_else(|| DomainError::invariant("stock overflow"))?;
        self.inventory.insert(item, updated);

        tracing::debug!(ledger_id = %self.id, %item, added = quantity, stock = updated, "items added");
        Ok(())
    }

    /// Check and deduct in one step.
    ///
    /// Returns the remaining quantity, or an invariant error without touching
    /// the ledger when stock is insufficient.
    pub fn try_take(&mut self, item: Item, quantity: u64) -> DomainResult<u64> {
        if !self.has_enough_items(item, quantity) {
            return Err(DomainError::invariant(format!(
                "not enough {item}: requested {quantity}, available {}",
                self.quantity_of(item)
            )));
        }
        self.remove_quantity(item, quantity)?;
        Ok(self.quantity_of(item))
    }

    /// Stocked entries, in no particular order.
    pub fn items(&self) -> impl Iterator<Item = (Item, u64)> + '_ {
        self.inventory.iter().map(|(item, qty)| (*item, *qty))
    }

    fn quantity_of(&self, item: Item) -> u64 {
        self.inventory.get(&item).copied().unwrap_or(0)
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Storage {
    type Id = LedgerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl StockLedger for Storage {
    fn ledger_id(&self) -> LedgerId {
        self.id
    }

    fn has_enough_items(&self, item: Item, quantity: u64) -> bool {
        self.quantity_of(item) >= quantity
    }

    fn get_quantity(&self, item: Item) -> u64 {
        self.quantity_of(item)
    }

    fn remove_quantity(&mut self, item: Item, quantity: u64) -> DomainResult<()> {
        let current = self.quantity_of(item);
        let remaining = current
            .checked_sub(quantity)
            .ok_or_else(|| DomainError::invariant("stock cannot go negative"))?;

        // Removing zero from an unstocked item must not create an entry.
        if self.inventory.contains_key(&item) {
            self.inventory.insert(item, remaining);
        }

        tracing::debug!(ledger_id = %self.id, %item, removed = quantity, stock = remaining, "items removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn stocked(item: Item, quantity: u64) -> Storage {
        let mut storage = Storage::new();
        storage.add_items(item, quantity).unwrap();
        storage
    }

    #[test]
    fn add_then_remove_leaves_difference() {
        let mut storage = stocked(Item::Wood, 500);

        storage.remove_quantity(Item::Wood, 125).unwrap();

        assert_eq!(storage.get_quantity(Item::Wood), 375);
    }

    #[test]
    fn absent_item_reports_zero_and_not_enough() {
        let storage = Storage::new();

        assert_eq!(storage.get_quantity(Item::Wood), 0);
        assert!(!storage.has_enough_items(Item::Wood, 1));
        assert!(storage.has_enough_items(Item::Wood, 0));
        assert_eq!(storage.items().count(), 0);
    }

    #[test]
    fn add_items_accumulates() {
        let mut storage = stocked(Item::Wood, 2);
        storage.add_items(Item::Wood, 3).unwrap();

        assert_eq!(storage.get_quantity(Item::Wood), 5);
        assert_eq!(storage.items().collect::<Vec<_>>(), vec![(Item::Wood, 5)]);
    }

    #[test]
    fn add_items_rejects_zero_quantity() {
        let mut storage = Storage::new();

        let err = storage.add_items(Item::Wood, 0).unwrap_err();

        assert_eq!(err, DomainError::validation("quantity must be positive"));
        assert_eq!(storage.items().count(), 0);
    }

    #[test]
    fn add_items_rejects_overflow() {
        let mut storage = stocked(Item::Wood, u64::MAX);

        let err = storage.add_items(Item::Wood, 1).unwrap_err();

        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert_eq!(storage.get_quantity(Item::Wood), u64::MAX);
    }

    #[test]
    fn remove_below_zero_is_refused_and_ledger_unchanged() {
        let mut storage = stocked(Item::Wood, 1);

        let err = storage.remove_quantity(Item::Wood, 2).unwrap_err();

        assert_eq!(err, DomainError::invariant("stock cannot go negative"));
        assert_eq!(storage.get_quantity(Item::Wood), 1);
    }

    #[test]
    fn removing_zero_from_unstocked_item_creates_no_entry() {
        let mut storage = Storage::new();

        storage.remove_quantity(Item::Wood, 0).unwrap();

        assert_eq!(storage.items().count(), 0);
    }

    #[test]
    fn has_enough_items_is_inclusive() {
        let storage = stocked(Item::Wood, 3);

        assert!(storage.has_enough_items(Item::Wood, 3));
        assert!(!storage.has_enough_items(Item::Wood, 4));
    }

    #[test]
    fn try_take_deducts_when_available() {
        let mut storage = stocked(Item::Wood, 3);

        assert_eq!(storage.try_take(Item::Wood, 1).unwrap(), 2);
        assert_eq!(storage.get_quantity(Item::Wood), 2);
    }

    #[test]
    fn try_take_refuses_when_insufficient() {
        let mut storage = stocked(Item::Wood, 1);

        let err = storage.try_take(Item::Wood, 2).unwrap_err();

        match err {
            DomainError::InvariantViolation(msg) => {
                assert_eq!(msg, "not enough WOOD: requested 2, available 1")
            }
            other => panic!("expected invariant violation, got {other:?}"),
        }
        assert_eq!(storage.get_quantity(Item::Wood), 1);
    }

    #[test]
    fn ledger_id_matches_entity_id() {
        let id = LedgerId::new();
        let storage = Storage::with_id(id);

        assert_eq!(storage.ledger_id(), id);
        assert_eq!(*storage.id(), id);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: sequential additions sum.
        #[test]
        fn sequential_adds_sum(q1 in 1u64..1_000_000, q2 in 1u64..1_000_000) {
            let mut storage = Storage::new();
            storage.add_items(Item::Wood, q1).unwrap();
            storage.add_items(Item::Wood, q2).unwrap();

            prop_assert_eq!(storage.get_quantity(Item::Wood), q1 + q2);
        }

        /// Property: a removal guarded by `has_enough_items` decreases stock by
        /// exactly the removed amount.
        #[test]
        fn guarded_removal_decreases_exactly(
            stock in 1u64..1_000_000,
            requests in prop::collection::vec(0u64..2_000, 1..20)
        ) {
            let mut storage = Storage::new();
            storage.add_items(Item::Wood, stock).unwrap();

            for qty in requests {
                let before = storage.get_quantity(Item::Wood);
                if storage.has_enough_items(Item::Wood, qty) {
                    storage.remove_quantity(Item::Wood, qty).unwrap();
                    prop_assert_eq!(storage.get_quantity(Item::Wood), before - qty);
                } else {
                    prop_assert!(qty > before);
                    prop_assert_eq!(storage.get_quantity(Item::Wood), before);
                }
            }
        }
    }
}
