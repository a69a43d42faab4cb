use chrono::{DateTime, Utc};
use serde::Serialize;

use stockroom_core::{CustomerId, DomainError, Entity, LedgerId, OrderId};
use stockroom_inventory::{Item, StockLedger};
use stockroom_parties::Customer;

use crate::error::OrderError;

/// A completed, successful inventory deduction.
///
/// Refers to its ledger and customer by identity; owns nothing else. Only
/// produced by [`PlaceOrder::create_order`]. Each order gets its own
/// `OrderId`, so two independently placed orders never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    id: OrderId,
    ledger_id: LedgerId,
    item: Item,
    customer_id: CustomerId,
    quantity: u64,
    placed_at: DateTime<Utc>,
}

impl Order {
    fn new(ledger_id: LedgerId, item: Item, customer_id: CustomerId, quantity: u64) -> Self {
        Self {
            id: OrderId::new(),
            ledger_id,
            item,
            customer_id,
            quantity,
            placed_at: Utc::now(),
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    /// Ledger the order was fulfilled from.
    pub fn ledger_id(&self) -> LedgerId {
        self.ledger_id
    }

    pub fn item(&self) -> Item {
        self.item
    }

    /// Customer who requested the order.
    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Order placement.
pub trait PlaceOrder {
    /// Deduct `quantity` of `item` from `ledger` and return the resulting order.
    ///
    /// Checks availability first; on insufficient stock the ledger is left
    /// untouched and [`OrderError::InsufficientInventory`] is returned. On
    /// success the ledger sees exactly one `remove_quantity` call. Not
    /// idempotent.
    fn create_order<L>(&self, ledger: &mut L, item: Item, quantity: u64) -> Result<Order, OrderError>
    where
        L: StockLedger + ?Sized;
}

impl PlaceOrder for Customer {
    fn create_order<L>(&self, ledger: &mut L, item: Item, quantity: u64) -> Result<Order, OrderError>
    where
        L: StockLedger + ?Sized,
    {
        if quantity == 0 {
            return Err(DomainError::validation("order quantity must be positive").into());
        }

        if !ledger.has_enough_items(item, quantity) {
            let available = ledger.get_quantity(item);
            tracing::warn!(
                customer_id = %self.id_typed(),
                %item,
                requested = quantity,
                available,
                "order rejected: insufficient inventory"
            );
            return Err(OrderError::InsufficientInventory {
                item,
                requested: quantity,
                available,
            });
        }

        ledger.remove_quantity(item, quantity)?;

        let order = Order::new(ledger.ledger_id(), item, self.id_typed(), quantity);
        tracing::info!(
            order_id = %order.id,
            ledger_id = %order.ledger_id,
            customer_id = %order.customer_id,
            %item,
            quantity,
            "order placed"
        );
        Ok(order)
    }
}
