//! Walks through order placement against an in-memory ledger, logging each step.

use anyhow::Context;

use stockroom_inventory::{Item, StockLedger, Storage};
use stockroom_parties::{Customer, NameNormalizer};
use stockroom_ports::{
    EmailPort, EmailPortError, GetItemQuantityUseCase, SendInviteEmailUseCase, StorageItemPort,
};
use stockroom_sales::{OrderError, PlaceOrder};

/// Email adapter that only logs.
struct LoggingEmail;

impl EmailPort for LoggingEmail {
    fn send_invite_email(&self, address: &str) -> Result<(), EmailPortError> {
        if !address.contains('@') {
            return Err(EmailPortError::Rejected {
                address: address.to_string(),
            });
        }
        tracing::info!(address, "invite email sent");
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    stockroom_observability::init().context("invalid logging configuration")?;

    let mut storage = Storage::new();
    storage
        .add_items(Item::Wood, 3)
        .context("failed to stock ledger")?;

    let customer = Customer::new();
    let name = NameNormalizer::new().normalize(":;14@ :D asf %212");
    tracing::info!(customer_id = %customer.id_typed(), name = %name, "customer registered");

    let order = customer.create_order(&mut storage, Item::Wood, 1)?;
    let snapshot = serde_json::to_string(&order)?;
    tracing::info!(order = %snapshot, "order snapshot");

    match customer.create_order(&mut storage, Item::Wood, 5) {
        Err(OrderError::InsufficientInventory { available, .. }) => {
            tracing::info!(available, "oversized order refused as expected");
        }
        other => anyhow::bail!("expected insufficient inventory, got {other:?}"),
    }

    let lookup = GetItemQuantityUseCase::new(StorageItemPort::new(&storage));
    tracing::info!(
        ledger_id = %storage.ledger_id(),
        wood = lookup.execute(Item::Wood),
        "remaining stock"
    );

    SendInviteEmailUseCase::new(LoggingEmail)
        .execute("any@mail.ru")
        .context("invite failed")?;

    Ok(())
}
