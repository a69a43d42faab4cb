//! Sales orders domain module.
//!
//! Turns an availability check plus a ledger deduction into an immutable
//! [`Order`]. Pure domain logic: no IO, no storage.

pub mod error;
pub mod order;

pub use error::OrderError;
pub use order::{Order, PlaceOrder};
