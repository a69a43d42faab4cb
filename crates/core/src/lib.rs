//! `stockroom-core` — shared domain building blocks.
//!
//! Pure domain primitives only: errors, identifiers and the entity/value
//! object markers used by the inventory, parties and sales crates.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CustomerId, LedgerId, OrderId};
pub use value_object::ValueObject;
