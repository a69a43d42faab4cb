//! Parties domain module: the actors that place orders.

pub mod customer;
pub mod name;

pub use customer::Customer;
pub use name::NameNormalizer;
