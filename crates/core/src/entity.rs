//! Entity trait: identity that survives state changes.

/// Entity marker + minimal interface.
///
/// A ledger whose stock changes is still the same ledger; a customer placing
/// many orders is still the same customer.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
