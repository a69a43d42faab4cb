//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. An
/// `Item` is a value object; a `Storage` ledger is not (it is an entity whose
/// quantities change over time).
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Sku(String);
///
/// impl ValueObject for Sku {}
///
/// assert_eq!(Sku("W-1".into()), Sku("W-1".into()));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
