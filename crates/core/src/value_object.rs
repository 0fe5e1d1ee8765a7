//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// holding the same attributes are the same value. Constructors are expected
/// to validate, so an existing value object is always well-formed.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Email(String);
///
/// impl ValueObject for Email {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
