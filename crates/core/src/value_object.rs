//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — two instances
/// with the same attributes are the same value. [`crate::Money`] is the
/// canonical example: `Money::from_minor(100)` equals any other
/// `Money::from_minor(100)` regardless of where either came from.
///
/// To "modify" a value object, construct a new one. The required bounds keep
/// value objects cheap to copy, comparable, and debuggable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
