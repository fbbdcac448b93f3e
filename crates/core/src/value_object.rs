//! Value object trait: equality by value, not identity.
//!
//! Demand statistics and reorder policies are value objects: two instances
//! with the same numbers are interchangeable.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one (see the `with_*` builders on policy types).
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: visible in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
