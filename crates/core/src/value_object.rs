//! Value object trait: equality by value, not identity.
//!
//! Filter criteria are the main value object in this workspace: the current
//! criteria is replaced wholesale on every interaction, never edited in place
//! by a consumer.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value with the changed fields.
///
/// The trait requires:
/// - **Clone**: value objects are passed around by value
/// - **PartialEq**: two value objects with the same attributes are equal
/// - **Debug**: value objects show up in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
