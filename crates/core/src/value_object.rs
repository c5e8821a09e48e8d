//! Value object trait: equality by value, not identity.
//!
//! Rate ranges and carrier configurations are value objects: two ranges with the
//! same bounds are interchangeable, and a configuration is replaced wholesale
//! rather than edited in place.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: `Range { lower: 0.0, upper: 10.0 }`
/// - **Entity**: a carrier record, identified by its `CarrierId`
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
