//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two parties with the same name,
/// address, email and phone are the same party. To "modify" one, build a new
/// value.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
