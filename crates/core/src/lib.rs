//! `invoicer-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no presentation
//! concerns): identifiers, the error model, numeric coercion of form input and
//! the snapshot reducer trait.

pub mod entity;
pub mod error;
pub mod id;
pub mod numeric;
pub mod reducer;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::LineItemId;
pub use numeric::{coerce_number, finite_or_zero, non_negative};
pub use reducer::Reducer;
pub use value_object::ValueObject;
