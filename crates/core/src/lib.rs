//! `gildedrose-core` — shared domain building blocks.
//!
//! Pure types only: the error model and the value-object marker.

pub mod error;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
