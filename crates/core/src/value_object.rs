//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object has no identity of its own: two instances holding the same
/// attributes are interchangeable. Change one by building a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct QualityRange {
///     floor: i32,
///     ceiling: i32,
/// }
///
/// impl ValueObject for QualityRange {}
///
/// assert_eq!(
///     QualityRange { floor: 0, ceiling: 50 },
///     QualityRange { floor: 0, ceiling: 50 },
/// );
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
