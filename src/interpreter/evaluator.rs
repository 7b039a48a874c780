/// Core evaluation logic and limits.
///
/// Contains the tree walk, the [`core::Limits`] configuration, literal
/// conversion and the range check applied to every result.
pub mod core;

/// Binary operator evaluation logic.
///
/// Applies the seven arithmetic operators with the power-operator guards and
/// division-by-zero detection.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;
