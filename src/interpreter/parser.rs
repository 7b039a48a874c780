/// Entry points and shared helpers.
///
/// Handles input guards (blank input, length, nesting), drives the descent
/// and rejects trailing input.
pub mod core;

/// Additive and multiplicative levels.
///
/// Left-associative `+ -` and `* / % //`.
pub mod binary;

/// Prefix operators, exponentiation and atoms.
///
/// Handles unary `+ -`, right-associative `**`, literals and parenthesised
/// groups, and classifies names and other disallowed operands.
pub mod unary;
