/// Floating-point helpers.
///
/// Floored division and remainder, a power function that refuses to divide by
/// zero, the combined relative/absolute closeness test, and number formatting
/// for user-facing messages.
pub mod num;
