/// Numeric conversion helpers.
///
/// Truncation of `f64` values to integers, and the truncating integer
/// remainder behind the `%` operator.
pub mod num;
