use crate::{ast::Operator, util::num::truncated_remainder};

/// Applies a binary operator to two values.
///
/// `+`, `-`, `*`, `/` and `^` follow IEEE double arithmetic, so division by
/// zero produces an infinity or `NaN`. `%` truncates both operands to
/// integers and takes the integer remainder, whose sign follows the
/// dividend; a divisor that truncates to zero yields `NaN`.
///
/// # Example
/// ```
/// use varcalc::{ast::Operator, interpreter::evaluator::binary::apply_operator};
///
/// assert_eq!(apply_operator(Operator::Add, 2.0, 3.0), 5.0);
/// assert_eq!(apply_operator(Operator::Modulus, 7.0, 3.0), 1.0);
/// assert_eq!(apply_operator(Operator::Divide, 1.0, 0.0), f64::INFINITY);
/// ```
#[must_use]
pub fn apply_operator(operator: Operator, x: f64, y: f64) -> f64 {
    match operator {
        Operator::Add => x + y,
        Operator::Subtract => x - y,
        Operator::Multiply => x * y,
        Operator::Divide => x / y,
        Operator::Modulus => truncated_remainder(x, y),
        Operator::Power => x.powf(y),
    }
}

/// The `index`-th root of `radicand`, computed as `radicand ^ (1 / index)`.
///
/// # Example
/// ```
/// use varcalc::interpreter::evaluator::binary::nth_root;
///
/// assert_eq!(nth_root(9.0, 2.0), 3.0);
/// assert_eq!(nth_root(16.0, 4.0), 2.0);
/// ```
#[must_use]
pub fn nth_root(radicand: f64, index: f64) -> f64 {
    radicand.powf(1.0 / index)
}
