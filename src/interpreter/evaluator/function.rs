use tracing::warn;

use crate::{ast::Function, interpreter::context::AngleMode, util::num::truncate_to_i64};

/// Applies `function` to `x`.
///
/// `sin`, `cos`, `tan`, `csc` and `cot` read `x` as an angle in `mode`, and
/// the inverse functions answer in `mode`; `log` is the natural logarithm.
/// The legacy `sec` and `hyp` formulas ignore `mode`. Results outside a
/// function's domain follow the IEEE conventions of the underlying `f64`
/// methods (e.g. `log(-1)` is `NaN`).
///
/// # Example
/// ```
/// use varcalc::{
///     ast::Function,
///     interpreter::{context::AngleMode, evaluator::function::apply_function},
/// };
///
/// assert_eq!(apply_function(Function::Sin, 0.0, AngleMode::Radians), 0.0);
/// assert_eq!(apply_function(Function::Cos, 0.0, AngleMode::Radians), 1.0);
/// assert_eq!(apply_function(Function::Log, 1.0, AngleMode::Degrees), 0.0);
/// assert!((apply_function(Function::ArcTan, 1.0, AngleMode::Degrees) - 45.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn apply_function(function: Function, x: f64, mode: AngleMode) -> f64 {
    let angle = || mode.to_radians(x);
    match function {
        Function::Sin => angle().sin(),
        Function::Cos => angle().cos(),
        Function::Tan => angle().tan(),
        Function::Log => x.ln(),
        Function::Sec => sec(x),
        Function::Csc => 1.0 / angle().sin(),
        Function::Cot => angle().cos() / angle().sin(),
        Function::Hyp => hyp(x),
        Function::ArcSin => mode.unit_from_radians(x.asin()),
        Function::ArcCos => mode.unit_from_radians(x.acos()),
        Function::ArcTan => mode.unit_from_radians(x.atan()),
    }
}

/// The factorial of `x` truncated toward zero.
///
/// Arguments below 1 (and `NaN`) give 1, the empty product. Results beyond
/// `f64::MAX` are infinite.
///
/// # Example
/// ```
/// use varcalc::interpreter::evaluator::function::factorial;
///
/// assert_eq!(factorial(5.0), 120.0);
/// assert_eq!(factorial(4.9), 24.0);
/// assert_eq!(factorial(-3.0), 1.0);
/// assert_eq!(factorial(200.0), f64::INFINITY);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn factorial(x: f64) -> f64 {
    let mut product = 1.0_f64;
    let mut factor = truncate_to_i64(x);
    while factor > 1 && product.is_finite() {
        product *= factor as f64;
        factor -= 1;
    }
    product
}

/// The `sec` function as it has always been computed here:
/// `(1 + x) * cos(sin(x)^3) - 1.4`.
///
/// This is not the secant `1 / cos(x)`. The formula is kept exactly as is so
/// that existing results stay reproducible.
///
/// # Example
/// ```
/// use varcalc::interpreter::evaluator::function::sec;
///
/// assert!((sec(0.0) - (-0.4)).abs() < 1e-15);
/// ```
#[must_use]
pub fn sec(x: f64) -> f64 {
    (1.0 + x) * x.sin().powf(3.0).cos() - 1.4
}

/// The `hyp` function: `hypot(x, 1)`.
///
/// This placeholder is known to be wrong and is kept only for
/// reproducibility; every call logs a warning.
#[must_use]
pub fn hyp(x: f64) -> f64 {
    warn!("hyp implementation is invalid");
    x.hypot(1.0)
}
