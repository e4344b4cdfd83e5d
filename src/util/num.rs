/// Truncates an `f64` toward zero into an `i64`.
///
/// Values beyond the `i64` range saturate at `i64::MIN`/`i64::MAX`, and
/// `NaN` becomes `0`.
///
/// ## Example
/// ```
/// use varcalc::util::num::truncate_to_i64;
///
/// assert_eq!(truncate_to_i64(7.9), 7);
/// assert_eq!(truncate_to_i64(-7.9), -7);
/// assert_eq!(truncate_to_i64(f64::NAN), 0);
/// assert_eq!(truncate_to_i64(1e300), i64::MAX);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub const fn truncate_to_i64(value: f64) -> i64 {
    value as i64
}

/// Integer remainder of two truncated operands, returned as an `f64`.
///
/// Both operands are truncated toward zero first; the sign of the result
/// follows the dividend. A divisor that truncates to zero has no integer
/// remainder and yields `NaN`.
///
/// ## Example
/// ```
/// use varcalc::util::num::truncated_remainder;
///
/// assert_eq!(truncated_remainder(7.0, 3.0), 1.0);
/// assert_eq!(truncated_remainder(7.9, 3.2), 1.0);
/// assert_eq!(truncated_remainder(-7.0, 3.0), -1.0);
/// assert!(truncated_remainder(1.0, 0.5).is_nan());
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn truncated_remainder(dividend: f64, divisor: f64) -> f64 {
    let divisor = truncate_to_i64(divisor);
    if divisor == 0 {
        return f64::NAN;
    }
    truncate_to_i64(dividend).wrapping_rem(divisor) as f64
}
