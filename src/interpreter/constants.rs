use std::f64::consts;

/// Named constants, in lookup order.
///
/// A constant shadows any variable of the same name: evaluation never asks
/// the context for it, and callers that gather values skip it.
pub const CONSTANTS: [(&str, f64); 2] = [("pi", consts::PI), ("e", consts::E)];

/// The value of the constant `name`, if there is one.
///
/// # Example
/// ```
/// use varcalc::interpreter::constants::constant;
///
/// assert_eq!(constant("pi"), Some(std::f64::consts::PI));
/// assert_eq!(constant("x"), None);
/// ```
#[must_use]
pub fn constant(name: &str) -> Option<f64> {
    CONSTANTS.iter().find(|(constant, _)| *constant == name).map(|(_, value)| *value)
}

/// Whether `name` is a constant rather than a variable.
#[must_use]
pub fn is_constant(name: &str) -> bool {
    constant(name).is_some()
}
