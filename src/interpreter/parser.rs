/// Core parsing entry points.
///
/// Contains the top-level `parse` function, the expression entry point of the
/// grammar, the nesting limit and the shared `expect` helper.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence levels of the infix operators: additive,
/// multiplicative and exponentiation.
pub mod binary;

/// Unary and postfix parsing.
///
/// Handles prefix negation and postfix factorials.
pub mod unary;

/// Primary expression parsing.
///
/// Handles literals, identifiers, function calls, parentheses, fractions and
/// roots.
pub mod primary;

pub use self::core::parse;
