/// Core evaluation logic.
///
/// Contains the recursive evaluator, operand resolution and the result type
/// shared by the evaluation routines.
pub mod core;

/// Function evaluation.
///
/// Applies the tagged single-argument functions in the context's angle unit,
/// including the legacy `sec` and `hyp` formulas, and the factorial.
pub mod function;

/// Binary operator evaluation.
///
/// Implements the arithmetic operators and the root relation.
pub mod binary;
