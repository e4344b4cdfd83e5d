//! # varcalc
//!
//! varcalc evaluates arithmetic and trigonometric expressions such as
//! `sin(x)/2 + sqrt[3](y)` over named variables. An expression is parsed,
//! built into an immutable node tree, its free variables are listed, and the
//! tree is evaluated against a context holding one value per variable.
//!
//! ```
//! use varcalc::{compile, evaluate, interpreter::context::VariableContext, unique_variables};
//!
//! let node = compile("frac(x, 2) + sqrt(y) * x").unwrap();
//! assert_eq!(unique_variables(&node), ["x", "y"]);
//!
//! let ctx = VariableContext::bind(&["x", "y"], &[5.0, 16.0]).unwrap();
//! assert_eq!(evaluate(&node, &ctx).unwrap(), 22.5);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the expression tree.
///
/// This module declares [`ast::Node`], its operands and the function and
/// operator tags. Nodes are built by the tree builder and read by the
/// evaluator and the variable extractor.
///
/// # Responsibilities
/// - Defines one node kind per construct and a closed operand type.
/// - Enforces the operand and tag requirements of each kind at construction.
/// - Renders trees back to source form.
pub mod ast;
/// Provides the error types for parsing, building and evaluation.
///
/// Each phase has its own error enum; [`error::Error`] wraps all of them for
/// callers that run the whole pipeline.
pub mod error;
/// Orchestrates the path from expression text to a number.
///
/// This module ties together lexing, parsing, tree building, variable
/// extraction and evaluation.
pub mod interpreter;
/// Interactive and one-shot sessions.
///
/// Reads expressions, prompts for variable values, and prints results. Used
/// by the `varcalc` binary.
pub mod cli;
/// General utilities for safe numeric conversion.
pub mod util;

pub use ast::Node;
pub use error::Error;
pub use interpreter::{
    context::VariableContext,
    evaluator::core::evaluate,
    variables::{collect_variables, unique_variables},
};

use crate::interpreter::{builder::TreeBuilder, constants::is_constant, parser::parse};

/// Parses `source` and builds its node tree.
///
/// # Errors
/// Returns [`Error::Parse`] for malformed or overly nested text and
/// [`Error::Build`] when the text names an unknown function.
///
/// # Examples
/// ```
/// use varcalc::{Error, compile};
///
/// let node = compile("sin(x) / 2").unwrap();
/// assert_eq!(node.to_string(), "sin(x) / 2");
///
/// assert!(matches!(compile("sin(x"), Err(Error::Parse(_))));
/// assert!(matches!(compile("sinh(x)"), Err(Error::Build(_))));
/// ```
pub fn compile(source: &str) -> Result<Node, Error> {
    let syntax = parse(source)?;
    Ok(TreeBuilder::new().build(&syntax)?)
}

/// Compiles `source` and evaluates it, asking `supply` for the value of each
/// distinct variable in order of first occurrence. Constants such as `pi`
/// are not asked for.
///
/// # Errors
/// Returns the first parse, build or evaluation error, or the error returned
/// by `supply`.
///
/// # Examples
/// ```
/// use varcalc::evaluate_with;
///
/// let result = evaluate_with("x * x + y", |name| Ok(if name == "x" { 3.0 } else { 1.0 }));
/// assert_eq!(result.unwrap(), 10.0);
///
/// assert_eq!(evaluate_with("7 % 3", |_| unreachable!()).unwrap(), 1.0);
/// ```
pub fn evaluate_with<F>(source: &str, mut supply: F) -> Result<f64, Error>
    where F: FnMut(&str) -> Result<f64, Error>
{
    let node = compile(source)?;
    let mut context = VariableContext::new();
    for name in unique_variables(&node).into_iter().filter(|name| !is_constant(name)) {
        let value = supply(&name)?;
        context.insert(name, value);
    }
    Ok(evaluate(&node, &context)?)
}
