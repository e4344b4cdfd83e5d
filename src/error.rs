/// Parsing errors.
///
/// Errors raised while lexing and parsing expression text, before any tree
/// is built: unexpected tokens, missing delimiters and trailing input.
pub mod parse_error;
/// Tree construction errors.
///
/// Raised when a parse tree names a function or operator the node model has
/// no tag for, or holds a number literal that cannot be read.
pub mod build_error;
/// Runtime errors.
///
/// Errors raised while binding variable values and evaluating a tree.
pub mod runtime_error;

pub use build_error::BuildError;
pub use parse_error::ParseError;
pub use runtime_error::EvaluationError;

/// Any failure on the way from expression text to a number.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The text is not a well-formed expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The parse tree could not be turned into a node tree.
    #[error(transparent)]
    Build(#[from] BuildError),
    /// The tree could not be evaluated against the given values.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}
