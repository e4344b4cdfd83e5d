use thiserror::Error;

/// Represents all errors that can occur while binding values and evaluating.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// The tree references a variable the context has no value for.
    #[error("Unknown variable '{0}'.")]
    UnboundVariable(String),
    /// A list of values does not line up with the list of variable names.
    #[error("Expected {expected} values but {found} were supplied.")]
    ValueCountMismatch {
        /// Number of names.
        expected: usize,
        /// Number of values.
        found:    usize,
    },
}
