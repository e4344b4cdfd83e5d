use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
///
/// Positions are byte offsets into the expression text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Error at position {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A specific delimiter was required but something else was found.
    #[error("Error at position {position}: Expected '{expected}' but found {found}.")]
    Expected {
        /// The delimiter that was required.
        expected: &'static str,
        /// What was found instead.
        found:    String,
        /// Where the offending token starts.
        position: usize,
    },
    /// Found extra tokens after the expression was complete.
    #[error("Error at position {position}: Extra tokens after expression. Check your input: {token}")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Where it starts.
        position: usize,
    },
    /// The expression nests deeper than [`crate::interpreter::parser::core::MAX_NESTING_DEPTH`]
    /// levels.
    #[error("Error at position {position}: Expression is nested too deeply.")]
    NestingTooDeep {
        /// Where the construct that crossed the limit starts.
        position: usize,
    },
}
