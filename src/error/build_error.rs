use thiserror::Error;

/// Errors raised while turning a parse tree into a node tree.
///
/// The grammar only produces operator tokens and accepts any identifier as a
/// call keyword, so the unknown-operator case indicates a mismatch between
/// the grammar and the builder, while the unknown-function case is reachable
/// from user input such as `foo(1)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A call names a function the node model does not know.
    #[error("Error at position {position}: Unknown function '{name}'.")]
    UnknownFunction {
        /// The keyword used in the call.
        name:     String,
        /// Where the keyword starts.
        position: usize,
    },
    /// A binary construct carries a token that is not an operator.
    #[error("Error at position {position}: Invalid operator: {token}.")]
    UnknownOperator {
        /// The offending token.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// A number literal's text could not be parsed.
    #[error("Error at position {position}: Invalid number literal '{text}'.")]
    InvalidNumber {
        /// The literal text.
        text:     String,
        /// Where the literal starts.
        position: usize,
    },
    /// A node kind holds an operand case it does not allow.
    #[error("Malformed node: {details}.")]
    MalformedNode {
        /// What is wrong with the node.
        details: String,
    },
}
