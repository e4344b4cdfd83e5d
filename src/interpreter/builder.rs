use tracing::debug;

use crate::{
    ast::{Function, Node, NodeKind, Operand, Operator},
    error::BuildError,
    interpreter::{lexer::Token,
                  syntax::{SyntaxNode, SyntaxVisitor}},
};

/// Turns a parse tree into a [`Node`] tree.
///
/// The builder is stateless; it exists to implement [`SyntaxVisitor`], which
/// hands it each construct after the construct's children are built.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeBuilder;

impl TreeBuilder {
    /// Creates a builder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Builds the node tree for `syntax`.
    ///
    /// # Errors
    /// Returns the first [`BuildError`] met during the bottom-up walk.
    ///
    /// # Example
    /// ```
    /// use varcalc::{
    ///     ast::{Node, Operator},
    ///     interpreter::{builder::TreeBuilder, parser::parse},
    /// };
    ///
    /// let syntax = parse("x + 1").unwrap();
    /// let node = TreeBuilder::new().build(&syntax).unwrap();
    ///
    /// assert_eq!(node,
    ///            Node::binary_op(Node::identifier("x"), Operator::Add, Node::number(1.0)));
    /// ```
    pub fn build(&mut self, syntax: &SyntaxNode) -> Result<Node, BuildError> {
        let node = syntax.accept(self)?;
        debug!(%node, "built expression tree");
        Ok(node)
    }
}

/// Reads a number literal.
///
/// Integer literals such as `42` and real literals such as `2.5` are both
/// stored as the nearest `f64`. Integers beyond 2^53 round like any other
/// decimal text, and integers beyond `f64::MAX` become infinite.
///
/// # Errors
/// `InvalidNumber` if the text is not a number.
///
/// # Example
/// ```
/// use varcalc::interpreter::builder::parse_number;
///
/// assert_eq!(parse_number("2.5", 0).unwrap(), 2.5);
/// assert_eq!(parse_number("42", 0).unwrap(), 42.0);
/// assert_eq!(parse_number("10000000000000000", 0).unwrap(), 1e16);
/// assert!(parse_number("4x", 0).is_err());
/// ```
pub fn parse_number(text: &str, position: usize) -> Result<f64, BuildError> {
    text.parse::<f64>().map_err(|_| BuildError::InvalidNumber { text: text.to_string(),
                                                                position })
}

/// Maps an operator token to its operator tag.
///
/// Returns `None` for tokens that are not binary operators.
///
/// # Example
/// ```
/// use varcalc::{
///     ast::Operator,
///     interpreter::{builder::token_to_operator, lexer::Token},
/// };
///
/// assert_eq!(token_to_operator(&Token::Percent), Some(Operator::Modulus));
/// assert_eq!(token_to_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_operator(token: &Token) -> Option<Operator> {
    match token {
        Token::Plus => Some(Operator::Add),
        Token::Minus => Some(Operator::Subtract),
        Token::Star => Some(Operator::Multiply),
        Token::Slash => Some(Operator::Divide),
        Token::Percent => Some(Operator::Modulus),
        Token::Caret => Some(Operator::Power),
        _ => None,
    }
}

impl SyntaxVisitor for TreeBuilder {
    type Error = BuildError;
    type Output = Node;

    fn visit_number(&mut self, text: &str, position: usize) -> Result<Node, BuildError> {
        parse_number(text, position).map(Node::number)
    }

    fn visit_identifier(&mut self, name: &str, _position: usize) -> Result<Node, BuildError> {
        Ok(Node::identifier(name))
    }

    fn visit_fraction(&mut self,
                      numerator: Node,
                      denominator: Node,
                      _position: usize)
                      -> Result<Node, BuildError> {
        Ok(Node::fraction(numerator, denominator))
    }

    fn visit_call(&mut self,
                  keyword: &str,
                  argument: Node,
                  position: usize)
                  -> Result<Node, BuildError> {
        let function =
            Function::from_keyword(keyword).ok_or_else(|| BuildError::UnknownFunction { name: keyword.to_string(),
                                                                                        position })?;
        Ok(Node::function_call(function, argument))
    }

    fn visit_root(&mut self,
                  index: Option<Node>,
                  radicand: Node,
                  _position: usize)
                  -> Result<Node, BuildError> {
        Ok(Node::nth_root(radicand, index.map(Operand::from)))
    }

    fn visit_binary(&mut self,
                    left: Node,
                    operator: &Token,
                    right: Node,
                    position: usize)
                    -> Result<Node, BuildError> {
        let operator =
            token_to_operator(operator).ok_or_else(|| BuildError::UnknownOperator { token: operator.to_string(),
                                                                                     position })?;
        Ok(Node::binary_op(left, operator, right))
    }

    fn visit_negation(&mut self, operand: Node, _position: usize) -> Result<Node, BuildError> {
        if let NodeKind::Number(Operand::Literal(value)) = operand.kind() {
            return Ok(Node::number(-value));
        }
        Ok(Node::binary_op(Node::number(-1.0), Operator::Multiply, operand))
    }

    fn visit_factorial(&mut self, operand: Node, _position: usize) -> Result<Node, BuildError> {
        Ok(Node::factorial(operand))
    }
}
