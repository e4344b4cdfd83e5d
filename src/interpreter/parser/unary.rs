use std::iter::Peekable;

use crate::interpreter::{lexer::Token,
                         parser::{binary::parse_exponent,
                                  core::{ParseResult, bounded, check_depth},
                                  primary::parse_primary},
                         syntax::SyntaxNode};

/// Parses a unary expression.
///
/// A prefix `-` negates everything up to the next multiplicative operator,
/// powers included. Minus signs may be stacked, so `--x` is `-(-x)`.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | exponent
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Nesting depth of the enclosing expression.
///
/// # Returns
/// A [`SyntaxNode::Negation`] or the exponent-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<SyntaxNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    check_depth(tokens, depth)?;
    if let Some((Token::Minus, position)) = tokens.peek() {
        tokens.next();
        let operand = parse_unary(tokens, depth + 1)?;
        return bounded(SyntaxNode::Negation { operand:  Box::new(operand),
                                              position: *position, },
                       *position);
    }
    parse_exponent(tokens, depth)
}

/// Parses a primary expression followed by any number of factorials.
///
/// Each `!` wraps what precedes it, so `3!!` is `(3!)!`.
///
/// Grammar:
/// ```text
///     postfix := primary "!"*
/// ```
pub(crate) fn parse_postfix<'a, I>(tokens: &mut Peekable<I>,
                                   depth: usize)
                                   -> ParseResult<SyntaxNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut node = parse_primary(tokens, depth)?;
    while let Some((Token::Bang, position)) = tokens.peek() {
        tokens.next();
        node = bounded(SyntaxNode::Factorial { operand:  Box::new(node),
                                               position: *position, },
                       *position)?;
    }
    Ok(node)
}
