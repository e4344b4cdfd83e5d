use std::iter::Peekable;

use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::{lexer::{Token, tokenize},
                  parser::binary::parse_additive,
                  syntax::SyntaxNode},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest expression the parser accepts, counted in parse tree levels.
///
/// Parsing, building, evaluation and rendering all recurse once per level,
/// so deeper input is rejected before any of them can exhaust the stack.
/// A long flat chain such as `1 + 1 + ... + 1` counts one level per operator.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parses expression text into a parse tree.
///
/// The whole input must form exactly one expression.
///
/// # Errors
/// Returns a [`ParseError`] if the text cannot be tokenized, if the
/// expression is malformed or empty, or if tokens remain after it.
///
/// # Example
/// ```
/// use varcalc::interpreter::{parser::parse, syntax::SyntaxNode};
///
/// let tree = parse("x").unwrap();
/// assert_eq!(tree,
///            SyntaxNode::Identifier { name:     "x".to_string(),
///                                     position: 0, });
///
/// assert!(parse("1 +").is_err());
/// assert!(parse("1 2").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<SyntaxNode> {
    let tokens = tokenize(source)?;
    trace!(count = tokens.len(), "tokenized expression");

    let mut iter = tokens.iter().peekable();
    let tree = parse_expression(&mut iter, 0)?;

    if let Some((token, position)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                          position: *position, });
    }

    Ok(tree)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `depth`: How many nested constructs enclose this expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<SyntaxNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    check_depth(tokens, depth)?;
    parse_additive(tokens, depth)
}

/// Fails once `depth` exceeds [`MAX_NESTING_DEPTH`], reporting the position
/// of the next token.
pub(in crate::interpreter::parser) fn check_depth<'a, I>(tokens: &mut Peekable<I>,
                                                         depth: usize)
                                                         -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if depth > MAX_NESTING_DEPTH {
        let position = tokens.peek().map_or(0, |(_, position)| *position);
        return Err(ParseError::NestingTooDeep { position });
    }
    Ok(())
}

/// Passes `node` through unless its height exceeds [`MAX_NESTING_DEPTH`].
///
/// # Errors
/// `NestingTooDeep` at `position`, the start of the construct `node` was
/// built for.
pub(in crate::interpreter::parser) fn bounded(node: SyntaxNode,
                                              position: usize)
                                              -> ParseResult<SyntaxNode> {
    if node.height() > MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { position });
    }
    Ok(node)
}

/// Consumes the next token, requiring it to be `expected`.
///
/// # Returns
/// The position of the consumed token.
///
/// # Errors
/// - `Expected` if a different token is found.
/// - `UnexpectedEndOfInput` if the stream is exhausted.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    symbol: &'static str)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((tok, position)) if tok == expected => Ok(*position),
        Some((tok, position)) => Err(ParseError::Expected { expected: symbol,
                                                            found:    tok.to_string(),
                                                            position: *position, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}
