use std::iter::Peekable;

use crate::interpreter::{lexer::Token,
                         parser::{core::{ParseResult, bounded},
                                  unary::{parse_postfix, parse_unary}},
                         syntax::SyntaxNode};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `depth`: Nesting depth of the enclosing expression.
///
/// # Returns
/// A `SyntaxNode::Binary` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<SyntaxNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens, depth)?;
    while let Some((token, position)) = tokens.peek()
          && is_additive_operator(token)
    {
        tokens.next();
        let right = parse_multiplicative(tokens, depth)?;
        left = bounded(SyntaxNode::Binary { left:     Box::new(left),
                                            operator: token.clone(),
                                            right:    Box::new(right),
                                            position: *position, },
                       *position)?;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `%`.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "%") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `depth`: Nesting depth of the enclosing expression.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   depth: usize)
                                   -> ParseResult<SyntaxNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens, depth)?;
    while let Some((token, position)) = tokens.peek()
          && is_multiplicative_operator(token)
    {
        tokens.next();
        let right = parse_unary(tokens, depth)?;
        left = bounded(SyntaxNode::Binary { left:     Box::new(left),
                                            operator: token.clone(),
                                            right:    Box::new(right),
                                            position: *position, },
                       *position)?;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`.
/// The exponent may be negated (`2 ^ -1`), while a leading minus applies to
/// the whole power (`-2 ^ 2` is `-(2 ^ 2)`).
///
/// The rule is: `exponent := postfix ("^" unary)?`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Nesting depth of the enclosing expression.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<SyntaxNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_postfix(tokens, depth)?;
    if let Some((token @ Token::Caret, position)) = tokens.peek() {
        tokens.next();
        let exponent = parse_unary(tokens, depth + 1)?;
        return bounded(SyntaxNode::Binary { left:     Box::new(base),
                                            operator: token.clone(),
                                            right:    Box::new(exponent),
                                            position: *position, },
                       *position);
    }
    Ok(base)
}

/// Whether `token` binds at the additive level.
#[must_use]
pub const fn is_additive_operator(token: &Token) -> bool {
    matches!(token, Token::Plus | Token::Minus)
}

/// Whether `token` binds at the multiplicative level.
///
/// # Example
/// ```
/// use varcalc::interpreter::{lexer::Token, parser::binary::is_multiplicative_operator};
///
/// assert!(is_multiplicative_operator(&Token::Percent));
/// assert!(!is_multiplicative_operator(&Token::Plus));
/// ```
#[must_use]
pub const fn is_multiplicative_operator(token: &Token) -> bool {
    matches!(token, Token::Star | Token::Slash | Token::Percent)
}
