use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token,
                  parser::core::{ParseResult, bounded, expect, parse_expression},
                  syntax::SyntaxNode},
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - number literals
/// - identifiers
/// - function calls
/// - parenthesized expressions
/// - fractions
/// - roots
///
/// It dispatches to specialized parsing functions depending on the leading
/// token.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | IDENT ("(" expression ")")?
///              | "(" expression ")"
///              | fraction
///              | root
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Nesting depth of the enclosing expression; sub-expressions are
///   parsed one level deeper.
///
/// # Returns
/// The parsed primary [`SyntaxNode`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<SyntaxNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let depth = depth + 1;
    let (token, position) = tokens.next().ok_or(ParseError::UnexpectedEndOfInput)?;

    match token {
        Token::Number(text) => Ok(SyntaxNode::Number { text:     text.clone(),
                                                       position: *position, }),
        Token::Identifier(name) => parse_identifier_or_call(tokens, name, *position, depth),
        Token::LParen => parse_grouping(tokens, *position, depth),
        Token::Frac => parse_fraction(tokens, *position, depth),
        Token::Root => parse_root(tokens, *position, depth),
        tok => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                 position: *position, }),
    }
}

/// Parses what follows an identifier: a call when a `(` comes next, a bare
/// identifier otherwise.
///
/// Any identifier may be called here; whether it names a known function is
/// decided when the tree is built.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>,
                                   name: &str,
                                   position: usize,
                                   depth: usize)
                                   -> ParseResult<SyntaxNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::LParen, _)) = tokens.peek() {
        let argument = parse_parenthesized(tokens, depth)?;
        return bounded(SyntaxNode::Call { keyword: name.to_string(),
                                          argument: Box::new(argument),
                                          position },
                       position);
    }
    Ok(SyntaxNode::Identifier { name: name.to_string(),
                                position })
}

/// Parses the rest of a parenthesized expression; the `(` is already
/// consumed.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         position: usize,
                         depth: usize)
                         -> ParseResult<SyntaxNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let inner = parse_expression(tokens, depth)?;
    expect(tokens, &Token::RParen, ")")?;
    bounded(SyntaxNode::Group(Box::new(inner)), position)
}

/// Parses `"(" expression ")"`, returning the inner expression.
fn parse_parenthesized<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<SyntaxNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LParen, "(")?;
    let inner = parse_expression(tokens, depth)?;
    expect(tokens, &Token::RParen, ")")?;
    Ok(inner)
}

/// Parses a fraction; the `frac` keyword is already consumed.
///
/// Both the argument-list form and the curried form are accepted:
/// ```text
///     fraction := "frac" "(" expression "," expression ")"
///               | "frac" "(" expression ")" "(" expression ")"
/// ```
fn parse_fraction<'a, I>(tokens: &mut Peekable<I>,
                         position: usize,
                         depth: usize)
                         -> ParseResult<SyntaxNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LParen, "(")?;
    let numerator = parse_expression(tokens, depth)?;

    let denominator = match tokens.next() {
        Some((Token::Comma, _)) => {
            let denominator = parse_expression(tokens, depth)?;
            expect(tokens, &Token::RParen, ")")?;
            denominator
        },
        Some((Token::RParen, _)) => parse_parenthesized(tokens, depth)?,
        Some((tok, position)) => {
            return Err(ParseError::Expected { expected: ",",
                                              found:    tok.to_string(),
                                              position: *position, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput),
    };

    bounded(SyntaxNode::Fraction { numerator: Box::new(numerator),
                                   denominator: Box::new(denominator),
                                   position },
            position)
}

/// Parses a root; the `root`/`sqrt` keyword is already consumed.
///
/// Grammar: `root := ("root" | "sqrt") ("[" expression "]")? "(" expression ")"`
fn parse_root<'a, I>(tokens: &mut Peekable<I>,
                     position: usize,
                     depth: usize)
                     -> ParseResult<SyntaxNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let index = if let Some((Token::LBracket, _)) = tokens.peek() {
        tokens.next();
        let index = parse_expression(tokens, depth)?;
        expect(tokens, &Token::RBracket, "]")?;
        Some(Box::new(index))
    } else {
        None
    };

    let radicand = parse_parenthesized(tokens, depth)?;

    bounded(SyntaxNode::Root { index,
                               radicand: Box::new(radicand),
                               position },
            position)
}
