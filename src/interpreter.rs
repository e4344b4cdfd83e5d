/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer reads the raw text and produces a stream of tokens, each paired
/// with its byte offset: number literals, identifiers, the `frac` and `root`
/// keywords, operators, the factorial `!` and delimiters.
pub mod lexer;
/// The parser module builds the parse tree from tokens.
///
/// A recursive-descent parser over the token stream. It resolves precedence
/// and associativity and records each surface construct as a
/// [`syntax::SyntaxNode`], reporting malformed input as a
/// [`crate::error::ParseError`].
pub mod parser;
/// The parse tree and its visitation contract.
///
/// Declares [`syntax::SyntaxNode`], one case per surface construct, and the
/// [`syntax::SyntaxVisitor`] trait through which consumers receive the
/// constructs bottom-up.
pub mod syntax;
/// The tree builder turns a parse tree into the node model.
///
/// # Responsibilities
/// - Maps function keywords and operator tokens to their tags.
/// - Reads number literals.
/// - Wraps sub-expressions as operands and defaults missing root indices.
pub mod builder;
/// Variable values for an evaluation.
///
/// Declares the name-to-value mapping the evaluator reads from, and the
/// angle unit of the trigonometric functions.
pub mod context;
/// Named constants such as `pi` and `e`.
pub mod constants;
/// The evaluator module reduces a node tree to a number.
///
/// # Responsibilities
/// - Resolves literal, variable and subexpression operands.
/// - Applies functions, operators, roots and fractions.
/// - Reports unbound variables.
pub mod evaluator;
/// Free-variable extraction.
///
/// Walks a node tree and lists the variables it references.
pub mod variables;
