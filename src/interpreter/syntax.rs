use crate::interpreter::lexer::Token;

/// A parse tree node: one case per surface construct of the grammar.
///
/// The parse tree is a faithful record of what was written. It keeps number
/// literals as text, function keywords as names and operators as tokens;
/// giving them meaning is left to a [`SyntaxVisitor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    /// A number literal, e.g. `3` or `2.5`.
    Number {
        /// The literal as written.
        text:     String,
        /// Byte offset of the literal.
        position: usize,
    },
    /// A bare identifier, e.g. `x`.
    Identifier {
        /// The identifier as written.
        name:     String,
        /// Byte offset of the identifier.
        position: usize,
    },
    /// `frac(numerator, denominator)`.
    Fraction {
        /// Numerator expression.
        numerator:   Box<Self>,
        /// Denominator expression.
        denominator: Box<Self>,
        /// Byte offset of the `frac` keyword.
        position:    usize,
    },
    /// `keyword(argument)`.
    Call {
        /// The function keyword as written.
        keyword:  String,
        /// The argument expression.
        argument: Box<Self>,
        /// Byte offset of the keyword.
        position: usize,
    },
    /// `root[index](radicand)` or `sqrt(radicand)`.
    Root {
        /// The root degree, if written.
        index:    Option<Box<Self>>,
        /// The radicand expression.
        radicand: Box<Self>,
        /// Byte offset of the `root` keyword.
        position: usize,
    },
    /// `left operator right`.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator token.
        operator: Token,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
    /// `-operand`.
    Negation {
        /// The negated expression.
        operand:  Box<Self>,
        /// Byte offset of the `-`.
        position: usize,
    },
    /// `operand!`.
    Factorial {
        /// The expression the factorial is taken of.
        operand:  Box<Self>,
        /// Byte offset of the `!`.
        position: usize,
    },
    /// `(inner)`.
    Group(Box<Self>),
}

/// Receives the constructs of a parse tree, children before parents.
///
/// Each method is handed the results already produced for the construct's
/// sub-expressions, so an implementation only decides how one construct maps
/// onto its output.
pub trait SyntaxVisitor {
    /// What each construct is turned into.
    type Output;
    /// Why a construct could not be turned into an output.
    type Error;

    /// A number literal.
    fn visit_number(&mut self, text: &str, position: usize) -> Result<Self::Output, Self::Error>;

    /// A bare identifier.
    fn visit_identifier(&mut self,
                        name: &str,
                        position: usize)
                        -> Result<Self::Output, Self::Error>;

    /// `frac(numerator, denominator)`.
    fn visit_fraction(&mut self,
                      numerator: Self::Output,
                      denominator: Self::Output,
                      position: usize)
                      -> Result<Self::Output, Self::Error>;

    /// `keyword(argument)`.
    fn visit_call(&mut self,
                  keyword: &str,
                  argument: Self::Output,
                  position: usize)
                  -> Result<Self::Output, Self::Error>;

    /// `root[index](radicand)`, with `index` absent for `sqrt(radicand)` or
    /// `root(radicand)`.
    fn visit_root(&mut self,
                  index: Option<Self::Output>,
                  radicand: Self::Output,
                  position: usize)
                  -> Result<Self::Output, Self::Error>;

    /// `left operator right`.
    fn visit_binary(&mut self,
                    left: Self::Output,
                    operator: &Token,
                    right: Self::Output,
                    position: usize)
                    -> Result<Self::Output, Self::Error>;

    /// `-operand`.
    fn visit_negation(&mut self,
                      operand: Self::Output,
                      position: usize)
                      -> Result<Self::Output, Self::Error>;

    /// `operand!`.
    fn visit_factorial(&mut self,
                       operand: Self::Output,
                       position: usize)
                       -> Result<Self::Output, Self::Error>;
}

impl SyntaxNode {
    /// Walks the tree bottom-up, feeding every construct to `visitor`.
    ///
    /// Sub-expressions are visited left to right before the construct that
    /// contains them. Groups are transparent: `(x)` yields whatever `x`
    /// yields. The walk stops at the first error.
    ///
    /// # Errors
    /// Returns the first error produced by `visitor`.
    pub fn accept<V: SyntaxVisitor>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        match self {
            Self::Number { text, position } => visitor.visit_number(text, *position),
            Self::Identifier { name, position } => visitor.visit_identifier(name, *position),
            Self::Fraction { numerator,
                             denominator,
                             position, } => {
                let numerator = numerator.accept(visitor)?;
                let denominator = denominator.accept(visitor)?;
                visitor.visit_fraction(numerator, denominator, *position)
            },
            Self::Call { keyword,
                         argument,
                         position, } => {
                let argument = argument.accept(visitor)?;
                visitor.visit_call(keyword, argument, *position)
            },
            Self::Root { index,
                         radicand,
                         position, } => {
                let index = index.as_ref().map(|i| i.accept(visitor)).transpose()?;
                let radicand = radicand.accept(visitor)?;
                visitor.visit_root(index, radicand, *position)
            },
            Self::Binary { left,
                           operator,
                           right,
                           position, } => {
                let left = left.accept(visitor)?;
                let right = right.accept(visitor)?;
                visitor.visit_binary(left, operator, right, *position)
            },
            Self::Negation { operand, position } => {
                let operand = operand.accept(visitor)?;
                visitor.visit_negation(operand, *position)
            },
            Self::Factorial { operand, position } => {
                let operand = operand.accept(visitor)?;
                visitor.visit_factorial(operand, *position)
            },
            Self::Group(inner) => inner.accept(visitor),
        }
    }

    /// Number of nodes on the longest path from this node down to a leaf.
    ///
    /// A literal or identifier has height 1.
    ///
    /// # Example
    /// ```
    /// use varcalc::interpreter::parser::parse;
    ///
    /// assert_eq!(parse("x").unwrap().height(), 1);
    /// assert_eq!(parse("1 + 2 * x").unwrap().height(), 3);
    /// assert_eq!(parse("(x)").unwrap().height(), 2);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        let below = match self {
            Self::Number { .. } | Self::Identifier { .. } => 0,
            Self::Fraction { numerator,
                             denominator,
                             .. } => numerator.height().max(denominator.height()),
            Self::Root { index, radicand, .. } => {
                radicand.height().max(index.as_ref().map_or(0, |i| i.height()))
            },
            Self::Binary { left, right, .. } => left.height().max(right.height()),
            Self::Call { argument: inner, .. }
            | Self::Negation { operand: inner, .. }
            | Self::Factorial { operand: inner, .. }
            | Self::Group(inner) => inner.height(),
        };
        below + 1
    }
}
