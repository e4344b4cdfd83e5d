use std::fmt;

use crate::error::BuildError;

/// Index used by an [`NodeKind::NthRoot`] node when the source gives none.
pub const DEFAULT_ROOT_INDEX: f64 = 2.0;

/// One argument slot of a [`Node`].
///
/// An operand holds exactly one of a literal number, a reference to a free
/// variable, or a nested subtree. Evaluation resolves each case with a single
/// match.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A constant value.
    Literal(f64),
    /// A free variable, looked up in the evaluation context.
    VariableRef(String),
    /// A nested expression evaluated recursively.
    Subexpression(Box<Node>),
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Literal(value)
    }
}

impl From<Node> for Operand {
    fn from(node: Node) -> Self {
        Self::Subexpression(Box::new(node))
    }
}

/// A single-argument function known to the evaluator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Function {
    /// Sine (`sin`).
    Sin,
    /// Cosine (`cos`).
    Cos,
    /// Tangent (`tan`).
    Tan,
    /// Natural logarithm (`log`).
    Log,
    /// Legacy secant approximation (`sec`), see
    /// [`crate::interpreter::evaluator::function::sec`].
    Sec,
    /// Cosecant (`csc`).
    Csc,
    /// Cotangent (`cot`).
    Cot,
    /// Legacy placeholder (`hyp`), see
    /// [`crate::interpreter::evaluator::function::hyp`].
    Hyp,
    /// Inverse sine (`arcsin`).
    ArcSin,
    /// Inverse cosine (`arccos`).
    ArcCos,
    /// Inverse tangent (`arctan`).
    ArcTan,
}

impl Function {
    /// All functions, in keyword order.
    pub const ALL: [Self; 11] = [Self::Sin,
                                 Self::Cos,
                                 Self::Tan,
                                 Self::Log,
                                 Self::Sec,
                                 Self::Csc,
                                 Self::Cot,
                                 Self::Hyp,
                                 Self::ArcSin,
                                 Self::ArcCos,
                                 Self::ArcTan];

    /// Maps a source keyword to its function tag.
    ///
    /// ## Example
    /// ```
    /// use varcalc::ast::Function;
    ///
    /// assert_eq!(Function::from_keyword("arctan"), Some(Function::ArcTan));
    /// assert_eq!(Function::from_keyword("sinh"), None);
    /// ```
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.keyword() == keyword)
    }

    /// The keyword this function is written with.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Sec => "sec",
            Self::Csc => "csc",
            Self::Cot => "cot",
            Self::Hyp => "hyp",
            Self::ArcSin => "arcsin",
            Self::ArcCos => "arccos",
            Self::ArcTan => "arctan",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Integer remainder of the truncated operands (`%`)
    Modulus,
    /// Exponentiation (`^`)
    Power,
}

impl Operator {
    /// Binding strength used when printing a tree back to source form.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide | Self::Modulus => 2,
            Self::Power => 3,
        }
    }

    /// Whether `a op (b op c)` groups like `a op b op c` written without
    /// parentheses.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Power)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulus => "%",
            Self::Power => "^",
        };
        f.write_str(symbol)
    }
}

/// The shape of a [`Node`].
///
/// Values of this type may be assembled freely; [`Node::from_kind`] checks
/// the operand cases before they become part of a tree.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A numeric literal. The operand must be [`Operand::Literal`].
    Number(Operand),
    /// A free variable. The operand must be [`Operand::VariableRef`].
    Identifier(Operand),
    /// A function applied to one argument, e.g. `sin(x)`.
    FunctionCall {
        /// The function to apply.
        function: Function,
        /// Its argument.
        argument: Operand,
    },
    /// The factorial of the argument truncated to an integer, written `x!`.
    Factorial {
        /// The value the factorial is taken of.
        argument: Operand,
    },
    /// `radicand ^ (1 / index)`, written `root[index](radicand)`.
    NthRoot {
        /// The value the root is taken of.
        radicand: Operand,
        /// The root degree.
        index:    Operand,
    },
    /// `frac(numerator, denominator)`; evaluates as a division.
    Fraction {
        /// Dividend.
        numerator:   Operand,
        /// Divisor.
        denominator: Operand,
    },
    /// An infix operation.
    BinaryOp {
        /// Left operand.
        left:     Operand,
        /// The operator.
        operator: Operator,
        /// Right operand.
        right:    Operand,
    },
}

impl NodeKind {
    /// Short name of the kind, for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Identifier(_) => "identifier",
            Self::FunctionCall { .. } => "function call",
            Self::Factorial { .. } => "factorial",
            Self::NthRoot { .. } => "root",
            Self::Fraction { .. } => "fraction",
            Self::BinaryOp { .. } => "binary operation",
        }
    }
}

/// A node of the expression tree.
///
/// Nodes are only created through the constructors below, which guarantee
/// that number nodes hold literals, identifier nodes hold variable
/// references, and every function call or binary operation carries its tag.
/// Children are owned, so a tree is a strict tree; it is never mutated after
/// construction and can be shared across threads (e.g. behind an `Arc`).
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
}

impl Node {
    /// A numeric literal node.
    ///
    /// ## Example
    /// ```
    /// use varcalc::ast::{Node, NodeKind, Operand};
    ///
    /// let node = Node::number(1.5);
    /// assert_eq!(node.kind(), &NodeKind::Number(Operand::Literal(1.5)));
    /// ```
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self { kind: NodeKind::Number(Operand::Literal(value)), }
    }

    /// A free-variable node.
    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        Self { kind: NodeKind::Identifier(Operand::VariableRef(name.into())), }
    }

    /// A function applied to `argument`.
    #[must_use]
    pub fn function_call(function: Function, argument: impl Into<Operand>) -> Self {
        Self { kind: NodeKind::FunctionCall { function,
                                              argument: argument.into() }, }
    }

    /// The factorial of `argument`.
    #[must_use]
    pub fn factorial(argument: impl Into<Operand>) -> Self {
        Self { kind: NodeKind::Factorial { argument: argument.into() }, }
    }

    /// The `index`-th root of `radicand`, or the square root when no index is
    /// given.
    ///
    /// ## Example
    /// ```
    /// use varcalc::ast::{Node, NodeKind, Operand};
    ///
    /// let node = Node::nth_root(9.0, None);
    /// let NodeKind::NthRoot { index, .. } = node.kind() else { unreachable!() };
    /// assert_eq!(index, &Operand::Literal(2.0));
    /// ```
    #[must_use]
    pub fn nth_root(radicand: impl Into<Operand>, index: Option<Operand>) -> Self {
        let index = index.unwrap_or(Operand::Literal(DEFAULT_ROOT_INDEX));
        Self { kind: NodeKind::NthRoot { radicand: radicand.into(),
                                         index }, }
    }

    /// `numerator / denominator`, written as a fraction.
    #[must_use]
    pub fn fraction(numerator: impl Into<Operand>, denominator: impl Into<Operand>) -> Self {
        Self { kind: NodeKind::Fraction { numerator:   numerator.into(),
                                          denominator: denominator.into(), }, }
    }

    /// An infix operation.
    #[must_use]
    pub fn binary_op(left: impl Into<Operand>,
                     operator: Operator,
                     right: impl Into<Operand>)
                     -> Self {
        Self { kind: NodeKind::BinaryOp { left: left.into(),
                                          operator,
                                          right: right.into() }, }
    }

    /// Builds a node from a raw [`NodeKind`], rejecting operand cases the
    /// kind does not allow.
    ///
    /// # Errors
    /// Returns [`BuildError::MalformedNode`] when a number node does not hold
    /// a literal or an identifier node does not hold a variable reference.
    ///
    /// ## Example
    /// ```
    /// use varcalc::ast::{Node, NodeKind, Operand};
    ///
    /// let bad = NodeKind::Number(Operand::VariableRef("x".to_string()));
    /// assert!(Node::from_kind(bad).is_err());
    /// ```
    pub fn from_kind(kind: NodeKind) -> Result<Self, BuildError> {
        match &kind {
            NodeKind::Number(operand) if !matches!(operand, Operand::Literal(_)) => {
                Err(BuildError::MalformedNode { details: format!("number node holds {operand:?}"), })
            },
            NodeKind::Identifier(operand) if !matches!(operand, Operand::VariableRef(_)) => {
                Err(BuildError::MalformedNode { details: format!("identifier node holds {operand:?}"), })
            },
            _ => Ok(Self { kind }),
        }
    }

    /// The shape of this node.
    #[must_use]
    pub const fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Consumes the node, returning its shape.
    #[must_use]
    pub fn into_kind(self) -> NodeKind {
        self.kind
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{value}"),
            Self::VariableRef(name) => f.write_str(name),
            Self::Subexpression(node) => write!(f, "{node}"),
        }
    }
}

/// Whether `operand` is a literal that renders with a leading minus sign.
fn is_negative_literal(operand: &Operand) -> bool {
    match operand {
        Operand::Literal(value) => value.is_sign_negative() && !value.is_nan(),
        Operand::Subexpression(node) => match node.kind() {
            NodeKind::Number(inner) => is_negative_literal(inner),
            _ => false,
        },
        Operand::VariableRef(_) => false,
    }
}

/// Writes `operand` as a child of an `operator` node, parenthesizing it when
/// it would otherwise regroup.
fn write_operand(f: &mut fmt::Formatter<'_>,
                 operand: &Operand,
                 operator: Operator,
                 is_right: bool)
                 -> fmt::Result {
    if operator == Operator::Power && !is_right && is_negative_literal(operand) {
        return write!(f, "({operand})");
    }
    if let Operand::Subexpression(node) = operand
       && let NodeKind::BinaryOp { operator: inner, .. } = node.kind()
    {
        let needs_parens = inner.precedence() < operator.precedence()
                           || (inner.precedence() == operator.precedence()
                               && is_right != operator.is_right_associative());
        if needs_parens {
            return write!(f, "({node})");
        }
    }
    write!(f, "{operand}")
}

impl fmt::Display for Node {
    #[allow(clippy::float_cmp)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Number(operand) | NodeKind::Identifier(operand) => write!(f, "{operand}"),
            NodeKind::FunctionCall { function, argument } => write!(f, "{function}({argument})"),
            NodeKind::Factorial { argument } => {
                let grouped = is_negative_literal(argument)
                              || matches!(argument,
                                          Operand::Subexpression(node)
                                              if matches!(node.kind(), NodeKind::BinaryOp { .. }));
                if grouped {
                    write!(f, "({argument})!")
                } else {
                    write!(f, "{argument}!")
                }
            },
            NodeKind::NthRoot { radicand, index } => match index {
                Operand::Literal(i) if *i == DEFAULT_ROOT_INDEX => write!(f, "sqrt({radicand})"),
                _ => write!(f, "root[{index}]({radicand})"),
            },
            NodeKind::Fraction { numerator,
                                 denominator, } => write!(f, "frac({numerator}, {denominator})"),
            NodeKind::BinaryOp { left,
                                 operator,
                                 right, } => {
                write_operand(f, left, *operator, false)?;
                write!(f, " {operator} ")?;
                write_operand(f, right, *operator, true)
            },
        }
    }
}
