use tracing::trace;

use crate::{
    ast::{Node, NodeKind, Operand, Operator},
    error::EvaluationError,
    interpreter::{
        context::VariableContext,
        constants::constant,
        evaluator::{binary::{apply_operator, nth_root},
                    function::{apply_function, factorial}},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluationError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// Evaluates `node` against the variable values in `context`.
///
/// The evaluator dispatches on the node kind, resolving operands
/// recursively. It reads nothing but its arguments and changes nothing, so
/// the same tree can be evaluated repeatedly, or from several threads at
/// once, each with its own context.
///
/// Division follows IEEE semantics: dividing by zero yields an infinity or
/// `NaN` rather than an error.
///
/// # Errors
/// Returns [`EvaluationError::UnboundVariable`] for the first variable the
/// context has no value for.
///
/// # Example
/// ```
/// use varcalc::{
///     ast::{Node, Operator},
///     interpreter::{context::VariableContext, evaluator::core::evaluate},
/// };
///
/// let node = Node::binary_op(Node::identifier("x"), Operator::Multiply, Node::number(2.0));
///
/// let mut ctx = VariableContext::new();
/// ctx.insert("x", 21.0);
///
/// assert_eq!(evaluate(&node, &ctx).unwrap(), 42.0);
/// assert!(evaluate(&node, &VariableContext::new()).is_err());
/// ```
pub fn evaluate(node: &Node, context: &VariableContext) -> EvalResult<f64> {
    let value = match node.kind() {
        NodeKind::Number(operand) | NodeKind::Identifier(operand) => resolve(operand, context)?,
        NodeKind::FunctionCall { function, argument } => {
            apply_function(*function, resolve(argument, context)?, context.angle_mode())
        },
        NodeKind::Factorial { argument } => factorial(resolve(argument, context)?),
        NodeKind::NthRoot { radicand, index } => {
            nth_root(resolve(radicand, context)?, resolve(index, context)?)
        },
        NodeKind::Fraction { numerator,
                             denominator, } => {
            let x = resolve(numerator, context)?;
            let y = resolve(denominator, context)?;
            apply_operator(Operator::Divide, x, y)
        },
        NodeKind::BinaryOp { left,
                             operator,
                             right, } => {
            let x = resolve(left, context)?;
            let y = resolve(right, context)?;
            apply_operator(*operator, x, y)
        },
    };
    trace!(kind = node.kind().name(), value, "evaluated");
    Ok(value)
}

/// Produces the value of a single operand.
///
/// Literals yield themselves and subexpressions are evaluated recursively.
/// A variable reference names either a constant such as `pi`, which wins, or
/// a variable looked up in `context`.
///
/// # Errors
/// Returns [`EvaluationError::UnboundVariable`] when a referenced variable
/// has no value.
///
/// # Example
/// ```
/// use varcalc::{
///     ast::Operand,
///     error::EvaluationError,
///     interpreter::{context::VariableContext, evaluator::core::resolve},
/// };
///
/// let ctx = VariableContext::new();
/// assert_eq!(resolve(&Operand::Literal(1.5), &ctx), Ok(1.5));
/// assert_eq!(resolve(&Operand::VariableRef("pi".to_string()), &ctx),
///            Ok(std::f64::consts::PI));
/// assert_eq!(resolve(&Operand::VariableRef("y".to_string()), &ctx),
///            Err(EvaluationError::UnboundVariable("y".to_string())));
/// ```
pub fn resolve(operand: &Operand, context: &VariableContext) -> EvalResult<f64> {
    match operand {
        Operand::Literal(value) => Ok(*value),
        Operand::VariableRef(name) => {
            constant(name).or_else(|| context.get(name))
                          .ok_or_else(|| EvaluationError::UnboundVariable(name.clone()))
        },
        Operand::Subexpression(node) => evaluate(node, context),
    }
}
