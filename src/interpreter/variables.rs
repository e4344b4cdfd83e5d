use std::collections::HashSet;

use crate::ast::{Node, NodeKind, Operand};

/// Lists the free variables referenced by `node`, one entry per occurrence.
///
/// The tree is walked in pre-order, first operand before second: left before
/// right, numerator before denominator, radicand before root index. Repeated
/// names are kept; use [`unique_variables`] to drop them. Names of constants
/// such as `pi` are listed like any other identifier.
///
/// # Example
/// ```
/// use varcalc::{
///     ast::{Node, Operator},
///     interpreter::variables::collect_variables,
/// };
///
/// // x + y * x
/// let product = Node::binary_op(Node::identifier("y"), Operator::Multiply, Node::identifier("x"));
/// let node = Node::binary_op(Node::identifier("x"), Operator::Add, product);
///
/// assert_eq!(collect_variables(&node), ["x", "y", "x"]);
/// ```
#[must_use]
pub fn collect_variables(node: &Node) -> Vec<String> {
    fn walk_operand(operand: &Operand, out: &mut Vec<String>) {
        match operand {
            Operand::Literal(_) => {},
            Operand::VariableRef(name) => out.push(name.clone()),
            Operand::Subexpression(node) => walk(node, out),
        }
    }
    fn walk(node: &Node, out: &mut Vec<String>) {
        match node.kind() {
            NodeKind::Number(operand)
            | NodeKind::Identifier(operand)
            | NodeKind::FunctionCall { argument: operand, .. }
            | NodeKind::Factorial { argument: operand } => walk_operand(operand, out),
            NodeKind::NthRoot { radicand: a,
                                index: b, }
            | NodeKind::Fraction { numerator: a,
                                   denominator: b, }
            | NodeKind::BinaryOp { left: a, right: b, .. } => {
                walk_operand(a, out);
                walk_operand(b, out);
            },
        }
    }
    let mut out = Vec::new();
    walk(node, &mut out);
    out
}

/// Lists the free variables referenced by `node`, each name once, in order
/// of first occurrence.
///
/// # Example
/// ```
/// use varcalc::{compile, interpreter::variables::unique_variables};
///
/// let node = compile("x + y * x").unwrap();
/// assert_eq!(unique_variables(&node), ["x", "y"]);
/// ```
#[must_use]
pub fn unique_variables(node: &Node) -> Vec<String> {
    let mut seen = HashSet::new();
    collect_variables(node).into_iter().filter(|name| seen.insert(name.clone())).collect()
}
