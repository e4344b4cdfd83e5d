use pretty_assertions::assert_eq;
use varcalc::{
    ast::{Function, Node, Operator},
    collect_variables, compile, unique_variables,
};

#[test]
fn occurrences_in_order_with_duplicates() {
    let node = compile("x + y * x").unwrap();
    assert_eq!(collect_variables(&node), ["x", "y", "x"]);
}

#[test]
fn no_identifiers_no_names() {
    assert!(collect_variables(&compile("1 + sin(2) * sqrt(4)").unwrap()).is_empty());
    assert!(collect_variables(&Node::number(1.0)).is_empty());
}

#[test]
fn descends_into_every_construct() {
    let node = compile("frac(a, b) + root[c](d) - cos(e) % f ^ g").unwrap();
    assert_eq!(collect_variables(&node), ["a", "b", "d", "c", "e", "f", "g"]);
}

#[test]
fn hand_built_trees() {
    let inner = Node::function_call(Function::Log, Node::identifier("t"));
    let node = Node::binary_op(Node::identifier("s"), Operator::Power, inner);
    assert_eq!(collect_variables(&node), ["s", "t"]);
}

#[test]
fn unique_keeps_first_occurrence_order() {
    let node = compile("b * a + b - c / a").unwrap();
    assert_eq!(collect_variables(&node), ["b", "a", "b", "c", "a"]);
    assert_eq!(unique_variables(&node), ["b", "a", "c"]);
}

#[test]
fn factorials_negations_and_constants() {
    let node = compile("-a! * pi + (b - e)!").unwrap();
    assert_eq!(collect_variables(&node), ["a", "pi", "b", "e"]);
}
