use pretty_assertions::assert_eq;
use varcalc::{
    ast::{Function, Node, NodeKind, Operand, Operator},
    compile,
    error::BuildError,
};

#[test]
fn number_and_identifier_hold_their_operand_case() {
    assert_eq!(Node::number(3.0).kind(), &NodeKind::Number(Operand::Literal(3.0)));
    assert_eq!(Node::identifier("x").kind(),
               &NodeKind::Identifier(Operand::VariableRef("x".to_string())));
}

#[test]
fn from_kind_rejects_mismatched_operands() {
    let number_with_variable = NodeKind::Number(Operand::VariableRef("x".to_string()));
    assert!(matches!(Node::from_kind(number_with_variable),
                     Err(BuildError::MalformedNode { .. })));

    let identifier_with_literal = NodeKind::Identifier(Operand::Literal(1.0));
    assert!(matches!(Node::from_kind(identifier_with_literal),
                     Err(BuildError::MalformedNode { .. })));

    let nested = NodeKind::Number(Operand::Subexpression(Box::new(Node::number(1.0))));
    assert!(Node::from_kind(nested).is_err());
}

#[test]
fn from_kind_accepts_well_formed_kinds() {
    let kinds = [NodeKind::Number(Operand::Literal(1.0)),
                 NodeKind::Identifier(Operand::VariableRef("y".to_string())),
                 NodeKind::FunctionCall { function: Function::Cos,
                                          argument: Operand::VariableRef("y".to_string()), },
                 NodeKind::Fraction { numerator:   Operand::Literal(1.0),
                                      denominator: Operand::Literal(2.0), },
                 NodeKind::BinaryOp { left:     Operand::Literal(1.0),
                                      operator: Operator::Add,
                                      right:    Operand::Literal(2.0), }];

    for kind in kinds {
        let node = Node::from_kind(kind.clone()).unwrap();
        assert_eq!(node.into_kind(), kind);
    }
}

#[test]
fn root_index_defaults_to_two() {
    let node = Node::nth_root(9.0, None);
    assert_eq!(node.kind(),
               &NodeKind::NthRoot { radicand: Operand::Literal(9.0),
                                    index:    Operand::Literal(2.0), });

    let cube = Node::nth_root(27.0, Some(Operand::Literal(3.0)));
    assert_eq!(cube.kind(),
               &NodeKind::NthRoot { radicand: Operand::Literal(27.0),
                                    index:    Operand::Literal(3.0), });
}

#[test]
fn function_keywords_round_trip() {
    for function in Function::ALL {
        assert_eq!(Function::from_keyword(function.keyword()), Some(function));
    }
    assert_eq!(Function::from_keyword("sqrt"), None);
    assert_eq!(Function::from_keyword("SIN"), None);
}

#[test]
fn display_renders_source_form() {
    let cases = [("sin(x) / 2 + sqrt[3](y)", "sin(x) / 2 + root[3](y)"),
                 ("sqrt(9)", "sqrt(9)"),
                 ("frac(1)(2)", "frac(1, 2)"),
                 ("(1 + 2) * 3", "(1 + 2) * 3"),
                 ("1 + (2 * 3)", "1 + 2 * 3"),
                 ("a - (b - c)", "a - (b - c)"),
                 ("(a - b) - c", "a - b - c"),
                 ("(2 ^ 3) ^ 2", "(2 ^ 3) ^ 2"),
                 ("2 ^ 3 ^ 2", "2 ^ 3 ^ 2"),
                 ("hyp(2.5 % x)", "hyp(2.5 % x)"),
                 ("-3", "-3"),
                 ("(-2) ^ 2", "(-2) ^ 2"),
                 ("2 ^ -1", "2 ^ -1"),
                 ("-x", "-1 * x"),
                 ("n!", "n!"),
                 ("(-3)!", "(-3)!"),
                 ("(n - 1)!", "(n - 1)!"),
                 ("sqrt(x)!!", "sqrt(x)!!")];

    for (source, rendered) in cases {
        assert_eq!(compile(source).unwrap().to_string(), rendered, "{source}");
    }
}

#[test]
fn rendered_trees_compile_to_the_same_tree() {
    for source in ["x * (y + 1) ^ 2",
                   "frac(a, b) % root[n](c)",
                   "arccos(cot(x - 1))",
                   "(-2) ^ x - -y",
                   "-x ^ 2 * (x + 1)!",
                   "(-1.5)! + 2 ^ -3!"]
    {
        let node = compile(source).unwrap();
        assert_eq!(compile(&node.to_string()).unwrap(), node);
    }
}

#[test]
fn negative_literals_render_so_they_read_back() {
    let cases = [(Node::binary_op(-1.0, Operator::Power, 2.0), "(-1) ^ 2"),
                 (Node::binary_op(2.0, Operator::Power, -1.0), "2 ^ -1"),
                 (Node::binary_op(-1.0, Operator::Subtract, -1.0), "-1 - -1"),
                 (Node::factorial(-3.0), "(-3)!"),
                 (Node::factorial(Node::number(-3.0)), "(-3)!"),
                 (Node::number(-1.0), "-1")];

    for (node, rendered) in cases {
        assert_eq!(node.to_string(), rendered);
        let reparsed = compile(rendered).unwrap();
        assert_eq!(varcalc::evaluate(&reparsed, &Default::default()),
                   varcalc::evaluate(&node, &Default::default()),
                   "{rendered}");
    }
}

#[test]
fn factorial_kind() {
    let node = Node::factorial(Node::identifier("n"));
    assert_eq!(node.kind().name(), "factorial");
    assert_eq!(Node::from_kind(node.kind().clone()).unwrap(), node);
}
