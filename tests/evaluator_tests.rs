use std::{sync::Arc, thread};

use proptest::prelude::*;
use varcalc::{
    ast::{Function, Node, Operand, Operator},
    compile,
    error::EvaluationError,
    evaluate,
    interpreter::context::{AngleMode, VariableContext},
};

fn empty() -> VariableContext {
    VariableContext::new()
}

#[test]
fn binary_operators() {
    let add = Node::binary_op(2.0, Operator::Add, 3.0);
    assert_eq!(evaluate(&add, &empty()), Ok(5.0));

    let modulus = Node::binary_op(7.0, Operator::Modulus, 3.0);
    assert_eq!(evaluate(&modulus, &empty()), Ok(1.0));

    let negative = Node::binary_op(-7.0, Operator::Modulus, 3.0);
    assert_eq!(evaluate(&negative, &empty()), Ok(-1.0));

    let power = Node::binary_op(2.0, Operator::Power, 0.5);
    assert_eq!(evaluate(&power, &empty()), Ok(2f64.powf(0.5)));
}

#[test]
fn trigonometry_at_zero() {
    assert_eq!(evaluate(&Node::function_call(Function::Sin, 0.0), &empty()), Ok(0.0));
    assert_eq!(evaluate(&Node::function_call(Function::Cos, 0.0), &empty()), Ok(1.0));
}

#[test]
fn square_root_by_default() {
    assert_eq!(evaluate(&Node::nth_root(9.0, None), &empty()), Ok(3.0));
    assert_eq!(evaluate(&Node::nth_root(16.0, Some(Operand::Literal(4.0))), &empty()),
               Ok(2.0));
}

#[test]
fn fraction_is_division() {
    let fraction = Node::fraction(1.0, 2.0);
    let division = Node::binary_op(1.0, Operator::Divide, 2.0);

    assert_eq!(evaluate(&fraction, &empty()), Ok(0.5));
    assert_eq!(evaluate(&fraction, &empty()), evaluate(&division, &empty()));
}

#[test]
fn division_by_zero_is_not_an_error() {
    let node = Node::binary_op(1.0, Operator::Divide, 0.0);
    assert_eq!(evaluate(&node, &empty()), Ok(f64::INFINITY));

    let node = Node::binary_op(-1.0, Operator::Divide, 0.0);
    assert_eq!(evaluate(&node, &empty()), Ok(f64::NEG_INFINITY));

    let node = Node::fraction(0.0, 0.0);
    assert!(evaluate(&node, &empty()).unwrap().is_nan());
}

#[test]
fn modulus_by_zero_is_nan() {
    let node = Node::binary_op(5.0, Operator::Modulus, 0.9);
    assert!(evaluate(&node, &empty()).unwrap().is_nan());
}

#[test]
fn identifiers_are_looked_up() {
    let node = Node::identifier("x");
    assert_eq!(evaluate(&node, &empty()),
               Err(EvaluationError::UnboundVariable("x".to_string())));

    let ctx = VariableContext::bind(&["x"], &[4.0]).unwrap();
    assert_eq!(evaluate(&node, &ctx), Ok(4.0));
}

#[test]
fn unbound_variable_deep_in_the_tree() {
    let node = compile("1 + sin(frac(x, root[n](y)))").unwrap();
    let ctx = VariableContext::bind(&["x", "y"], &[1.0, 4.0]).unwrap();

    assert_eq!(evaluate(&node, &ctx),
               Err(EvaluationError::UnboundVariable("n".to_string())));
}

#[test]
fn bind_requires_one_value_per_name() {
    assert_eq!(VariableContext::bind(&["x", "y"], &[1.0]),
               Err(EvaluationError::ValueCountMismatch { expected: 2,
                                                         found:    1, }));
}

#[test]
fn bind_keeps_the_last_value_of_a_repeated_name() {
    let ctx = VariableContext::bind(&["x", "y", "x"], &[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(ctx.len(), 2);
    assert_eq!(ctx.get("x"), Some(3.0));
}

#[test]
fn legacy_sec_formula() {
    for x in [0.0_f64, 0.5, 1.0, -2.0, 10.0] {
        let expected = (1.0 + x) * x.sin().powf(3.0).cos() - 1.4;
        let actual = evaluate(&Node::function_call(Function::Sec, x), &empty()).unwrap();
        assert_eq!(actual.to_bits(), expected.to_bits(), "sec({x})");
    }
}

#[test]
fn legacy_hyp_formula() {
    for x in [0.0, 3.0, -4.0] {
        let actual = evaluate(&Node::function_call(Function::Hyp, x), &empty()).unwrap();
        assert_eq!(actual, x.hypot(1.0));
    }
}

#[test]
fn reciprocal_functions() {
    let x: f64 = 0.7;
    let ctx = VariableContext::bind(&["x"], &[x]).unwrap();

    assert_eq!(evaluate(&compile("csc(x)").unwrap(), &ctx), Ok(1.0 / x.sin()));
    assert_eq!(evaluate(&compile("cot(x)").unwrap(), &ctx), Ok(x.cos() / x.sin()));
}

#[test]
fn angle_modes() {
    let at = |mode: AngleMode, function: Function, x: f64| {
        let ctx = VariableContext::new().with_angle_mode(mode);
        evaluate(&Node::function_call(function, x), &ctx).unwrap()
    };
    let close = |a: f64, b: f64| (a - b).abs() < 1e-12;

    assert!(close(at(AngleMode::Degrees, Function::Sin, 90.0), 1.0));
    assert!(close(at(AngleMode::Degrees, Function::Cos, 180.0), -1.0));
    assert!(close(at(AngleMode::Gradians, Function::Sin, 100.0), 1.0));
    assert!(close(at(AngleMode::Gradians, Function::Tan, 50.0), 1.0));
    assert!(close(at(AngleMode::Degrees, Function::Csc, 30.0), 2.0));

    assert!(close(at(AngleMode::Degrees, Function::ArcSin, 1.0), 90.0));
    assert!(close(at(AngleMode::Gradians, Function::ArcCos, -1.0), 200.0));
    assert!(close(at(AngleMode::Degrees, Function::ArcTan, 1.0), 45.0));
}

#[test]
fn radians_by_default() {
    assert_eq!(VariableContext::new().angle_mode(), AngleMode::Radians);
    for x in [0.3, 1.0, -2.5] {
        assert_eq!(evaluate(&Node::function_call(Function::Sin, x), &empty()), Ok(x.sin()));
        assert_eq!(evaluate(&Node::function_call(Function::ArcTan, x), &empty()), Ok(x.atan()));
    }
}

#[test]
fn legacy_functions_ignore_angle_mode() {
    let degrees = VariableContext::new().with_angle_mode(AngleMode::Degrees);
    for function in [Function::Sec, Function::Hyp, Function::Log] {
        let node = Node::function_call(function, 2.0);
        assert_eq!(evaluate(&node, &degrees), evaluate(&node, &empty()));
    }
}

#[test]
fn factorial_truncates_its_argument() {
    let eval = |x: f64| evaluate(&Node::factorial(x), &empty()).unwrap();

    assert_eq!(eval(6.0), 720.0);
    assert_eq!(eval(6.99), 720.0);
    assert_eq!(eval(1.0), 1.0);
    assert_eq!(eval(-4.0), 1.0);
    assert_eq!(eval(f64::NAN), 1.0);
    assert_eq!(eval(171.0), f64::INFINITY);
    assert_eq!(eval(1e300), f64::INFINITY);
}

#[test]
fn constants_win_over_context_values() {
    let ctx = VariableContext::bind(&["pi", "x"], &[3.0, 2.0]).unwrap();
    let node = compile("pi * x").unwrap();

    assert_eq!(evaluate(&node, &ctx), Ok(std::f64::consts::PI * 2.0));
    assert_eq!(evaluate(&compile("e").unwrap(), &empty()), Ok(std::f64::consts::E));
}

#[test]
fn one_tree_many_contexts() {
    let node = compile("x * x - y").unwrap();

    let first = VariableContext::bind(&["x", "y"], &[3.0, 1.0]).unwrap();
    let second = VariableContext::bind(&["x", "y"], &[5.0, 5.0]).unwrap();

    assert_eq!(evaluate(&node, &first), Ok(8.0));
    assert_eq!(evaluate(&node, &second), Ok(20.0));
    assert_eq!(evaluate(&node, &first), Ok(8.0));
}

#[test]
fn shared_tree_evaluates_across_threads() {
    let shared = Arc::new(compile("a * 10 + b % 4").unwrap());

    let handles: Vec<_> = (0..8).map(|i| {
                                    let node = Arc::clone(&shared);
                                    thread::spawn(move || {
                                        let a = f64::from(i);
                                        let ctx = VariableContext::bind(&["a", "b"], &[a, a + 2.0])
                                            .unwrap();
                                        for _ in 0..100 {
                                            let expected = a * 10.0 + ((i + 2) % 4) as f64;
                                            assert_eq!(evaluate(&node, &ctx), Ok(expected));
                                        }
                                    })
                                })
                                .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

fn arb_node() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![(-1e6f64..1e6).prop_map(Node::number),
                           prop::sample::select(vec!["x", "y", "z"]).prop_map(Node::identifier)];

    leaf.prop_recursive(4, 32, 2, |inner| {
            prop_oneof![(inner.clone(), inner.clone()).prop_map(|(a, b)| Node::fraction(a, b)),
                        inner.clone().prop_map(Node::factorial),
                        (inner.clone(), prop::sample::select(Function::ALL.to_vec()))
                            .prop_map(|(a, f)| Node::function_call(f, a)),
                        (inner.clone(), prop::option::of(inner.clone()))
                            .prop_map(|(a, i)| Node::nth_root(a, i.map(Operand::from))),
                        (inner.clone(),
                         prop::sample::select(vec![Operator::Add,
                                                   Operator::Subtract,
                                                   Operator::Multiply,
                                                   Operator::Divide,
                                                   Operator::Modulus,
                                                   Operator::Power]),
                         inner).prop_map(|(a, op, b)| Node::binary_op(a, op, b))]
        })
}

proptest! {
    #[test]
    fn literal_evaluates_to_itself(n in proptest::num::f64::ANY) {
        let ctx = VariableContext::bind(&["x"], &[1.0]).unwrap();
        let value = evaluate(&Node::number(n), &ctx).unwrap();
        prop_assert_eq!(value.to_bits(), n.to_bits());
    }

    #[test]
    fn negative_literals_render_and_compile_back(n in -1e6f64..-1e-3) {
        let node = Node::binary_op(n, Operator::Power, 2.0);
        let rendered = node.to_string();
        let reparsed = compile(&rendered).unwrap();
        prop_assert_eq!(evaluate(&reparsed, &empty()), evaluate(&node, &empty()));
    }

    #[test]
    fn evaluation_is_repeatable(node in arb_node(), x in -100.0f64..100.0, y in -100.0f64..100.0) {
        let ctx = VariableContext::bind(&["x", "y", "z"], &[x, y, 0.5]).unwrap();
        let first = evaluate(&node, &ctx).unwrap();
        let second = evaluate(&node, &ctx).unwrap();
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }
}
