use approx::assert_relative_eq;
use micrograd_core::autograd::{check_gradients, GradCheckConfig};
use micrograd_core::{
    Assignment, Completeness, EvaluationConfig, GraphValuation, MicrogradError, Operator, ValueGraph, ValueType,
};

mod common;
use common::{bound_inputs, evaluate};

#[test]
fn test_quotient_and_difference_gradients() {
    let (_, inputs, bound) = bound_inputs(&[("a", 3.0), ("b", 2.0)]);
    let (a, b) = (&inputs[0], &inputs[1]);
    let q = a / b;
    let d = &q - a;

    let gv = GraphValuation::run(&bound);

    // d = a/b - a
    assert_relative_eq!(gv.value_of(&d).unwrap(), -1.5);
    assert_relative_eq!(gv.gradient_of(a).unwrap(), 1.0 / 2.0 - 1.0);
    assert_relative_eq!(gv.gradient_of(b).unwrap(), -3.0 / 4.0);
}

#[test]
fn test_scalar_operands_fold_into_one_node() {
    let g = ValueGraph::new();
    let x = g.input("x");
    let shifted = &x + 4.0;
    let scaled = 3.0 * &x;
    let flipped = 1.0 - &x;

    assert_eq!(shifted.value_type(), ValueType::Operator(Operator::Sum { bias: 4.0 }));
    assert_eq!(scaled.value_type(), ValueType::Operator(Operator::Prod { coefficient: 3.0 }));
    assert_eq!(shifted.to_string(), "Value(+ 4)");
    assert_eq!(scaled.to_string(), "Value(3×)");

    let a = Assignment::create(&g, [(&x, 2.0)]);
    assert_eq!(evaluate(&a, &flipped), (-1.0, 1.0));
    let gv = GraphValuation::run(&a);
    // 1 from the sum, 3 from the product, -1 from the difference
    assert_relative_eq!(gv.gradient_of(&x).unwrap(), 3.0);
}

#[test]
fn test_shared_subexpression_diamond() {
    let (_, inputs, a) = bound_inputs(&[("x", 0.5)]);
    let x = &inputs[0];
    let shared = x.exp();
    let left = &shared * 2.0;
    let right = shared.pow(2.0);
    let top = &left + &right;

    let gv = GraphValuation::run(&a);
    let e = 0.5_f64.exp();
    assert_relative_eq!(gv.value_of(&top).unwrap(), 2.0 * e + e * e, epsilon = 1e-12);
    // d/dx (2e^x + e^2x) = 2e^x + 2e^2x
    assert_relative_eq!(gv.gradient_of(x).unwrap(), 2.0 * e + 2.0 * e * e, epsilon = 1e-12);
    assert_relative_eq!(gv.gradient_of(&shared).unwrap(), 2.0 + 2.0 * e, epsilon = 1e-12);
}

#[test]
fn test_gradient_check_on_mixed_expression() {
    let (_, inputs, a) = bound_inputs(&[("p", 0.3), ("q", -0.8), ("r", 1.7)]);
    let (p, q, r) = (&inputs[0], &inputs[1], &inputs[2]);
    let inner = (&(p * q) + &r.pow(0.5)).tanh();
    let _loss = &(&inner * &inner) + &(q / r).exp();

    assert_eq!(check_gradients(&a, &GradCheckConfig::default()), Ok(()));
}

#[test]
fn test_strict_and_permissive_configs() {
    let g = ValueGraph::new();
    let x = g.input("x");
    let y = g.input("y");
    let out = &x * &y;
    let partial = Assignment::create(&g, [(&x, 4.0)]);

    let strict = EvaluationConfig {
        completeness: Completeness::Strict,
    };
    assert_eq!(
        GraphValuation::run_with(&partial, &strict).unwrap_err(),
        MicrogradError::IncompleteAssignment {
            missing: vec![y.ident()]
        }
    );

    let gv = GraphValuation::run_with(&partial, &EvaluationConfig::permissive()).unwrap();
    assert_eq!(gv.value_of(&out), Some(0.0));
    assert_eq!(gv.gradient_of(&y), Some(4.0));
}

#[test]
fn test_binding_an_operator_node_is_rejected() {
    let g = ValueGraph::new();
    let x = g.input("x");
    let y = x.tanh();
    let err = Assignment::try_create(&g, [(&y, 1.0)]).unwrap_err();
    assert_eq!(err, MicrogradError::NotAVariable { ident: y.ident() });
}

#[test]
fn test_values_from_different_graphs_cannot_mix() {
    let first = ValueGraph::new();
    let second = ValueGraph::new();
    let a = first.input("a");
    let b = second.input("b");
    assert!(matches!(a.try_add(&b), Err(MicrogradError::GraphMismatch { .. })));
    assert!(matches!(a.try_mul(&b), Err(MicrogradError::GraphMismatch { .. })));
    assert!(first.try_sum(&[a.clone(), b.clone()]).is_err());
    // Nothing was appended by the failed attempts
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
}

#[test]
fn test_rebuilding_after_evaluation_extends_the_graph() {
    let (g, inputs, a) = bound_inputs(&[("x", 2.0)]);
    let x = &inputs[0];
    let square = x.pow(2.0);
    let before = GraphValuation::run(&a);
    assert_eq!(before.gradient_of(x), Some(4.0));

    let cube = &square * x;
    assert_eq!(g.len(), 3);
    let after = GraphValuation::run(&a);
    assert_eq!(after.value_of(&cube), Some(8.0));
    assert_eq!(after.gradient_of(x), Some(12.0));
    assert_eq!(before.valuation(&cube), None);
}
