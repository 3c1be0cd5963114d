use super::*;

fn xyz_graph() -> (ValueGraph, Value, Value, Value) {
    let g = ValueGraph::new();
    let x = g.input("x");
    let y = g.input("y");
    let z = g.input("z");
    let w = (&x + &y).with_label("w");
    let _v = (&w * &z).with_label("v");
    (g, x, y, z)
}

#[test]
fn test_create_complete_assignment() {
    let (g, x, y, z) = xyz_graph();
    let a = Assignment::create(&g, [(&x, 5.0), (&y, 6.0), (&z, 7.0)]);
    assert!(a.is_complete());
    assert!(a.missing().is_empty());
    assert_eq!(a.len(), 3);
    assert_eq!(a.value(&y), Some(6.0));
}

#[test]
fn test_create_complete_assignment_with_constants() {
    let g = ValueGraph::new();
    let x = g.input("x");
    let y = g.input("y");
    let w = (&x + &y).with_label("w");
    let _v = (&w * 5.0).with_label("v");

    let a = Assignment::create(&g, [(&x, 5.0), (&y, 6.0)]);
    assert!(a.is_complete());
}

#[test]
fn test_create_incomplete_assignment() {
    let (g, x, y, z) = xyz_graph();
    let a = Assignment::create(&g, [(&x, 5.0), (&z, 7.0)]);
    assert!(!a.is_complete());
    assert_eq!(a.missing(), vec![y.ident()]);
    assert_eq!(a.value(&y), None);
}

#[test]
fn test_operator_node_is_rejected() {
    let (g, x, _, _) = xyz_graph();
    let doubled = &x * 2.0;
    let err = Assignment::try_create(&g, [(&x, 1.0), (&doubled, 2.0)]).unwrap_err();
    assert_eq!(err, MicrogradError::NotAVariable { ident: doubled.ident() });
}

#[test]
#[should_panic(expected = "Assignment creation failed")]
fn test_create_panics_on_operator_node() {
    let (g, x, _, _) = xyz_graph();
    let shifted = &x + 1.0;
    Assignment::create(&g, [(&shifted, 2.0)]);
}

#[test]
fn test_value_from_other_graph_is_rejected() {
    let (g, _, _, _) = xyz_graph();
    let stranger = ValueGraph::new().input("x");
    let err = Assignment::try_create(&g, [(&stranger, 1.0)]).unwrap_err();
    assert!(matches!(err, MicrogradError::GraphMismatch { .. }));
}

#[test]
fn test_late_entry_makes_assignment_incomplete() {
    let (g, x, y, z) = xyz_graph();
    let a = Assignment::create(&g, [(&x, 5.0), (&y, 6.0), (&z, 7.0)]);
    assert!(a.is_complete());
    let late = g.input("late");
    assert!(!a.is_complete());
    assert_eq!(a.missing(), vec![late.ident()]);
}

#[test]
fn test_merge() {
    let (g, x, y, z) = xyz_graph();
    let left = Assignment::create(&g, [(&x, 5.0), (&y, 6.0)]);
    let right = Assignment::create(&g, [(&y, 60.0), (&z, 7.0)]);
    let merged = left.merge(&right);

    assert!(merged.is_complete());
    assert_eq!(merged.value(&x), Some(5.0));
    assert_eq!(merged.value(&y), Some(60.0));
    assert_eq!(merged.value(&z), Some(7.0));
    // Inputs are left as they were
    assert_eq!(left.len(), 2);
    assert_eq!(left.value(&y), Some(6.0));
}

#[test]
fn test_merge_across_graphs_is_rejected() {
    let (g1, x1, _, _) = xyz_graph();
    let (g2, x2, _, _) = xyz_graph();
    let a1 = Assignment::create(&g1, [(&x1, 1.0)]);
    let a2 = Assignment::create(&g2, [(&x2, 1.0)]);
    assert!(matches!(a1.try_merge(&a2), Err(MicrogradError::GraphMismatch { .. })));
}
