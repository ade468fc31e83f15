use tessel_element::{from_name, ElementType, ElementTypeError, F32, I32};
use tessel_ir::{op, ArithmeticOp, AutoBroadcast, Graph, GraphError, Shape};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn minimum_same_type_same_shape() -> Result<(), GraphError> {
    init_logger();
    let a = op::parameter(F32.clone(), [4, 4]);
    let b = op::parameter(F32.clone(), [4, 4]);
    let min = op::minimum(&a, &b)?;
    assert_eq!(min.element_type(), &F32);
    assert_eq!(min.shape(), &Shape::new([4, 4]));
    assert_eq!(min.description(), "Minimum");
    Ok(())
}

#[test]
fn minimum_broadcast() -> Result<(), GraphError> {
    init_logger();
    let a = op::parameter(F32.clone(), [4, 4]);
    let b = op::parameter(F32.clone(), [1, 4]);
    assert_eq!(op::minimum(&a, &b)?.shape(), &Shape::new([4, 4]));
    assert_eq!(op::minimum(&b, &a)?.shape(), &Shape::new([4, 4]));
    Ok(())
}

#[test]
fn minimum_type_mismatch_creates_no_node() {
    init_logger();
    let a = op::parameter(I32.clone(), [4, 4]);
    let b = op::parameter(F32.clone(), [4, 4]);
    let (strong_a, strong_b) = (std::sync::Arc::strong_count(&a), std::sync::Arc::strong_count(&b));

    let err = op::minimum(&a, &b).unwrap_err();
    assert_eq!(
        err,
        GraphError::TypeMismatch {
            lhs: I32.clone(),
            rhs: F32.clone(),
        }
    );
    // no node was left holding the operands
    assert_eq!(std::sync::Arc::strong_count(&a), strong_a);
    assert_eq!(std::sync::Arc::strong_count(&b), strong_b);
}

#[test]
fn minimum_shape_mismatch() {
    init_logger();
    let a = op::parameter(F32.clone(), [4, 4]);
    let b = op::parameter(F32.clone(), [3, 4]);
    assert_eq!(
        op::minimum(&a, &b).unwrap_err(),
        GraphError::ShapeMismatch {
            lhs: Shape::new([4, 4]),
            rhs: Shape::new([3, 4]),
        }
    );
}

#[test]
fn failed_construction_leaves_graph_untouched() -> Result<(), GraphError> {
    init_logger();
    let a = op::parameter(F32.clone(), [2]);
    let b = op::parameter(F32.clone(), [2]);
    let sum = op::add(&a, &b)?;
    let before: Vec<_> = Graph::new(vec![sum.clone()], vec![a.clone(), b.clone()])?
        .ordered_nodes()
        .iter()
        .map(|n| n.id())
        .collect();

    let wrong = op::parameter(I32.clone(), [2]);
    assert!(op::minimum(&sum, &wrong).is_err());

    let after: Vec<_> = Graph::new(vec![sum], vec![a, b])?
        .ordered_nodes()
        .iter()
        .map(|n| n.id())
        .collect();
    assert_eq!(before, after);
    Ok(())
}

#[test]
fn operands_from_name_lookup() -> Result<(), GraphError> {
    init_logger();
    let t = from_name("float")?.clone();
    let fresh = ElementType::new(32, true, true, "float");
    let a = op::parameter(t, [3]);
    let b = op::parameter(fresh, [3]);
    // structural equality is enough for the type check
    assert_eq!(op::maximum(&a, &b)?.element_type(), &F32);
    Ok(())
}

#[test]
fn unknown_type_name_converts_into_graph_error() {
    fn lookup(name: &str) -> Result<ElementType, GraphError> {
        Ok(from_name(name)?.clone())
    }
    assert_eq!(
        lookup("unsigned_long_long"),
        Err(GraphError::UnknownType(ElementTypeError::UnknownType(
            "unsigned_long_long".to_string()
        )))
    );
}

#[test]
fn generic_construction_path() -> Result<(), GraphError> {
    init_logger();
    let a = op::parameter(F32.clone(), [2, 3]);
    let b = op::parameter(F32.clone(), [3]);
    let op: ArithmeticOp = "Divide".parse()?;
    let node = op.build_from(&[a.clone(), b])?;
    assert_eq!(node.shape(), &Shape::new([2, 3]));
    assert_eq!(
        op.build_from(&[a]).unwrap_err(),
        GraphError::Arity {
            op: ArithmeticOp::Divide,
            expected: 2,
            actual: 1,
        }
    );
    Ok(())
}

#[test]
fn strict_shapes_without_broadcast() -> Result<(), GraphError> {
    init_logger();
    let a = op::parameter(F32.clone(), [4, 4]);
    let b = op::parameter(F32.clone(), [1, 4]);
    assert!(matches!(
        ArithmeticOp::Minimum.build_with(&a, &b, AutoBroadcast::None),
        Err(GraphError::ShapeMismatch { .. })
    ));
    let node = ArithmeticOp::Minimum.build_with(&a, &a, AutoBroadcast::None)?;
    assert_eq!(node.shape(), &Shape::new([4, 4]));
    Ok(())
}

#[test]
fn deep_chain() -> Result<(), GraphError> {
    init_logger();
    let x = op::parameter(F32.clone(), [8]);
    let mut acc = x.clone();
    for i in 0..1000 {
        acc = if i % 2 == 0 {
            op::add(&acc, &x)?
        } else {
            op::minimum(&acc, &x)?
        };
    }
    let graph = Graph::new(vec![acc], vec![x])?;
    assert_eq!(graph.ordered_nodes().len(), 1001);
    Ok(())
}

#[test]
fn very_deep_chain_drops_without_overflow() -> Result<(), GraphError> {
    let x = op::parameter(F32.clone(), [8]);
    let mut acc = x.clone();
    for _ in 0..200_000 {
        acc = op::minimum(&acc, &x)?;
    }
    assert_eq!(std::sync::Arc::strong_count(&x), 200_002);

    let graph = Graph::new(vec![acc.clone()], vec![x.clone()])?;
    drop(acc);
    drop(graph);
    assert_eq!(std::sync::Arc::strong_count(&x), 1);
    Ok(())
}
