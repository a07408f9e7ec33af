use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use arbor::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

// A terminal that counts how many times it was evaluated
#[derive(Debug)]
struct Probe {
    value: Value,
    evaluations: AtomicUsize,
}

impl Probe {
    fn new(value: Value) -> Arc<Self> {
        Arc::new(Self {
            value,
            evaluations: AtomicUsize::new(0),
        })
    }

    fn count(&self) -> usize {
        self.evaluations.load(Ordering::SeqCst)
    }
}

impl Node for Probe {
    fn identifier(&self) -> &str {
        "PROBE"
    }

    fn children(&self) -> &[Option<NodeRef>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Option<NodeRef>] {
        Default::default()
    }

    fn eval(&self, _ctx: &EvalContext) -> Result<Value> {
        self.evaluations.fetch_add(1, Ordering::SeqCst);
        Ok(self.value)
    }

    fn return_type(&self, input_types: &[ValueType]) -> Option<ValueType> {
        input_types.is_empty().then(|| self.value.value_type())
    }

    fn new_instance(&self) -> Box<dyn Node> {
        Box::new(Probe {
            value: self.value,
            evaluations: AtomicUsize::new(0),
        })
    }
}

fn lit(v: impl Into<Value>) -> NodeRef {
    Arc::new(Literal::new(v.into()))
}

fn eval(node: &dyn Node) -> Result<Value> {
    node.eval(&EvalContext::new())
}

fn as_f64(value: Value) -> f64 {
    match value {
        Value::F64(n) => n,
        other => panic!("expected F64, got {:?}", other),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// AND
// ═══════════════════════════════════════════════════════════════════════

#[rstest]
#[case(false, false, false)]
#[case(false, true, false)]
#[case(true, false, false)]
#[case(true, true, true)]
fn test_and_truth_table(#[case] a: bool, #[case] b: bool, #[case] expected: bool) {
    let node = And::new(lit(a), lit(b));
    assert_eq!(eval(&node).unwrap(), Value::Bool(expected));
}

#[rstest]
#[case(false)]
#[case(true)]
fn test_and_false_left_never_forces_right(#[case] right: bool) {
    let left = Probe::new(Value::Bool(false));
    let probe = Probe::new(Value::Bool(right));
    let node = And::new(left.clone(), probe.clone());

    assert_eq!(eval(&node).unwrap(), Value::Bool(false));
    assert_eq!(left.count(), 1);
    assert_eq!(probe.count(), 0);
}

#[test]
fn test_and_true_left_forces_right_once() {
    let probe = Probe::new(Value::Bool(true));
    let node = And::new(lit(true), probe.clone());

    assert_eq!(eval(&node).unwrap(), Value::Bool(true));
    assert_eq!(probe.count(), 1);
}

#[test]
fn test_and_false_left_tolerates_unbound_right() {
    let mut node = And::empty();
    node.set_child(0, Some(lit(false))).unwrap();
    assert_eq!(eval(&node).unwrap(), Value::Bool(false));
}

#[rstest]
#[case(&[ValueType::Bool, ValueType::Bool], Some(ValueType::Bool))]
#[case(&[], None)]
#[case(&[ValueType::Bool], None)]
#[case(&[ValueType::Bool, ValueType::Bool, ValueType::Bool], None)]
#[case(&[ValueType::Bool, ValueType::F64], None)]
#[case(&[ValueType::I32, ValueType::Bool], None)]
#[case(&[ValueType::F64, ValueType::F64], None)]
fn test_and_return_type(#[case] inputs: &[ValueType], #[case] expected: Option<ValueType>) {
    assert_eq!(And::empty().return_type(inputs), expected);
}

#[test]
fn test_and_rejects_numeric_child_at_runtime() {
    let node = And::new(lit(1.0f64), lit(true));
    assert_eq!(
        eval(&node).unwrap_err(),
        EvalError::TypeMismatch {
            node: "AND".to_string(),
            expected: "bool".to_string(),
            got: "f64".to_string(),
        }
    );
}

// ═══════════════════════════════════════════════════════════════════════
// TAN
// ═══════════════════════════════════════════════════════════════════════

#[rstest]
#[case(0.0)]
#[case(0.5)]
#[case(-1.2)]
#[case(3.0)]
#[case(100.0)]
fn test_tan_matches_f64_tan(#[case] x: f64) {
    let result = as_f64(eval(&Tan::new(lit(x))).unwrap());
    assert!((result - x.tan()).abs() < 1e-12, "tan({}) = {}", x, result);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(-2)]
#[case(7)]
fn test_tan_same_result_for_all_numeric_representations(#[case] n: i32) {
    let expected = (n as f64).tan();
    let inputs = [
        Value::F64(n as f64),
        Value::F32(n as f32),
        Value::I64(n as i64),
        Value::I32(n),
    ];

    for input in inputs {
        let result = as_f64(eval(&Tan::new(lit(input))).unwrap());
        assert!(
            (result - expected).abs() < 1e-6,
            "tan({:?}) = {}, expected {}",
            input,
            result,
            expected
        );
    }
}

#[rstest]
#[case(&[ValueType::F64], Some(ValueType::F64))]
#[case(&[ValueType::F32], Some(ValueType::F64))]
#[case(&[ValueType::I64], Some(ValueType::F64))]
#[case(&[ValueType::I32], Some(ValueType::F64))]
#[case(&[ValueType::Bool], None)]
#[case(&[], None)]
#[case(&[ValueType::F64, ValueType::F64], None)]
fn test_tan_return_type(#[case] inputs: &[ValueType], #[case] expected: Option<ValueType>) {
    assert_eq!(Tan::empty().return_type(inputs), expected);
}

#[test]
fn test_tan_evaluates_child_once() {
    let probe = Probe::new(Value::I32(1));
    let node = Tan::new(probe.clone());
    eval(&node).unwrap();
    assert_eq!(probe.count(), 1);
}

#[test]
fn test_tan_rejects_bool_child() {
    let node = Tan::new(lit(true));
    assert!(matches!(
        eval(&node).unwrap_err(),
        EvalError::TypeMismatch { .. }
    ));
}

// ═══════════════════════════════════════════════════════════════════════
// Construction
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_from_children_arity_check() {
    assert!(And::from_children(vec![None, None]).is_ok());
    assert_eq!(
        And::from_children(vec![None]).unwrap_err(),
        EvalError::ArityMismatch {
            node: "AND".to_string(),
            expected: 2,
            got: 1,
        }
    );
    assert_eq!(
        Tan::from_children(vec![None, None]).unwrap_err(),
        EvalError::ArityMismatch {
            node: "TAN".to_string(),
            expected: 1,
            got: 2,
        }
    );
    assert!(If::from_children(vec![None; 2]).is_err());
    assert!(ProtectedDivide::from_children(vec![None]).is_err());
}

#[test]
fn test_empty_constructor_has_unbound_slots() {
    let node = If::empty();
    assert_eq!(node.arity(), 3);
    assert!(node.children().iter().all(Option::is_none));
}

#[test]
fn test_from_children_keeps_order() {
    let node = Subtract::from_children(vec![Some(lit(10i32)), Some(lit(3i32))]).unwrap();
    assert_eq!(eval(&node).unwrap(), Value::I32(7));
}

// ═══════════════════════════════════════════════════════════════════════
// Identifiers and Idempotence
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_identifier_independent_of_children_and_history() {
    let mut node = And::empty();
    assert_eq!(node.identifier(), "AND");

    node.set_child(0, Some(lit(true))).unwrap();
    node.set_child(1, Some(lit(false))).unwrap();
    assert_eq!(node.identifier(), "AND");

    eval(&node).unwrap();
    eval(&node).unwrap();
    assert_eq!(node.identifier(), "AND");
    assert_eq!(Tan::new(lit(1i32)).identifier(), "TAN");
}

#[test]
fn test_evaluation_is_idempotent() {
    let tree = Add::new(
        Arc::new(Tan::new(lit(0.3f64))),
        Arc::new(ProtectedDivide::new(lit(5i32), lit(2i32))),
    );
    let first = eval(&tree).unwrap();
    let second = eval(&tree).unwrap();
    assert_eq!(first, second);
}

// ═══════════════════════════════════════════════════════════════════════
// Context
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_interrupted_context_aborts() {
    let ctx = EvalContext::new();
    ctx.interrupt();

    let probe = Probe::new(Value::Bool(true));
    let node = Not::new(probe.clone());
    assert_eq!(node.eval(&ctx).unwrap_err(), EvalError::Interrupted);
    assert_eq!(probe.count(), 0);

    ctx.reset_interrupt();
    assert_eq!(node.eval(&ctx).unwrap(), Value::Bool(false));
}

#[test]
fn test_trace_context_evaluates_normally() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("arbor=trace")
        .with_test_writer()
        .try_init();

    let ctx = EvalContext::new().with_trace(true);
    let node = Or::new(lit(false), Arc::new(Not::new(lit(false))));
    assert_eq!(node.eval(&ctx).unwrap(), Value::Bool(true));
}

// ═══════════════════════════════════════════════════════════════════════
// Shared Evaluation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_variables_rebound_per_fitness_case() {
    let x = Arc::new(Variable::new("x", ValueType::F64));
    let tree = Multiply::new(x.clone(), x.clone());

    for case in [0.0, 1.5, -2.0, 10.0] {
        x.set_value(Value::F64(case)).unwrap();
        assert_eq!(eval(&tree).unwrap(), Value::F64(case * case));
    }
}

#[test]
fn test_same_tree_evaluated_from_many_threads() {
    let tree: NodeRef = Arc::new(If::new(
        Arc::new(GreaterThan::new(lit(2i32), lit(1i32))),
        Arc::new(Tan::new(lit(1.0f64))),
        lit(0.0f64),
    ));

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let tree = Arc::clone(&tree);
                s.spawn(move || tree.eval(&EvalContext::new()))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), Value::F64(1.0f64.tan()));
        }
    });
}

#[test]
fn test_shared_subtree_in_two_parents() {
    let shared: NodeRef = Arc::new(Not::new(lit(false)));
    let left = And::new(shared.clone(), lit(true));
    let right = Or::new(lit(false), shared.clone());

    assert_eq!(eval(&left).unwrap(), Value::Bool(true));
    assert_eq!(eval(&right).unwrap(), Value::Bool(true));
    assert_eq!(Arc::strong_count(&shared), 3);
}
