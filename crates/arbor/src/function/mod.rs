//! The function-node family
//!
//! Every operator is a small struct holding fixed-arity [`Children`] and
//! implementing [`Node`]. Operators are grouped by domain:
//!
//! - [`boolean`]: AND, OR, NOT, XOR, NAND, NOR, IMPLIES
//! - [`math`]: ADD, SUB, MUL, PDIV, ABS, SQUARE, SQRT, EXP, LN, MAX, MIN
//! - [`trig`]: SIN, COS, TAN, ARCSIN, ARCCOS, ARCTAN, SEC, COSEC, COT
//! - [`control`]: GT, LT, IF

/// Declare a function-node struct with its constructors.
///
/// Generates `new` (all children bound), `empty` (all unbound) and
/// `from_children` (runtime-length list, arity-checked).
macro_rules! function_node {
    ($(#[$meta:meta])* $name:ident, $ident:literal, $arity:literal, ($($arg:ident),*)) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            children: $crate::node::Children<$arity>,
        }

        impl $name {
            #[doc = concat!("Operator symbol: `", $ident, "`")]
            pub const IDENTIFIER: &'static str = $ident;

            /// Fixed number of children
            pub const ARITY: usize = $arity;

            /// Construct with every child bound.
            pub fn new($($arg: $crate::node::NodeRef),*) -> Self {
                Self {
                    children: $crate::node::Children::bound([$($arg),*]),
                }
            }

            /// Construct with every child slot unbound.
            pub fn empty() -> Self {
                Self::default()
            }

            /// Construct from a runtime-length child list.
            ///
            /// Fails with `ArityMismatch` if the list length is not the arity.
            pub fn from_children(
                children: Vec<Option<$crate::node::NodeRef>>,
            ) -> $crate::error::Result<Self> {
                Ok(Self {
                    children: $crate::node::Children::from_vec($ident, children)?,
                })
            }
        }
    };
}

/// Plumbing shared by every `impl Node` of a `function_node!` struct.
macro_rules! node_slots {
    () => {
        fn identifier(&self) -> &str {
            Self::IDENTIFIER
        }

        fn children(&self) -> &[Option<$crate::node::NodeRef>] {
            self.children.as_slice()
        }

        fn children_mut(&mut self) -> &mut [Option<$crate::node::NodeRef>] {
            self.children.as_mut_slice()
        }

        fn new_instance(&self) -> Box<dyn $crate::node::Node> {
            Box::new(Self::empty())
        }
    };
}

pub mod boolean;
pub mod control;
pub mod math;
pub mod trig;

use crate::error::Result;
use crate::node::Node;
use crate::numeric;
use crate::types::{self, ValueType};
use crate::value::Value;
use crate::EvalContext;

pub use boolean::{And, Implies, Nand, Nor, Not, Or, Xor};
pub use control::{GreaterThan, If, LessThan};
pub use math::{
    Absolute, Add, Exp, Ln, Max, Min, Multiply, ProtectedDivide, Square, SquareRoot, Subtract,
};
pub use trig::{ArcCos, ArcSin, ArcTan, Cos, Cosec, Cot, Sec, Sin, Tan};

// ═══════════════════════════════════════════════════════════════════════
// Return-Type Rules
// ═══════════════════════════════════════════════════════════════════════

/// `Bool` if there are exactly `arity` inputs, all `Bool`.
pub(crate) fn boolean_return_type(input_types: &[ValueType], arity: usize) -> Option<ValueType> {
    if input_types.len() == arity && types::all_equal(input_types, ValueType::Bool) {
        Some(ValueType::Bool)
    } else {
        None
    }
}

/// `F64` if there is exactly one input and it is numeric.
pub(crate) fn real_return_type(input_types: &[ValueType]) -> Option<ValueType> {
    match input_types {
        [ty] if types::is_numeric_type(*ty) => Some(ValueType::F64),
        _ => None,
    }
}

/// The widest input type if there are exactly `arity` numeric inputs.
pub(crate) fn widest_return_type(input_types: &[ValueType], arity: usize) -> Option<ValueType> {
    if input_types.len() == arity {
        types::widest_numeric(input_types)
    } else {
        None
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Evaluation Helpers
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate the single child, widen it to `f64` and apply `f`.
pub(crate) fn eval_real<N: Node + ?Sized>(
    node: &N,
    ctx: &EvalContext,
    f: fn(f64) -> f64,
) -> Result<Value> {
    let value = node.eval_numeric_child(0, ctx)?;
    Ok(Value::F64(f(numeric::as_f64(&value)?)))
}

/// Evaluate children 0 and 1 in order and promote both to their widest type.
pub(crate) fn eval_promoted_pair<N: Node + ?Sized>(
    node: &N,
    ctx: &EvalContext,
) -> Result<(Value, Value)> {
    let left = node.eval_numeric_child(0, ctx)?;
    let right = node.eval_numeric_child(1, ctx)?;
    // Both operands were checked numeric above, so the widest type exists.
    let target = types::widest_numeric(&[left.value_type(), right.value_type()])
        .unwrap_or(ValueType::F64);
    Ok((
        numeric::convert(&left, target)?,
        numeric::convert(&right, target)?,
    ))
}
