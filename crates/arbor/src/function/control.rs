//! Comparison and conditional function nodes

use crate::error::Result;
use crate::node::Node;
use crate::numeric;
use crate::types::{self, ValueType};
use crate::value::Value;
use crate::EvalContext;

/// `Bool` for exactly two numeric inputs.
fn comparison_return_type(input_types: &[ValueType]) -> Option<ValueType> {
    if input_types.len() == 2 && types::all_numeric(input_types) {
        Some(ValueType::Bool)
    } else {
        None
    }
}

function_node! {
    /// True if child 0 is strictly greater than child 1.
    ///
    /// Operands of any numeric type are compared as `f64`, so `I64` values
    /// beyond 2^53 may lose precision and compare equal.
    GreaterThan, "GT", 2, (left, right)
}

impl Node for GreaterThan {
    node_slots!();

    fn eval(&self, ctx: &EvalContext) -> Result<Value> {
        let left = numeric::as_f64(&self.eval_numeric_child(0, ctx)?)?;
        let right = numeric::as_f64(&self.eval_numeric_child(1, ctx)?)?;
        Ok(Value::Bool(left > right))
    }

    fn return_type(&self, input_types: &[ValueType]) -> Option<ValueType> {
        comparison_return_type(input_types)
    }
}

function_node! {
    /// True if child 0 is strictly less than child 1.
    ///
    /// Compared as `f64`, with the same precision limit as `GreaterThan`.
    LessThan, "LT", 2, (left, right)
}

impl Node for LessThan {
    node_slots!();

    fn eval(&self, ctx: &EvalContext) -> Result<Value> {
        let left = numeric::as_f64(&self.eval_numeric_child(0, ctx)?)?;
        let right = numeric::as_f64(&self.eval_numeric_child(1, ctx)?)?;
        Ok(Value::Bool(left < right))
    }

    fn return_type(&self, input_types: &[ValueType]) -> Option<ValueType> {
        comparison_return_type(input_types)
    }
}

function_node! {
    /// Conditional: `IF(condition then otherwise)`.
    ///
    /// The condition is evaluated first and only the selected branch is
    /// evaluated after it. Both branches must share a type, which becomes
    /// the result type.
    If, "IF", 3, (condition, then, otherwise)
}

impl Node for If {
    node_slots!();

    fn eval(&self, ctx: &EvalContext) -> Result<Value> {
        if self.eval_bool_child(0, ctx)? {
            self.eval_child(1, ctx)
        } else {
            self.eval_child(2, ctx)
        }
    }

    fn return_type(&self, input_types: &[ValueType]) -> Option<ValueType> {
        match input_types {
            [ValueType::Bool, then, otherwise] if then == otherwise => Some(*then),
            _ => None,
        }
    }
}
