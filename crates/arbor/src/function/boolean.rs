//! Boolean function nodes
//!
//! All of these take boolean children and produce a boolean. The binary
//! connectives other than XOR are lazy: child 1 is only evaluated when
//! child 0 does not already decide the result.

use super::boolean_return_type;
use crate::error::Result;
use crate::node::Node;
use crate::types::ValueType;
use crate::value::Value;
use crate::EvalContext;

function_node! {
    /// Logical conjunction.
    ///
    /// Child 0 is evaluated first. If it is false the result is false and
    /// child 1 is never evaluated; otherwise child 1's value is the result.
    And, "AND", 2, (left, right)
}

impl Node for And {
    node_slots!();

    fn eval(&self, ctx: &EvalContext) -> Result<Value> {
        if !self.eval_bool_child(0, ctx)? {
            return Ok(Value::Bool(false)); // Short-circuit
        }
        self.eval_bool_child(1, ctx).map(Value::Bool)
    }

    fn return_type(&self, input_types: &[ValueType]) -> Option<ValueType> {
        boolean_return_type(input_types, Self::ARITY)
    }
}

function_node! {
    /// Logical disjunction, skipping child 1 when child 0 is true.
    Or, "OR", 2, (left, right)
}

impl Node for Or {
    node_slots!();

    fn eval(&self, ctx: &EvalContext) -> Result<Value> {
        if self.eval_bool_child(0, ctx)? {
            return Ok(Value::Bool(true)); // Short-circuit
        }
        self.eval_bool_child(1, ctx).map(Value::Bool)
    }

    fn return_type(&self, input_types: &[ValueType]) -> Option<ValueType> {
        boolean_return_type(input_types, Self::ARITY)
    }
}

function_node! {
    /// Logical negation.
    Not, "NOT", 1, (operand)
}

impl Node for Not {
    node_slots!();

    fn eval(&self, ctx: &EvalContext) -> Result<Value> {
        self.eval_bool_child(0, ctx).map(|b| Value::Bool(!b))
    }

    fn return_type(&self, input_types: &[ValueType]) -> Option<ValueType> {
        boolean_return_type(input_types, Self::ARITY)
    }
}

function_node! {
    /// Exclusive or. Both children are always evaluated.
    Xor, "XOR", 2, (left, right)
}

impl Node for Xor {
    node_slots!();

    fn eval(&self, ctx: &EvalContext) -> Result<Value> {
        let left = self.eval_bool_child(0, ctx)?;
        let right = self.eval_bool_child(1, ctx)?;
        Ok(Value::Bool(left != right))
    }

    fn return_type(&self, input_types: &[ValueType]) -> Option<ValueType> {
        boolean_return_type(input_types, Self::ARITY)
    }
}

function_node! {
    /// Negated conjunction: true as soon as child 0 is false.
    Nand, "NAND", 2, (left, right)
}

impl Node for Nand {
    node_slots!();

    fn eval(&self, ctx: &EvalContext) -> Result<Value> {
        if !self.eval_bool_child(0, ctx)? {
            return Ok(Value::Bool(true));
        }
        self.eval_bool_child(1, ctx).map(|b| Value::Bool(!b))
    }

    fn return_type(&self, input_types: &[ValueType]) -> Option<ValueType> {
        boolean_return_type(input_types, Self::ARITY)
    }
}

function_node! {
    /// Negated disjunction: false as soon as child 0 is true.
    Nor, "NOR", 2, (left, right)
}

impl Node for Nor {
    node_slots!();

    fn eval(&self, ctx: &EvalContext) -> Result<Value> {
        if self.eval_bool_child(0, ctx)? {
            return Ok(Value::Bool(false));
        }
        self.eval_bool_child(1, ctx).map(|b| Value::Bool(!b))
    }

    fn return_type(&self, input_types: &[ValueType]) -> Option<ValueType> {
        boolean_return_type(input_types, Self::ARITY)
    }
}

function_node! {
    /// Material implication. A false antecedent (child 0) yields true
    /// without evaluating the consequent.
    Implies, "IMPLIES", 2, (antecedent, consequent)
}

impl Node for Implies {
    node_slots!();

    fn eval(&self, ctx: &EvalContext) -> Result<Value> {
        if !self.eval_bool_child(0, ctx)? {
            return Ok(Value::Bool(true));
        }
        self.eval_bool_child(1, ctx).map(Value::Bool)
    }

    fn return_type(&self, input_types: &[ValueType]) -> Option<ValueType> {
        boolean_return_type(input_types, Self::ARITY)
    }
}
