//! Arithmetic function nodes
//!
//! Binary arithmetic promotes both operands to the widest input type
//! (F64 > F32 > I64 > I32) and produces that type. Integer arithmetic wraps
//! on overflow so every well-typed tree evaluates to a value.

use super::{eval_promoted_pair, eval_real, real_return_type, widest_return_type};
use crate::error::{EvalError, Result};
use crate::node::{Children, Node, NodeRef};
use crate::numeric;
use crate::types::{self, ValueType};
use crate::value::Value;
use crate::EvalContext;

fn mismatch(node: &str, value: &Value) -> EvalError {
    EvalError::type_mismatch(node, "a numeric type", value)
}

function_node! {
    /// Addition of two numbers.
    Add, "ADD", 2, (left, right)
}

impl Node for Add {
    node_slots!();

    fn eval(&self, ctx: &EvalContext) -> Result<Value> {
        match eval_promoted_pair(self, ctx)? {
            (Value::F64(a), Value::F64(b)) => Ok(Value::F64(a + b)),
            (Value::F32(a), Value::F32(b)) => Ok(Value::F32(a + b)),
            (Value::I64(a), Value::I64(b)) => Ok(Value::I64(a.wrapping_add(b))),
            (Value::I32(a), Value::I32(b)) => Ok(Value::I32(a.wrapping_add(b))),
            (left, _) => Err(mismatch(Self::IDENTIFIER, &left)),
        }
    }

    fn return_type(&self, input_types: &[ValueType]) -> Option<ValueType> {
        widest_return_type(input_types, Self::ARITY)
    }
}

function_node! {
    /// Subtraction of child 1 from child 0.
    Subtract, "SUB", 2, (left, right)
}

impl Node for Subtract {
    node_slots!();

    fn eval(&self, ctx: &EvalContext) -> Result<Value> {
        match eval_promoted_pair(self, ctx)? {
            (Value::F64(a), Value::F64(b)) => Ok(Value::F64(a - b)),
            (Value::F32(a), Value::F32(b)) => Ok(Value::F32(a - b)),
            (Value::I64(a), Value::I64(b)) => Ok(Value::I64(a.wrapping_sub(b))),
            (Value::I32(a), Value::I32(b)) => Ok(Value::I32(a.wrapping_sub(b))),
            (left, _) => Err(mismatch(Self::IDENTIFIER, &left)),
        }
    }

    fn return_type(&self, input_types: &[ValueType]) -> Option<ValueType> {
        widest_return_type(input_types, Self::ARITY)
    }
}

function_node! {
    /// Multiplication of two numbers.
    Multiply, "MUL", 2, (left, right)
}

impl Node for Multiply {
    node_slots!();

    fn eval(&self, ctx: &EvalContext) -> Result<Value> {
        match eval_promoted_pair(self, ctx)? {
            (Value::F64(a), Value::F64(b)) => Ok(Value::F64(a * b)),
            (Value::F32(a), Value::F32(b)) => Ok(Value::F32(a * b)),
            (Value::I64(a), Value::I64(b)) => Ok(Value::I64(a.wrapping_mul(b))),
            (Value::I32(a), Value::I32(b)) => Ok(Value::I32(a.wrapping_mul(b))),
            (left, _) => Err(mismatch(Self::IDENTIFIER, &left)),
        }
    }

    fn return_type(&self, input_types: &[ValueType]) -> Option<ValueType> {
        widest_return_type(input_types, Self::ARITY)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Protected Division
// ═══════════════════════════════════════════════════════════════════════

/// Division that never fails: a zero divisor yields the protection value.
///
/// Operands of any numeric type are widened to `f64` and the result is
/// always `F64`.
#[derive(Debug, Clone)]
pub struct ProtectedDivide {
    children: Children<2>,
    protection: f64,
}

impl ProtectedDivide {
    /// Operator symbol: `PDIV`
    pub const IDENTIFIER: &'static str = "PDIV";

    /// Fixed number of children
    pub const ARITY: usize = 2;

    /// Result used when the divisor is zero, unless overridden
    pub const DEFAULT_PROTECTION: f64 = 0.0;

    /// Construct with both children bound and the default protection value.
    pub fn new(dividend: NodeRef, divisor: NodeRef) -> Self {
        Self {
            children: Children::bound([dividend, divisor]),
            protection: Self::DEFAULT_PROTECTION,
        }
    }

    /// Construct with both child slots unbound.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Construct from a runtime-length child list.
    pub fn from_children(children: Vec<Option<NodeRef>>) -> Result<Self> {
        Ok(Self {
            children: Children::from_vec(Self::IDENTIFIER, children)?,
            protection: Self::DEFAULT_PROTECTION,
        })
    }

    /// Replace the value returned for a zero divisor.
    pub fn with_protection(mut self, protection: f64) -> Self {
        self.protection = protection;
        self
    }

    /// The value returned for a zero divisor.
    pub fn protection(&self) -> f64 {
        self.protection
    }
}

impl Default for ProtectedDivide {
    fn default() -> Self {
        Self {
            children: Children::empty(),
            protection: Self::DEFAULT_PROTECTION,
        }
    }
}

impl Node for ProtectedDivide {
    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    fn children(&self) -> &[Option<NodeRef>] {
        self.children.as_slice()
    }

    fn children_mut(&mut self) -> &mut [Option<NodeRef>] {
        self.children.as_mut_slice()
    }

    fn eval(&self, ctx: &EvalContext) -> Result<Value> {
        let dividend = self.eval_numeric_child(0, ctx)?;
        let divisor = self.eval_numeric_child(1, ctx)?;
        let divisor = numeric::as_f64(&divisor)?;

        if divisor == 0.0 {
            return Ok(Value::F64(self.protection));
        }
        Ok(Value::F64(numeric::as_f64(&dividend)? / divisor))
    }

    fn return_type(&self, input_types: &[ValueType]) -> Option<ValueType> {
        if input_types.len() == Self::ARITY && types::all_numeric(input_types) {
            Some(ValueType::F64)
        } else {
            None
        }
    }

    fn new_instance(&self) -> Box<dyn Node> {
        // Keep the configured protection, drop the children
        Box::new(Self::empty().with_protection(self.protection))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Unary Operators
// ═══════════════════════════════════════════════════════════════════════

/// A single numeric input, returned unchanged as the output type.
fn same_numeric_return_type(input_types: &[ValueType]) -> Option<ValueType> {
    match input_types {
        [ty] if types::is_numeric_type(*ty) => Some(*ty),
        _ => None,
    }
}

function_node! {
    /// Absolute value, in the input's own numeric type.
    Absolute, "ABS", 1, (operand)
}

impl Node for Absolute {
    node_slots!();

    fn eval(&self, ctx: &EvalContext) -> Result<Value> {
        match self.eval_numeric_child(0, ctx)? {
            Value::F64(n) => Ok(Value::F64(n.abs())),
            Value::F32(n) => Ok(Value::F32(n.abs())),
            Value::I64(n) => Ok(Value::I64(n.wrapping_abs())),
            Value::I32(n) => Ok(Value::I32(n.wrapping_abs())),
            other => Err(mismatch(Self::IDENTIFIER, &other)),
        }
    }

    fn return_type(&self, input_types: &[ValueType]) -> Option<ValueType> {
        same_numeric_return_type(input_types)
    }
}

function_node! {
    /// Square of a number, in the input's own numeric type.
    Square, "SQUARE", 1, (operand)
}

impl Node for Square {
    node_slots!();

    fn eval(&self, ctx: &EvalContext) -> Result<Value> {
        match self.eval_numeric_child(0, ctx)? {
            Value::F64(n) => Ok(Value::F64(n * n)),
            Value::F32(n) => Ok(Value::F32(n * n)),
            Value::I64(n) => Ok(Value::I64(n.wrapping_mul(n))),
            Value::I32(n) => Ok(Value::I32(n.wrapping_mul(n))),
            other => Err(mismatch(Self::IDENTIFIER, &other)),
        }
    }

    fn return_type(&self, input_types: &[ValueType]) -> Option<ValueType> {
        same_numeric_return_type(input_types)
    }
}

function_node! {
    /// Square root. Negative inputs give NaN.
    SquareRoot, "SQRT", 1, (operand)
}

impl Node for SquareRoot {
    node_slots!();

    fn eval(&self, ctx: &EvalContext) -> Result<Value> {
        eval_real(self, ctx, f64::sqrt)
    }

    fn return_type(&self, input_types: &[ValueType]) -> Option<ValueType> {
        real_return_type(input_types)
    }
}

function_node! {
    /// Natural exponential, e raised to the child's value.
    Exp, "EXP", 1, (operand)
}

impl Node for Exp {
    node_slots!();

    fn eval(&self, ctx: &EvalContext) -> Result<Value> {
        eval_real(self, ctx, f64::exp)
    }

    fn return_type(&self, input_types: &[ValueType]) -> Option<ValueType> {
        real_return_type(input_types)
    }
}

function_node! {
    /// Natural logarithm. Zero gives negative infinity, negatives give NaN.
    Ln, "LN", 1, (operand)
}

impl Node for Ln {
    node_slots!();

    fn eval(&self, ctx: &EvalContext) -> Result<Value> {
        eval_real(self, ctx, f64::ln)
    }

    fn return_type(&self, input_types: &[ValueType]) -> Option<ValueType> {
        real_return_type(input_types)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Selection
// ═══════════════════════════════════════════════════════════════════════

function_node! {
    /// The larger of two numbers, in their widest type.
    Max, "MAX", 2, (left, right)
}

impl Node for Max {
    node_slots!();

    fn eval(&self, ctx: &EvalContext) -> Result<Value> {
        match eval_promoted_pair(self, ctx)? {
            (Value::F64(a), Value::F64(b)) => Ok(Value::F64(a.max(b))),
            (Value::F32(a), Value::F32(b)) => Ok(Value::F32(a.max(b))),
            (Value::I64(a), Value::I64(b)) => Ok(Value::I64(a.max(b))),
            (Value::I32(a), Value::I32(b)) => Ok(Value::I32(a.max(b))),
            (left, _) => Err(mismatch(Self::IDENTIFIER, &left)),
        }
    }

    fn return_type(&self, input_types: &[ValueType]) -> Option<ValueType> {
        widest_return_type(input_types, Self::ARITY)
    }
}

function_node! {
    /// The smaller of two numbers, in their widest type.
    Min, "MIN", 2, (left, right)
}

impl Node for Min {
    node_slots!();

    fn eval(&self, ctx: &EvalContext) -> Result<Value> {
        match eval_promoted_pair(self, ctx)? {
            (Value::F64(a), Value::F64(b)) => Ok(Value::F64(a.min(b))),
            (Value::F32(a), Value::F32(b)) => Ok(Value::F32(a.min(b))),
            (Value::I64(a), Value::I64(b)) => Ok(Value::I64(a.min(b))),
            (Value::I32(a), Value::I32(b)) => Ok(Value::I32(a.min(b))),
            (left, _) => Err(mismatch(Self::IDENTIFIER, &left)),
        }
    }

    fn return_type(&self, input_types: &[ValueType]) -> Option<ValueType> {
        widest_return_type(input_types, Self::ARITY)
    }
}
