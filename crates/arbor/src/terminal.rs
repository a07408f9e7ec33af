//! Terminal nodes: constants and externally bound variables
//!
//! Terminals have arity 0. Their `return_type` accepts only an empty input
//! tuple and reports the type of the value they produce.

use std::sync::{Arc, RwLock};

use crate::error::{EvalError, Result};
use crate::node::{Node, NodeRef};
use crate::types::ValueType;
use crate::value::Value;
use crate::EvalContext;

fn terminal_return_type(input_types: &[ValueType], ty: ValueType) -> Option<ValueType> {
    if input_types.is_empty() {
        Some(ty)
    } else {
        None
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Literal
// ═══════════════════════════════════════════════════════════════════════

/// A constant value.
///
/// Its identifier is the value's `Debug` form, which keeps the numeric type:
/// `1.0`, `1.0f32`, `1i64` and `1` are four different literals.
#[derive(Debug, Clone)]
pub struct Literal {
    value: Value,
    label: String,
}

impl Literal {
    /// Create a literal holding `value`.
    pub fn new(value: Value) -> Self {
        Self {
            label: format!("{:?}", value),
            value,
        }
    }

    /// The constant this literal evaluates to.
    pub fn value(&self) -> Value {
        self.value
    }
}

impl Node for Literal {
    fn identifier(&self) -> &str {
        &self.label
    }

    fn children(&self) -> &[Option<NodeRef>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Option<NodeRef>] {
        Default::default()
    }

    fn eval(&self, _ctx: &EvalContext) -> Result<Value> {
        Ok(self.value)
    }

    fn return_type(&self, input_types: &[ValueType]) -> Option<ValueType> {
        terminal_return_type(input_types, self.value.value_type())
    }

    fn new_instance(&self) -> Box<dyn Node> {
        Box::new(self.clone())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Variable
// ═══════════════════════════════════════════════════════════════════════

/// A named input whose value is rebound between evaluations.
///
/// Clones (and `new_instance` copies) share the same binding, so a caller
/// can keep one handle and update every occurrence in a tree at once, e.g.
/// once per fitness case. Evaluating before the first `set_value` fails with
/// `UnboundChild` at index 0.
#[derive(Debug, Clone)]
pub struct Variable {
    name: String,
    ty: ValueType,
    binding: Arc<RwLock<Option<Value>>>,
}

impl Variable {
    /// Create an unbound variable of declared type `ty`.
    pub fn new(name: impl Into<String>, ty: ValueType) -> Self {
        Self {
            name: name.into(),
            ty,
            binding: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a variable bound to `value`, declared with the value's type.
    pub fn with_value(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            ty: value.value_type(),
            binding: Arc::new(RwLock::new(Some(value))),
        }
    }

    /// The variable's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type.
    pub fn value_type(&self) -> ValueType {
        self.ty
    }

    /// Rebind the value. It must match the declared type.
    pub fn set_value(&self, value: Value) -> Result<()> {
        if value.value_type() != self.ty {
            return Err(EvalError::type_mismatch(&self.name, self.ty.name(), &value));
        }
        let mut slot = self
            .binding
            .write()
            .map_err(|_| EvalError::LockPoisoned(self.name.clone()))?;
        *slot = Some(value);
        Ok(())
    }

    /// The current value, if bound.
    pub fn value(&self) -> Result<Option<Value>> {
        let slot = self
            .binding
            .read()
            .map_err(|_| EvalError::LockPoisoned(self.name.clone()))?;
        Ok(*slot)
    }
}

impl Node for Variable {
    fn identifier(&self) -> &str {
        &self.name
    }

    fn children(&self) -> &[Option<NodeRef>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Option<NodeRef>] {
        Default::default()
    }

    fn eval(&self, _ctx: &EvalContext) -> Result<Value> {
        self.value()?.ok_or_else(|| EvalError::UnboundChild {
            node: self.name.clone(),
            index: 0,
        })
    }

    fn return_type(&self, input_types: &[ValueType]) -> Option<ValueType> {
        terminal_return_type(input_types, self.ty)
    }

    fn new_instance(&self) -> Box<dyn Node> {
        Box::new(self.clone())
    }
}
