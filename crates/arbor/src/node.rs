//! The node contract shared by every tree element
//!
//! A tree is built from `Arc<dyn Node>` references so subtrees can be shared
//! and rebound by tree-editing code. Each node owns a fixed-length slice of
//! optional child slots; the length is the node's arity and never changes
//! after construction.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{EvalError, Result};
use crate::types::ValueType;
use crate::value::Value;
use crate::EvalContext;

/// Shared reference to a node in a tree.
pub type NodeRef = Arc<dyn Node>;

/// Capability set every tree element implements.
///
/// Evaluation takes `&self` and never rebinds children, so one tree can be
/// evaluated from several threads at once. Rebinding needs `&mut self`,
/// which keeps editing and evaluation apart.
pub trait Node: fmt::Debug + Send + Sync {
    /// Operator symbol (or terminal name) of this node.
    fn identifier(&self) -> &str;

    /// Child slots in order. The length is the node's arity.
    fn children(&self) -> &[Option<NodeRef>];

    /// Mutable child slots, for rebinding.
    fn children_mut(&mut self) -> &mut [Option<NodeRef>];

    /// Evaluate this node, forcing only the children its semantics require.
    fn eval(&self, ctx: &EvalContext) -> Result<Value>;

    /// Infer the type this node produces for children of `input_types`.
    ///
    /// Pure and non-recursive: the actual children are never inspected.
    /// Returns `None` when the composition is not well-typed.
    fn return_type(&self, input_types: &[ValueType]) -> Option<ValueType>;

    /// Fresh node of the same variant with every child slot unbound.
    fn new_instance(&self) -> Box<dyn Node>;

    /// Number of child slots.
    fn arity(&self) -> usize {
        self.children().len()
    }

    /// The child bound at `index`, if any.
    fn child(&self, index: usize) -> Option<&NodeRef> {
        self.children().get(index).and_then(Option::as_ref)
    }

    /// Bind (or unbind with `None`) the slot at `index`, returning the
    /// previous occupant.
    fn set_child(&mut self, index: usize, child: Option<NodeRef>) -> Result<Option<NodeRef>> {
        let arity = self.arity();
        if index >= arity {
            return Err(EvalError::ChildIndexOutOfBounds {
                node: self.identifier().to_string(),
                index,
                arity,
            });
        }
        Ok(std::mem::replace(&mut self.children_mut()[index], child))
    }

    /// Check whether every child slot is bound.
    fn is_bound(&self) -> bool {
        self.children().iter().all(Option::is_some)
    }

    /// Evaluate the child at `index`.
    ///
    /// Fails with `UnboundChild` if the slot is empty and with `Interrupted`
    /// if the context's interrupt flag is set.
    fn eval_child(&self, index: usize, ctx: &EvalContext) -> Result<Value> {
        if ctx.is_interrupted() {
            debug!(node = %self.identifier(), index, "evaluation interrupted");
            return Err(EvalError::Interrupted);
        }

        let child = self.child(index).ok_or_else(|| EvalError::UnboundChild {
            node: self.identifier().to_string(),
            index,
        })?;

        if ctx.trace {
            trace!(node = %self.identifier(), index, child = %child.identifier(), "evaluating child");
        }

        child.eval(ctx)
    }

    /// Evaluate the child at `index` and require a boolean result.
    fn eval_bool_child(&self, index: usize, ctx: &EvalContext) -> Result<bool> {
        let value = self.eval_child(index, ctx)?;
        value
            .as_bool()
            .ok_or_else(|| EvalError::type_mismatch(self.identifier(), "bool", &value))
    }

    /// Evaluate the child at `index` and require a numeric result.
    fn eval_numeric_child(&self, index: usize, ctx: &EvalContext) -> Result<Value> {
        let value = self.eval_child(index, ctx)?;
        if value.is_numeric() {
            Ok(value)
        } else {
            Err(EvalError::type_mismatch(
                self.identifier(),
                "a numeric type",
                &value,
            ))
        }
    }
}

/// Prefix rendering: `IDENT` for terminals, `IDENT(child child)` otherwise.
/// Unbound slots render as `_`.
impl fmt::Display for dyn Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())?;
        if self.arity() == 0 {
            return Ok(());
        }

        write!(f, "(")?;
        for (i, slot) in self.children().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match slot {
                Some(child) => write!(f, "{}", child)?,
                None => write!(f, "_")?,
            }
        }
        write!(f, ")")
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Fixed-Arity Child Storage
// ═══════════════════════════════════════════════════════════════════════

/// Fixed-length child slots for a node of arity `N`.
#[derive(Debug, Clone)]
pub struct Children<const N: usize> {
    slots: [Option<NodeRef>; N],
}

impl<const N: usize> Children<N> {
    /// Slots taken as given, bound or not.
    pub fn new(slots: [Option<NodeRef>; N]) -> Self {
        Self { slots }
    }

    /// Every slot bound.
    pub fn bound(nodes: [NodeRef; N]) -> Self {
        Self {
            slots: nodes.map(Some),
        }
    }

    /// Every slot unbound.
    pub fn empty() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Slots from a runtime-length list, failing if its length is not `N`.
    pub fn from_vec(node: &str, children: Vec<Option<NodeRef>>) -> Result<Self> {
        let got = children.len();
        let slots: [Option<NodeRef>; N] =
            children
                .try_into()
                .map_err(|_| EvalError::ArityMismatch {
                    node: node.to_string(),
                    expected: N,
                    got,
                })?;
        Ok(Self { slots })
    }

    /// View the slots.
    pub fn as_slice(&self) -> &[Option<NodeRef>] {
        &self.slots
    }

    /// Mutable view of the slots.
    pub fn as_mut_slice(&mut self) -> &mut [Option<NodeRef>] {
        &mut self.slots
    }
}

impl<const N: usize> Default for Children<N> {
    fn default() -> Self {
        Self::empty()
    }
}
