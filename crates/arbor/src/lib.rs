//! # Arbor
//!
//! The expression-tree core of a genetic-programming toolkit.
//!
//! Candidate programs are trees of [`Node`]s: function nodes (AND, ADD,
//! TAN, IF, ...) with fixed-arity child slots, and terminals (literals and
//! variables) at the leaves. The crate provides two operations over them:
//!
//! - **Evaluation**: [`Node::eval`] walks the tree depth-first, forcing only
//!   the children each operator needs (AND skips its right operand when the
//!   left is false, IF evaluates one branch).
//! - **Return-type inference**: [`Node::return_type`] decides from a tuple of
//!   child types alone whether a composition is well-typed, returning `None`
//!   when it is not. [`tree::infer_type`] applies it leaves-up.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use arbor::{And, EvalContext, Literal, Node, Value, ValueType, Variable};
//!
//! let x = Arc::new(Variable::new("x", ValueType::Bool));
//! let tree = And::new(x.clone(), Arc::new(Literal::new(Value::Bool(true))));
//!
//! assert_eq!(tree.return_type(&[ValueType::Bool, ValueType::Bool]), Some(ValueType::Bool));
//!
//! x.set_value(Value::Bool(false)).unwrap();
//! assert_eq!(tree.eval(&EvalContext::new()).unwrap(), Value::Bool(false));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod function;
pub mod library;
pub mod node;
pub mod numeric;
pub mod terminal;
pub mod tree;
pub mod types;
pub mod value;

// Re-export main types
pub use context::EvalContext;
pub use error::{EvalError, Result};
pub use function::*;
pub use library::FunctionLibrary;
pub use node::{Children, Node, NodeRef};
pub use terminal::{Literal, Variable};
pub use types::ValueType;
pub use value::Value;

/// Arbor version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
