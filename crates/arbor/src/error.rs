//! Error types for node evaluation and tree assembly

use thiserror::Error;

use crate::value::Value;

/// Contract violations raised while assembling or evaluating a tree.
///
/// An invalid type composition is not an error: `Node::return_type` reports
/// it with `None`. Everything here means the caller handed the core a tree
/// it should have rejected first, so the current evaluation is aborted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Wrong number of children supplied to a fixed-arity node
    #[error("{node} expects {expected} children, got {got}")]
    ArityMismatch {
        /// Identifier of the node being constructed
        node: String,
        /// The node's fixed arity
        expected: usize,
        /// Number of children supplied
        got: usize,
    },

    /// A required child slot was still empty at evaluation time
    #[error("{node} has no child bound at position {index}")]
    UnboundChild {
        /// Identifier of the node being evaluated
        node: String,
        /// The empty slot
        index: usize,
    },

    /// Child slot index outside `[0, arity)`
    #[error("{node} has arity {arity}, child index {index} is out of bounds")]
    ChildIndexOutOfBounds {
        /// Identifier of the node
        node: String,
        /// Requested index
        index: usize,
        /// The node's fixed arity
        arity: usize,
    },

    /// A child produced a value of a type the node cannot consume
    #[error("{node}: expected {expected}, got {got}")]
    TypeMismatch {
        /// Identifier of the node that received the value
        node: String,
        /// Description of what the node accepts
        expected: String,
        /// Runtime type actually received
        got: String,
    },

    /// Numeric conversion was given a non-numeric value
    #[error("Expected a numeric value, got {got}")]
    NotNumeric {
        /// Runtime type actually received
        got: String,
    },

    /// No function with this identifier is registered
    #[error("Unknown function identifier: {0}")]
    UnknownIdentifier(String),

    /// A function with this identifier is already registered
    #[error("Duplicate function identifier: {0}")]
    DuplicateIdentifier(String),

    /// A shared variable binding was poisoned by a panicking writer
    #[error("Variable binding poisoned: {0}")]
    LockPoisoned(String),

    /// Evaluation was interrupted through the context flag
    #[error("Evaluation interrupted")]
    Interrupted,
}

impl EvalError {
    /// Build a `TypeMismatch` for a value received by `node`.
    pub fn type_mismatch(node: &str, expected: impl Into<String>, got: &Value) -> Self {
        EvalError::TypeMismatch {
            node: node.to_string(),
            expected: expected.into(),
            got: type_name(got).to_string(),
        }
    }
}

/// Result type alias for evaluation and assembly operations
pub type Result<T> = std::result::Result<T, EvalError>;

/// Get the runtime type name of a value.
pub fn type_name(value: &Value) -> &'static str {
    value.value_type().name()
}
