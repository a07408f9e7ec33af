//! Function library: the registry of node templates
//!
//! Tree-generation code picks operators from a library by identifier. The
//! library stores one empty template per operator, keeps them in
//! registration order and guarantees identifiers are unique.

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{EvalError, Result};
use crate::function::*;
use crate::node::{Node, NodeRef};
use crate::types::ValueType;

/// One empty instance of every built-in function.
fn builtins() -> Vec<Box<dyn Node>> {
    vec![
        // Boolean
        Box::new(And::empty()),
        Box::new(Or::empty()),
        Box::new(Not::empty()),
        Box::new(Xor::empty()),
        Box::new(Nand::empty()),
        Box::new(Nor::empty()),
        Box::new(Implies::empty()),
        // Arithmetic
        Box::new(Add::empty()),
        Box::new(Subtract::empty()),
        Box::new(Multiply::empty()),
        Box::new(ProtectedDivide::empty()),
        Box::new(Absolute::empty()),
        Box::new(Square::empty()),
        Box::new(SquareRoot::empty()),
        Box::new(Exp::empty()),
        Box::new(Ln::empty()),
        Box::new(Max::empty()),
        Box::new(Min::empty()),
        // Trigonometric
        Box::new(Sin::empty()),
        Box::new(Cos::empty()),
        Box::new(Tan::empty()),
        Box::new(ArcSin::empty()),
        Box::new(ArcCos::empty()),
        Box::new(ArcTan::empty()),
        Box::new(Sec::empty()),
        Box::new(Cosec::empty()),
        Box::new(Cot::empty()),
        // Comparison and control
        Box::new(GreaterThan::empty()),
        Box::new(LessThan::empty()),
        Box::new(If::empty()),
    ]
}

/// Registry of function-node templates keyed by identifier.
#[derive(Debug, Default)]
pub struct FunctionLibrary {
    templates: IndexMap<String, Box<dyn Node>>,
}

impl FunctionLibrary {
    /// Create a library with no functions.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a library with every built-in function.
    ///
    /// Fails with `DuplicateIdentifier` if two built-ins share a symbol.
    pub fn standard() -> Result<Self> {
        let mut library = Self::empty();
        library.load_standard()?;
        Ok(library)
    }

    /// Register every built-in function into this library.
    ///
    /// Fails on the first identifier that is already registered.
    pub fn load_standard(&mut self) -> Result<()> {
        for template in builtins() {
            self.register(template)?;
        }
        Ok(())
    }

    /// Add a template. Its child slots are ignored; `create` always hands
    /// out fresh empty instances.
    pub fn register(&mut self, template: Box<dyn Node>) -> Result<()> {
        let identifier = template.identifier().to_string();
        if self.templates.contains_key(&identifier) {
            return Err(EvalError::DuplicateIdentifier(identifier));
        }

        debug!(identifier = %identifier, arity = template.arity(), "function registered");
        self.templates.insert(identifier, template);
        Ok(())
    }

    /// Look up the template registered under `identifier`.
    pub fn get(&self, identifier: &str) -> Option<&dyn Node> {
        self.templates.get(identifier).map(|t| t.as_ref())
    }

    /// Check whether `identifier` is registered.
    pub fn contains(&self, identifier: &str) -> bool {
        self.templates.contains_key(identifier)
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if no functions are registered.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Registered identifiers in registration order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// A new empty node of the function named `identifier`.
    pub fn create(&self, identifier: &str) -> Result<Box<dyn Node>> {
        self.get(identifier)
            .map(|t| t.new_instance())
            .ok_or_else(|| EvalError::UnknownIdentifier(identifier.to_string()))
    }

    /// A new node of the function named `identifier` with `children` bound.
    ///
    /// Fails with `ArityMismatch` if the child count is wrong.
    pub fn build(&self, identifier: &str, children: Vec<Option<NodeRef>>) -> Result<Box<dyn Node>> {
        let mut node = self.create(identifier)?;
        if children.len() != node.arity() {
            return Err(EvalError::ArityMismatch {
                node: identifier.to_string(),
                expected: node.arity(),
                got: children.len(),
            });
        }

        for (index, child) in children.into_iter().enumerate() {
            node.set_child(index, child)?;
        }
        Ok(node)
    }

    /// Identifiers of every function that is well-typed for `input_types`.
    ///
    /// This is the search primitive for typed tree generation: given the
    /// types of candidate subtrees, which operators can combine them.
    pub fn candidates(&self, input_types: &[ValueType]) -> Vec<&str> {
        self.templates
            .iter()
            .filter(|(_, t)| t.return_type(input_types).is_some())
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Identifiers of every function producing `output` for `input_types`.
    pub fn candidates_returning(&self, input_types: &[ValueType], output: ValueType) -> Vec<&str> {
        self.templates
            .iter()
            .filter(|(_, t)| t.return_type(input_types) == Some(output))
            .map(|(id, _)| id.as_str())
            .collect()
    }
}
