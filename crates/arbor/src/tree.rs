//! Whole-tree utilities built on the one-level node contract

use std::sync::Arc;

use crate::node::{Node, NodeRef};
use crate::types::ValueType;

/// Number of nodes in the tree, counting unbound slots as nothing.
pub fn length(node: &dyn Node) -> usize {
    1 + node
        .children()
        .iter()
        .flatten()
        .map(|child| length(child.as_ref()))
        .sum::<usize>()
}

/// Depth of the tree; a lone terminal has depth 0.
pub fn depth(node: &dyn Node) -> usize {
    node.children()
        .iter()
        .flatten()
        .map(|child| 1 + depth(child.as_ref()))
        .max()
        .unwrap_or(0)
}

/// Infer the type the whole tree produces.
///
/// Works leaves-up: each child's inferred type becomes part of its parent's
/// input tuple. Returns `None` if any slot is unbound or any node rejects
/// its inputs.
pub fn infer_type(node: &dyn Node) -> Option<ValueType> {
    let input_types = node
        .children()
        .iter()
        .map(|slot| slot.as_ref().and_then(|child| infer_type(child.as_ref())))
        .collect::<Option<Vec<_>>>()?;
    node.return_type(&input_types)
}

/// Deep copy of the function nodes of a tree.
///
/// Terminals are shared rather than copied, so a copied tree still reads
/// the same variable bindings as the original. Unbound slots stay unbound.
pub fn clone_tree(node: &NodeRef) -> NodeRef {
    if node.arity() == 0 {
        return Arc::clone(node);
    }

    let mut copy = node.new_instance();
    for (slot, original) in copy.children_mut().iter_mut().zip(node.children()) {
        *slot = original.as_ref().map(clone_tree);
    }
    Arc::from(copy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Add, And, Literal, Not, Tan, Value};

    fn lit(v: impl Into<Value>) -> NodeRef {
        Arc::new(Literal::new(v.into()))
    }

    #[test]
    fn test_length_and_depth() {
        let leaf = lit(1i32);
        assert_eq!(length(leaf.as_ref()), 1);
        assert_eq!(depth(leaf.as_ref()), 0);

        let tree = Add::new(lit(1i32), Arc::new(Tan::new(lit(2i32))));
        assert_eq!(length(&tree), 4);
        assert_eq!(depth(&tree), 2);
    }

    #[test]
    fn test_length_skips_unbound() {
        let mut tree = And::empty();
        tree.set_child(0, Some(lit(true))).unwrap();
        assert_eq!(length(&tree), 2);
        assert_eq!(depth(&tree), 1);
    }

    #[test]
    fn test_infer_type() {
        let tree = Add::new(lit(1i32), Arc::new(Tan::new(lit(2i32))));
        assert_eq!(infer_type(&tree), Some(ValueType::F64));

        let bad = And::new(lit(true), lit(1i32));
        assert_eq!(infer_type(&bad), None);

        let unbound = Not::empty();
        assert_eq!(infer_type(&unbound), None);
    }
}
