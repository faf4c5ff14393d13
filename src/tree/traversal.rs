//! Depth-first traversal orders for [`BinaryTree`](super::BinaryTree).
//!
//! The three classic orders differ only in when the current node is
//! visited relative to the recursion into its children, so they share a
//! single recursive walk parameterized by [`TraversalOrder`].
//!
//! # Examples
//!
//! ```rust
//! use arborlist::tree::{BinaryTree, TraversalOrder};
//!
//! let tree: BinaryTree<i32, char> = [(2, 'b'), (1, 'a'), (3, 'c')].into_iter().collect();
//!
//! let mut visited = Vec::new();
//! tree.traverse(TraversalOrder::PostOrder, |key, _| visited.push(*key));
//! assert_eq!(visited, vec![1, 3, 2]);
//! ```

use std::fmt;

use super::node::{NodeArena, NodeId};

/// The order in which a traversal visits the nodes of a tree.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TraversalOrder {
    /// Visit the node, then its left subtree, then its right subtree.
    PreOrder,
    /// Visit the left subtree, then the node, then the right subtree.
    ///
    /// Yields entries in ascending key order.
    InOrder,
    /// Visit the left subtree, then the right subtree, then the node.
    PostOrder,
}

impl TraversalOrder {
    /// Every traversal order, in declaration order.
    pub const ALL: [Self; 3] = [Self::PreOrder, Self::InOrder, Self::PostOrder];

    /// Walks the subtree rooted at `start`, calling `visitor` once per node.
    pub(crate) fn walk<K, V, F>(self, arena: &NodeArena<K, V>, start: NodeId, visitor: &mut F)
    where
        F: FnMut(&K, &V),
    {
        let node = &arena[start];

        if self == Self::PreOrder {
            visitor(node.key(), &node.value);
        }
        if let Some(left) = node.left {
            self.walk(arena, left, visitor);
        }
        if self == Self::InOrder {
            visitor(node.key(), &node.value);
        }
        if let Some(right) = node.right {
            self.walk(arena, right, visitor);
        }
        if self == Self::PostOrder {
            visitor(node.key(), &node.value);
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PreOrder => "pre-order",
            Self::InOrder => "in-order",
            Self::PostOrder => "post-order",
        };
        formatter.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::node::Node;
    use rstest::{fixture, rstest};

    //       4
    //     /   \
    //    2     6
    //   / \     \
    //  1   3     7
    #[fixture]
    fn arena() -> (NodeArena<i32, ()>, NodeId) {
        let mut arena = NodeArena::new();
        let root = arena.allocate(Node::new(4, (), None));
        let two = arena.allocate(Node::new(2, (), Some(root)));
        let six = arena.allocate(Node::new(6, (), Some(root)));
        let one = arena.allocate(Node::new(1, (), Some(two)));
        let three = arena.allocate(Node::new(3, (), Some(two)));
        let seven = arena.allocate(Node::new(7, (), Some(six)));
        arena[root].left = Some(two);
        arena[root].right = Some(six);
        arena[two].left = Some(one);
        arena[two].right = Some(three);
        arena[six].right = Some(seven);
        (arena, root)
    }

    #[rstest]
    #[case(TraversalOrder::PreOrder, vec![4, 2, 1, 3, 6, 7])]
    #[case(TraversalOrder::InOrder, vec![1, 2, 3, 4, 6, 7])]
    #[case(TraversalOrder::PostOrder, vec![1, 3, 2, 7, 6, 4])]
    fn test_walk_order(
        arena: (NodeArena<i32, ()>, NodeId),
        #[case] order: TraversalOrder,
        #[case] expected: Vec<i32>,
    ) {
        let (arena, root) = arena;
        let mut visited = Vec::new();
        order.walk(&arena, root, &mut |key, ()| visited.push(*key));
        assert_eq!(visited, expected);
    }

    #[rstest]
    fn test_walk_single_node_visits_once() {
        let mut arena = NodeArena::new();
        let root = arena.allocate(Node::new("only", 1, None));
        for order in TraversalOrder::ALL {
            let mut count = 0;
            order.walk(&arena, root, &mut |_, value| count += value);
            assert_eq!(count, 1, "{order}");
        }
    }

    #[rstest]
    #[case(TraversalOrder::PreOrder, "pre-order")]
    #[case(TraversalOrder::InOrder, "in-order")]
    #[case(TraversalOrder::PostOrder, "post-order")]
    fn test_display(#[case] order: TraversalOrder, #[case] expected: &str) {
        assert_eq!(order.to_string(), expected);
    }
}
