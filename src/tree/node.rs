//! Arena nodes for [`BinaryTree`](super::BinaryTree).
//!
//! Each node owns its children through [`NodeId`] handles into the tree's
//! arena and keeps a non-owning handle back to its parent. The arena itself
//! only hands out slots; keeping parent and child links consistent is the
//! job of the map.

use crate::slot::SlotTable;

// =============================================================================
// Handles
// =============================================================================

/// Handle to a node slot in a [`NodeArena`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct NodeId(usize);

/// One of the two child slots of a node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Side {
    Left,
    Right,
}

// =============================================================================
// Node Definition
// =============================================================================

/// A key-value node of the binary tree.
///
/// The key never changes after creation; the value is replaced in place.
#[derive(Clone, Debug)]
pub(crate) struct Node<K, V> {
    key: K,
    pub(crate) value: V,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    /// Creates a childless node hanging off `parent`.
    pub(crate) const fn new(key: K, value: V, parent: Option<NodeId>) -> Self {
        Self {
            key,
            value,
            parent,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) const fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) const fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Consumes the node, returning its key and value.
    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}

// =============================================================================
// Arena
// =============================================================================

/// Slot table holding every live node of one tree, addressed by [`NodeId`].
#[derive(Clone, Debug)]
pub(crate) struct NodeArena<K, V> {
    nodes: SlotTable<Node<K, V>>,
}

impl<K, V> NodeArena<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            nodes: SlotTable::new(),
        }
    }

    pub(crate) fn allocate(&mut self, node: Node<K, V>) -> NodeId {
        NodeId(self.nodes.allocate(node))
    }

    /// Takes the node out of the arena; its handle becomes dangling.
    pub(crate) fn release(&mut self, id: NodeId) -> Node<K, V> {
        self.nodes.release(id.0)
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }
}

impl<K, V> std::ops::Index<NodeId> for NodeArena<K, V> {
    type Output = Node<K, V>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

impl<K, V> std::ops::IndexMut<NodeId> for NodeArena<K, V> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id.0]
    }
}
