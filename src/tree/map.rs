//! Ordered map based on an unbalanced binary search tree.
//!
//! This module provides [`BinaryTree`], a mutable ordered map whose shape is
//! a direct consequence of insertion order. No rebalancing is performed.
//!
//! - O(h) get, set, insert and remove, where h is the tree height
//! - O(n) traversal in pre-, in- or post-order
//! - O(1) len and `is_empty`
//!
//! The height h is logarithmic for random insertion orders and linear in
//! the worst case (for example, keys inserted in sorted order).
//!
//! # Examples
//!
//! ```rust
//! use arborlist::tree::BinaryTree;
//!
//! let mut tree = BinaryTree::new();
//! tree.insert("E", 5);
//! tree.insert("B", 2);
//! tree.insert("J", 10);
//!
//! assert_eq!(tree.get("B"), Ok(&2));
//! assert_eq!(tree.remove("E"), Ok(5));
//! assert_eq!(tree.to_string(), "[2, 10]");
//! ```
//!
//! # Internal Structure
//!
//! Nodes live in an arena owned by the tree and refer to each other through
//! handles. The tree maintains the following invariants:
//! 1. Every node except the root has a parent whose left or right link
//!    points back to it
//! 2. Keys in a node's left subtree are strictly less than its key, keys in
//!    its right subtree strictly greater
//! 3. The root is absent if and only if the length is zero

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::error::KeyNotFoundError;
use super::node::{Node, NodeArena, NodeId, Side};
use super::traversal::TraversalOrder;
use crate::sequence::LinkedList;

/// Inline capacity of the explicit stack used by the iterators.
///
/// Trees up to this height iterate without heap allocation.
const STACK_INLINE_CAPACITY: usize = 16;

type NodeStack = SmallVec<[NodeId; STACK_INLINE_CAPACITY]>;

// =============================================================================
// BinaryTree Definition
// =============================================================================

/// An ordered map backed by an unbalanced binary search tree.
///
/// Keys must implement `Ord`. Entries are kept in ascending key order, which
/// is the order produced by an in-order traversal, by [`iter`](Self::iter),
/// by [`to_list`](Self::to_list) and by the `Display` rendering.
///
/// Nullable keys are expressed as `Option<T>`: `None` orders before every
/// present key and two `None` keys are equal.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `new`          | O(1)       |
/// | `get`          | O(h)       |
/// | `set`          | O(h)       |
/// | `insert`       | O(h)       |
/// | `remove`       | O(h)       |
/// | `traverse`     | O(n)       |
/// | `len`          | O(1)       |
///
/// # Examples
///
/// ```rust
/// use arborlist::tree::{BinaryTree, TraversalOrder};
///
/// let mut tree = BinaryTree::new();
/// assert_eq!(tree.insert(2, "two"), None);
/// assert_eq!(tree.insert(1, "one"), None);
/// assert_eq!(tree.insert(2, "TWO"), Some("two"));
/// assert_eq!(tree.len(), 2);
///
/// let mut keys = Vec::new();
/// tree.traverse(TraversalOrder::InOrder, |key, _| keys.push(*key));
/// assert_eq!(keys, vec![1, 2]);
/// ```
#[derive(Clone)]
pub struct BinaryTree<K, V> {
    /// Storage for every live node
    arena: NodeArena<K, V>,
    /// Root node of the tree
    root: Option<NodeId>,
    /// Number of entries
    length: usize,
}

impl<K, V> BinaryTree<K, V> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arborlist::tree::BinaryTree;
    ///
    /// let tree: BinaryTree<i32, String> = BinaryTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            root: None,
            length: 0,
        }
    }

    /// Returns the number of key-value mappings in the tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree contains no mappings.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Removes every mapping from the tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arborlist::tree::BinaryTree;
    ///
    /// let mut tree: BinaryTree<i32, i32> = (0..10).map(|key| (key, key)).collect();
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        debug!(discarded = self.length, "clearing binary tree");
        self.arena.clear();
        self.root = None;
        self.length = 0;
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// An empty tree has height 0 and a lone root has height 1. Because the
    /// tree never rebalances, inserting keys in sorted order yields a height
    /// equal to the length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arborlist::tree::BinaryTree;
    ///
    /// let sorted: BinaryTree<i32, ()> = (0..5).map(|key| (key, ())).collect();
    /// assert_eq!(sorted.height(), 5);
    ///
    /// let balanced: BinaryTree<i32, ()> = [2, 1, 3].into_iter().map(|key| (key, ())).collect();
    /// assert_eq!(balanced.height(), 2);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        self.subtree_height(self.root)
    }

    fn subtree_height(&self, node: Option<NodeId>) -> usize {
        node.map_or(0, |id| {
            let node = &self.arena[id];
            1 + self
                .subtree_height(node.left)
                .max(self.subtree_height(node.right))
        })
    }

    /// Has the given traversal order walk the tree, calling `visitor` with
    /// the key and value of each node.
    ///
    /// Does nothing if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arborlist::tree::{BinaryTree, TraversalOrder};
    ///
    /// let tree: BinaryTree<i32, &str> =
    ///     [(2, "two"), (1, "one"), (3, "three")].into_iter().collect();
    ///
    /// let mut visited = Vec::new();
    /// tree.traverse(TraversalOrder::PreOrder, |_, value| visited.push(*value));
    /// assert_eq!(visited, vec!["two", "one", "three"]);
    /// ```
    pub fn traverse<F>(&self, order: TraversalOrder, mut visitor: F)
    where
        F: FnMut(&K, &V),
    {
        if let Some(root) = self.root {
            order.walk(&self.arena, root, &mut visitor);
        }
    }

    /// Returns an iterator over the entries in ascending key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arborlist::tree::BinaryTree;
    ///
    /// let tree: BinaryTree<i32, char> = [(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();
    /// let entries: Vec<(&i32, &char)> = tree.iter().collect();
    /// assert_eq!(entries, vec![(&1, &'a'), (&2, &'b'), (&3, &'c')]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> BinaryTreeIterator<'_, K, V> {
        let mut stack = NodeStack::new();
        push_left_spine(&self.arena, &mut stack, self.root);
        BinaryTreeIterator {
            arena: &self.arena,
            stack,
            remaining: self.length,
        }
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Returns the entry with the smallest key, if any.
    #[must_use]
    pub fn min(&self) -> Option<(&K, &V)> {
        self.extreme(Side::Left)
    }

    /// Returns the entry with the largest key, if any.
    #[must_use]
    pub fn max(&self) -> Option<(&K, &V)> {
        self.extreme(Side::Right)
    }

    fn extreme(&self, side: Side) -> Option<(&K, &V)> {
        let mut current = self.root?;
        while let Some(next) = self.arena[current].child(side) {
            current = next;
        }
        let node = &self.arena[current];
        Some((node.key(), &node.value))
    }

    /// Materializes the values, in ascending key order, as a new
    /// [`LinkedList`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arborlist::tree::BinaryTree;
    ///
    /// let tree: BinaryTree<i32, &str> = [(2, "b"), (1, "a")].into_iter().collect();
    /// let list = tree.to_list();
    /// assert_eq!(list.front(), Some(&"a"));
    /// assert_eq!(list.back(), Some(&"b"));
    /// ```
    #[must_use]
    pub fn to_list(&self) -> LinkedList<V>
    where
        V: Clone,
    {
        let mut list = LinkedList::new();
        self.traverse(TraversalOrder::InOrder, |_, value| {
            list.push_back(value.clone());
        });
        list
    }

    // =========================================================================
    // Structural helpers
    // =========================================================================

    /// Puts `child` into the given slot of `parent` and points the child's
    /// back-reference at `parent`.
    fn set_child(&mut self, parent: NodeId, side: Side, child: Option<NodeId>) {
        *self.arena[parent].child_mut(side) = child;
        if let Some(child) = child {
            self.arena[child].parent = Some(parent);
        }
    }

    /// Returns the slot of `parent` that holds `child`.
    fn side_of(&self, parent: NodeId, child: NodeId) -> Side {
        if self.arena[parent].left == Some(child) {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Links `replacement` into the position currently held by `node`:
    /// the matching child slot of its parent, or the root.
    fn replace_in_parent(&mut self, node: NodeId, replacement: Option<NodeId>) {
        if let Some(parent) = self.arena[node].parent {
            let side = self.side_of(parent, node);
            self.set_child(parent, side, replacement);
        } else {
            self.root = replacement;
            if let Some(promoted) = replacement {
                self.arena[promoted].parent = None;
            }
        }
    }

    /// Moves the in-order successor of `node`, the leftmost node below its
    /// `right` child, into its position. Afterwards nothing refers to `node`.
    fn promote_successor(&mut self, node: NodeId, left: NodeId, right: NodeId) {
        let mut successor = right;
        let mut depth = 1;
        while let Some(next) = self.arena[successor].left {
            successor = next;
            depth += 1;
        }
        debug!(depth, "promoting in-order successor");

        if depth > 1 {
            if let Some(successor_parent) = self.arena[successor].parent {
                let orphan = self.arena[successor].right;
                self.set_child(successor_parent, Side::Left, orphan);
            }
            self.set_child(successor, Side::Right, Some(right));
        }
        self.set_child(successor, Side::Left, Some(left));
        self.replace_in_parent(node, Some(successor));
    }
}

impl<K: Ord, V> BinaryTree<K, V> {
    /// Finds the node holding `key` by descending from the root.
    fn find_node<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.arena[id];
            current = match key.cmp(node.key().borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// Adds a key-value mapping to the tree.
    ///
    /// If the key already identifies a mapping, its value is replaced in
    /// place and the previous value is returned; the length is unchanged.
    /// Otherwise a new leaf is created and `None` is returned.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arborlist::tree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// assert_eq!(tree.insert("key", 1), None);
    /// assert_eq!(tree.insert("key", 2), Some(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let Some(mut current) = self.root else {
            self.root = Some(self.arena.allocate(Node::new(key, value, None)));
            self.length += 1;
            trace!(length = self.length, "planted root");
            return None;
        };

        loop {
            let side = match key.cmp(self.arena[current].key()) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    trace!("replacing value of existing key");
                    return Some(std::mem::replace(&mut self.arena[current].value, value));
                }
            };

            match self.arena[current].child(side) {
                Some(child) => current = child,
                None => {
                    let leaf = self.arena.allocate(Node::new(key, value, Some(current)));
                    *self.arena[current].child_mut(side) = Some(leaf);
                    self.length += 1;
                    trace!(length = self.length, ?side, "grew leaf");
                    return None;
                }
            }
        }
    }

    /// Returns `true` if the tree contains a mapping for `key`.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).is_some()
    }

    /// Returns a reference to the value associated with `key`.
    ///
    /// The key may be any borrowed form of the tree's key type, but the
    /// ordering on the borrowed form must match the ordering on the key type.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFoundError`] if the tree has no mapping for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arborlist::tree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.insert("hello".to_string(), 42);
    ///
    /// // Can use &str to look up String keys
    /// assert_eq!(tree.get("hello"), Ok(&42));
    /// assert!(tree.get("world").is_err());
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Result<&V, KeyNotFoundError<Q::Owned>>
    where
        K: Borrow<Q>,
        Q: Ord + ToOwned + ?Sized,
    {
        self.find_node(key)
            .map(|id| &self.arena[id].value)
            .ok_or_else(|| KeyNotFoundError::new(key.to_owned()))
    }

    /// Returns a mutable reference to the value associated with `key`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFoundError`] if the tree has no mapping for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, KeyNotFoundError<Q::Owned>>
    where
        K: Borrow<Q>,
        Q: Ord + ToOwned + ?Sized,
    {
        match self.find_node(key) {
            Some(id) => Ok(&mut self.arena[id].value),
            None => Err(KeyNotFoundError::new(key.to_owned())),
        }
    }

    /// Replaces the value associated with `key`, returning the previous one.
    ///
    /// Unlike [`insert`](Self::insert), `set` never creates a mapping.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFoundError`] if the tree has no mapping for `key`;
    /// the tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arborlist::tree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.insert(1, "one");
    /// assert_eq!(tree.set(&1, "ONE"), Ok("one"));
    /// assert!(tree.set(&2, "two").is_err());
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn set<Q>(&mut self, key: &Q, value: V) -> Result<V, KeyNotFoundError<Q::Owned>>
    where
        K: Borrow<Q>,
        Q: Ord + ToOwned + ?Sized,
    {
        self.get_mut(key)
            .map(|slot| std::mem::replace(slot, value))
    }

    /// Removes the mapping for `key` and returns its value.
    ///
    /// The node is unlinked according to how many children it has:
    ///
    /// - none: it is detached from its parent (or the tree becomes empty)
    /// - one: that child takes its place
    /// - two: its in-order successor, the leftmost node of its right
    ///   subtree, takes its place
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFoundError`] if the tree has no mapping for `key`;
    /// the tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arborlist::tree::BinaryTree;
    ///
    /// let mut tree: BinaryTree<char, char> =
    ///     "EJDBGFAHCI".chars().map(|key| (key, key)).collect();
    ///
    /// assert_eq!(tree.remove(&'E'), Ok('E'));
    /// assert_eq!(tree.to_string(), "[A, B, C, D, F, G, H, I, J]");
    /// assert!(tree.get(&'E').is_err());
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V, KeyNotFoundError<Q::Owned>>
    where
        K: Borrow<Q>,
        Q: Ord + ToOwned + ?Sized,
    {
        let node = self
            .find_node(key)
            .ok_or_else(|| KeyNotFoundError::new(key.to_owned()))?;

        match (self.arena[node].left, self.arena[node].right) {
            (None, None) => {
                trace!(case = "leaf", "removing node");
                self.replace_in_parent(node, None);
            }
            (Some(child), None) | (None, Some(child)) => {
                trace!(case = "single_child", "removing node");
                self.replace_in_parent(node, Some(child));
            }
            (Some(left), Some(right)) => {
                trace!(case = "two_children", "removing node");
                self.promote_successor(node, left, right);
            }
        }

        self.length -= 1;
        let (_, value) = self.arena.release(node).into_entry();
        Ok(value)
    }
}

/// Pushes `start` and every left descendant below it onto `stack`.
fn push_left_spine<K, V>(arena: &NodeArena<K, V>, stack: &mut NodeStack, start: Option<NodeId>) {
    let mut current = start;
    while let Some(id) = current {
        stack.push(id);
        current = arena[id].left;
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An in-order iterator over the entries of a [`BinaryTree`].
pub struct BinaryTreeIterator<'a, K, V> {
    arena: &'a NodeArena<K, V>,
    stack: NodeStack,
    remaining: usize,
}

impl<'a, K, V> Iterator for BinaryTreeIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let arena = self.arena;
        let node = &arena[id];
        push_left_spine(arena, &mut self.stack, node.right);
        self.remaining -= 1;
        Some((node.key(), &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for BinaryTreeIterator<'_, K, V> {}

/// An owning in-order iterator over the entries of a [`BinaryTree`].
pub struct BinaryTreeIntoIterator<K, V> {
    arena: NodeArena<K, V>,
    stack: NodeStack,
    remaining: usize,
}

impl<K, V> Iterator for BinaryTreeIntoIterator<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.arena.release(id);
        push_left_spine(&self.arena, &mut self.stack, node.right);
        self.remaining -= 1;
        Some(node.into_entry())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for BinaryTreeIntoIterator<K, V> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for BinaryTree<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BinaryTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for BinaryTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> IntoIterator for BinaryTree<K, V> {
    type Item = (K, V);
    type IntoIter = BinaryTreeIntoIterator<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let mut stack = NodeStack::new();
        push_left_spine(&self.arena, &mut stack, self.root);
        BinaryTreeIntoIterator {
            arena: self.arena,
            stack,
            remaining: self.length,
        }
    }
}

impl<'a, K, V> IntoIterator for &'a BinaryTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = BinaryTreeIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two trees are equal when they hold the same mappings, whatever their
/// shape.
impl<K: PartialEq, V: PartialEq> PartialEq for BinaryTree<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for BinaryTree<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BinaryTree<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

/// Renders the values in ascending key order as `[v1, v2, ..., vn]`.
///
/// Meant for diagnostics, not as an interchange format.
impl<K, V: fmt::Display> fmt::Display for BinaryTree<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("[")?;
        let mut result = Ok(());
        let mut first = true;
        self.traverse(TraversalOrder::InOrder, |_, value| {
            if result.is_err() {
                return;
            }
            result = if first {
                first = false;
                write!(formatter, "{value}")
            } else {
                write!(formatter, ", {value}")
            };
        });
        result?;
        formatter.write_str("]")
    }
}
