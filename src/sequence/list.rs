//! Doubly-linked list.
//!
//! This module provides [`LinkedList`], a mutable sequence whose nodes link
//! to both their predecessor and their successor.
//!
//! - O(1) `push_front`, `push_back`, `pop_front`, `pop_back`
//! - O(n) indexed access, walking from whichever end is nearer
//! - O(1) len and `is_empty`
//!
//! # Examples
//!
//! ```rust
//! use arborlist::sequence::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.push_back(2);
//! list.push_back(3);
//! list.push_front(1);
//!
//! assert_eq!(list.to_string(), "[1, 2, 3]");
//! assert_eq!(list.pop_back(), Some(3));
//! ```
//!
//! # Internal Structure
//!
//! Nodes are stored in a slot table and refer to their neighbors by slot
//! index. Every relink goes through a single helper that sets the `next`
//! link of one node and the `previous` link of the other together, so
//! `a.next == b` holds exactly when `b.previous == a`.

use std::fmt;
use std::iter::FromIterator;

use super::error::IndexOutOfBoundsError;
use crate::slot::SlotTable;

// =============================================================================
// Node Definition
// =============================================================================

#[derive(Clone, Debug)]
struct ListNode<T> {
    item: T,
    previous: Option<usize>,
    next: Option<usize>,
}

// =============================================================================
// LinkedList Definition
// =============================================================================

/// A doubly-linked list.
///
/// # Time Complexity
///
/// | Operation                | Complexity |
/// |--------------------------|------------|
/// | `push_front`/`push_back` | O(1)       |
/// | `pop_front`/`pop_back`   | O(1)       |
/// | `front`/`back`           | O(1)       |
/// | `get`/`set`              | O(n)       |
/// | `insert`/`remove`        | O(n)       |
/// | `index_of`               | O(n)       |
/// | `len`                    | O(1)       |
///
/// # Examples
///
/// ```rust
/// use arborlist::sequence::LinkedList;
///
/// let mut list = LinkedList::from_slice(&["a", "b", "d"]);
/// list.insert(2, "c").unwrap();
/// assert_eq!(list.get(2), Some(&"c"));
/// assert_eq!(list.index_of(&"d"), Some(3));
/// ```
#[derive(Clone)]
pub struct LinkedList<T> {
    nodes: SlotTable<ListNode<T>>,
    first: Option<usize>,
    last: Option<usize>,
    length: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: SlotTable::new(),
            first: None,
            last: None,
            length: 0,
        }
    }

    /// Returns the number of items in the list.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list contains no items.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Removes every item from the list.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.first = None;
        self.last = None;
        self.length = 0;
    }

    // =========================================================================
    // Linking
    // =========================================================================

    fn allocate(&mut self, item: T) -> usize {
        self.nodes.allocate(ListNode {
            item,
            previous: None,
            next: None,
        })
    }

    /// Makes `next` follow `previous`.
    ///
    /// A missing `previous` makes `next` the first node; a missing `next`
    /// makes `previous` the last node.
    fn link(&mut self, previous: Option<usize>, next: Option<usize>) {
        match previous {
            Some(id) => self.nodes[id].next = next,
            None => self.first = next,
        }
        match next {
            Some(id) => self.nodes[id].previous = previous,
            None => self.last = previous,
        }
    }

    /// Finds the node at `index`, walking from the nearer end.
    fn node_at(&self, index: usize) -> Option<usize> {
        if index >= self.length {
            return None;
        }
        if index < self.length / 2 {
            let mut current = self.first?;
            for _ in 0..index {
                current = self.nodes[current].next?;
            }
            Some(current)
        } else {
            let mut current = self.last?;
            for _ in index..self.length - 1 {
                current = self.nodes[current].previous?;
            }
            Some(current)
        }
    }

    const fn out_of_bounds(&self, index: usize) -> IndexOutOfBoundsError {
        IndexOutOfBoundsError {
            index,
            length: self.length,
        }
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Adds an item to the beginning of the list.
    pub fn push_front(&mut self, item: T) {
        let id = self.allocate(item);
        let first = self.first;
        self.link(Some(id), first);
        self.link(None, Some(id));
        self.length += 1;
    }

    /// Adds an item to the end of the list.
    pub fn push_back(&mut self, item: T) {
        let id = self.allocate(item);
        let last = self.last;
        self.link(last, Some(id));
        self.link(Some(id), None);
        self.length += 1;
    }

    /// Inserts an item so that it ends up at position `index`.
    ///
    /// Items at `index` and after shift one place towards the back.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBoundsError`] if `index > len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arborlist::sequence::LinkedList;
    ///
    /// let mut list = LinkedList::from_slice(&[1, 3]);
    /// list.insert(1, 2).unwrap();
    /// list.insert(3, 4).unwrap();
    /// assert_eq!(list.to_string(), "[1, 2, 3, 4]");
    /// assert!(list.insert(9, 9).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), IndexOutOfBoundsError> {
        if index == self.length {
            self.push_back(item);
            return Ok(());
        }
        let next = self.node_at(index).ok_or_else(|| self.out_of_bounds(index))?;
        let previous = self.nodes[next].previous;
        let id = self.allocate(item);
        self.link(previous, Some(id));
        self.link(Some(id), Some(next));
        self.length += 1;
        Ok(())
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Returns the first item, if any.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.first.map(|id| &self.nodes[id].item)
    }

    /// Returns the last item, if any.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.last.map(|id| &self.nodes[id].item)
    }

    /// Returns the item at `index`, or `None` if it is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.node_at(index).map(|id| &self.nodes[id].item)
    }

    /// Returns a mutable reference to the item at `index`, or `None` if it
    /// is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let id = self.node_at(index)?;
        Some(&mut self.nodes[id].item)
    }

    /// Replaces the item at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBoundsError`] if `index >= len`.
    pub fn set(&mut self, index: usize, item: T) -> Result<T, IndexOutOfBoundsError> {
        let error = self.out_of_bounds(index);
        self.get_mut(index)
            .map(|slot| std::mem::replace(slot, item))
            .ok_or(error)
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Removes and returns the first item, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let id = self.first?;
        let node = self.nodes.release(id);
        self.link(None, node.next);
        self.length -= 1;
        Some(node.item)
    }

    /// Removes and returns the last item, or `None` if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.last?;
        let node = self.nodes.release(id);
        self.link(node.previous, None);
        self.length -= 1;
        Some(node.item)
    }

    /// Removes and returns the item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBoundsError`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arborlist::sequence::LinkedList;
    ///
    /// let mut list = LinkedList::from_slice(&['a', 'b', 'c']);
    /// assert_eq!(list.remove(1), Ok('b'));
    /// assert_eq!(list.to_string(), "[a, c]");
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, IndexOutOfBoundsError> {
        let id = self.node_at(index).ok_or_else(|| self.out_of_bounds(index))?;
        let node = self.nodes.release(id);
        self.link(node.previous, node.next);
        self.length -= 1;
        Ok(node.item)
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns a front-to-back iterator over the items.
    #[must_use]
    pub fn iter(&self) -> LinkedListIterator<'_, T> {
        LinkedListIterator {
            nodes: &self.nodes,
            front: self.first,
            back: self.last,
            remaining: self.length,
        }
    }
}

impl<T: Clone> LinkedList<T> {
    /// Creates a list holding clones of the items in `slice`, in order.
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        slice.iter().cloned().collect()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the position of the first occurrence of `item`.
    #[must_use]
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|candidate| candidate == item)
    }

    /// Returns the position of the last occurrence of `item`.
    #[must_use]
    pub fn last_index_of(&self, item: &T) -> Option<usize> {
        self.iter().rposition(|candidate| candidate == item)
    }

    /// Returns `true` if the list holds an item equal to `item`.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A double-ended iterator over references to the items of a [`LinkedList`].
pub struct LinkedListIterator<'a, T> {
    nodes: &'a SlotTable<ListNode<T>>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> LinkedListIterator<'a, T> {
    fn node(&self, id: usize) -> &'a ListNode<T> {
        let nodes = self.nodes;
        &nodes[id]
    }
}

impl<'a, T> Iterator for LinkedListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for LinkedListIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.node(self.back?);
        self.back = node.previous;
        self.remaining -= 1;
        Some(&node.item)
    }
}

impl<T> ExactSizeIterator for LinkedListIterator<'_, T> {}

/// An owning iterator over the items of a [`LinkedList`].
pub struct LinkedListIntoIterator<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for LinkedListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T> DoubleEndedIterator for LinkedListIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for LinkedListIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for LinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = LinkedListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        LinkedListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = LinkedListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for item in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{item}")?;
        }
        write!(formatter, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    impl<T> LinkedList<T> {
        /// Walks both directions and checks that the links mirror each other.
        fn assert_links(&self) {
            let mut forward = Vec::new();
            let mut previous = None;
            let mut current = self.first;
            while let Some(id) = current {
                assert_eq!(self.nodes[id].previous, previous, "asymmetric link at {id}");
                forward.push(id);
                previous = Some(id);
                current = self.nodes[id].next;
            }
            assert_eq!(self.last, previous);
            assert_eq!(forward.len(), self.length);

            let mut backward = Vec::new();
            let mut current = self.last;
            while let Some(id) = current {
                backward.push(id);
                current = self.nodes[id].previous;
            }
            backward.reverse();
            assert_eq!(forward, backward);
        }
    }

    #[fixture]
    fn digits() -> LinkedList<u8> {
        (0..10).collect()
    }

    #[rstest]
    fn test_push_both_ends() {
        let mut list = LinkedList::new();
        list.push_back(2);
        list.push_front(1);
        list.push_back(3);
        list.assert_links();
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.len(), 3);
    }

    #[rstest]
    fn test_pop_until_empty_resets_ends(mut digits: LinkedList<u8>) {
        for expected in 0..5 {
            assert_eq!(digits.pop_front(), Some(expected));
            assert_eq!(digits.pop_back(), Some(9 - expected));
            digits.assert_links();
        }
        assert!(digits.is_empty());
        assert_eq!(digits.pop_front(), None);
        assert_eq!(digits.pop_back(), None);
        assert_eq!((digits.first, digits.last), (None, None));
    }

    #[rstest]
    #[case(0)]
    #[case(3)]
    #[case(5)]
    #[case(9)]
    fn test_get_walks_from_either_end(digits: LinkedList<u8>, #[case] index: usize) {
        assert_eq!(digits.get(index), Some(&u8::try_from(index).unwrap()));
    }

    #[rstest]
    fn test_get_out_of_bounds(digits: LinkedList<u8>) {
        assert_eq!(digits.get(10), None);
        assert_eq!(LinkedList::<u8>::new().get(0), None);
    }

    #[rstest]
    #[case(0, "[x, 0, 1, 2]")]
    #[case(1, "[0, x, 1, 2]")]
    #[case(2, "[0, 1, x, 2]")]
    #[case(3, "[0, 1, 2, x]")]
    fn test_insert_keeps_links(#[case] index: usize, #[case] expected: &str) {
        let mut list: LinkedList<String> = (0..3).map(|digit| digit.to_string()).collect();
        list.insert(index, "x".to_string()).unwrap();
        list.assert_links();
        assert_eq!(list.to_string(), expected);
    }

    #[rstest]
    fn test_insert_past_end_fails(mut digits: LinkedList<u8>) {
        assert_eq!(
            digits.insert(11, 0),
            Err(IndexOutOfBoundsError {
                index: 11,
                length: 10
            })
        );
        assert_eq!(digits.len(), 10);
    }

    #[rstest]
    #[case(0)]
    #[case(4)]
    #[case(5)]
    #[case(9)]
    fn test_remove_keeps_links(mut digits: LinkedList<u8>, #[case] index: usize) {
        assert_eq!(digits.remove(index), Ok(u8::try_from(index).unwrap()));
        digits.assert_links();
        assert_eq!(digits.len(), 9);
        assert!(!digits.contains(&u8::try_from(index).unwrap()));
    }

    #[rstest]
    fn test_remove_out_of_bounds(mut digits: LinkedList<u8>) {
        let error = digits.remove(10).unwrap_err();
        assert_eq!(error.length, 10);
        digits.assert_links();
    }

    #[rstest]
    fn test_set_returns_previous(mut digits: LinkedList<u8>) {
        assert_eq!(digits.set(7, 70), Ok(7));
        assert_eq!(digits.get(7), Some(&70));
        assert!(digits.set(10, 0).is_err());
    }

    #[rstest]
    fn test_index_of_with_duplicates() {
        let list = LinkedList::from_slice(&['a', 'b', 'a', 'c']);
        assert_eq!(list.index_of(&'a'), Some(0));
        assert_eq!(list.last_index_of(&'a'), Some(2));
        assert_eq!(list.index_of(&'z'), None);
        assert_eq!(list.last_index_of(&'z'), None);
    }

    #[rstest]
    fn test_released_slots_are_reused(mut digits: LinkedList<u8>) {
        digits.remove(3).unwrap();
        digits.pop_front();
        digits.push_back(10);
        digits.push_front(11);
        assert_eq!(digits.nodes.capacity(), 10);
        digits.assert_links();
    }

    #[rstest]
    fn test_iter_meets_in_the_middle(digits: LinkedList<u8>) {
        let mut iter = digits.iter();
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&9));
        assert_eq!(iter.len(), 8);
        let rest: Vec<&u8> = iter.collect();
        assert_eq!(rest.len(), 8);
    }

    #[rstest]
    fn test_into_iter_reversed(digits: LinkedList<u8>) {
        let reversed: Vec<u8> = digits.into_iter().rev().collect();
        assert_eq!(reversed, (0..10).rev().collect::<Vec<_>>());
    }

    #[rstest]
    fn test_display_and_debug() {
        let empty: LinkedList<i32> = LinkedList::new();
        assert_eq!(format!("{empty}"), "[]");
        let list = LinkedList::from_slice(&["a", "b"]);
        assert_eq!(format!("{list}"), "[a, b]");
        assert_eq!(format!("{list:?}"), r#"["a", "b"]"#);
    }
}
