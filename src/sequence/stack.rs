//! Last-in first-out stack built on [`LinkedList`].

use std::fmt;
use std::iter::FromIterator;

use super::error::StackEmptyError;
use super::list::{LinkedList, LinkedListIterator};

/// A last-in first-out stack.
///
/// Items are pushed onto and popped from the top, which is the back of the
/// underlying [`LinkedList`].
///
/// # Examples
///
/// ```rust
/// use arborlist::sequence::{Stack, StackEmptyError};
///
/// let mut stack = Stack::new();
/// stack.push("a");
/// stack.push("b");
///
/// assert_eq!(stack.peek(), Ok(&"b"));
/// assert_eq!(stack.pop(), Ok("b"));
/// assert_eq!(stack.pop(), Ok("a"));
/// assert_eq!(stack.pop(), Err(StackEmptyError));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: LinkedList<T>,
}

impl<T> Stack<T> {
    /// Creates a new empty stack.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: LinkedList::new(),
        }
    }

    /// Returns `true` if the stack holds no items.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on the stack.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Pushes an item onto the top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the item at the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`StackEmptyError`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, StackEmptyError> {
        self.items.pop_back().ok_or(StackEmptyError)
    }

    /// Returns the item at the top of the stack without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`StackEmptyError`] if the stack is empty.
    pub fn peek(&self) -> Result<&T, StackEmptyError> {
        self.items.back().ok_or(StackEmptyError)
    }

    /// Returns an iterator from the bottom of the stack to the top.
    #[must_use]
    pub fn iter(&self) -> LinkedListIterator<'_, T> {
        self.items.iter()
    }
}

impl<T: PartialEq> Stack<T> {
    /// Returns `true` if the stack holds an item equal to `item`.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T> Default for Stack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Pushes the items in iteration order, so the last one ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Stack").field(&self.items).finish()
    }
}

/// Renders the items from bottom to top.
impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.items, formatter)
    }
}
