//! First-in first-out queue built on [`LinkedList`].

use std::fmt;
use std::iter::FromIterator;

use super::error::QueueEmptyError;
use super::list::{LinkedList, LinkedListIterator};

/// A first-in first-out queue.
///
/// Items are enqueued at the back of the underlying [`LinkedList`] and
/// dequeued from its front.
///
/// # Examples
///
/// ```rust
/// use arborlist::sequence::{Queue, QueueEmptyError};
///
/// let mut queue = Queue::new();
/// queue.enqueue("Volkswagen Golf GTI");
/// queue.enqueue("Ford Escort 1.4");
///
/// assert_eq!(queue.dequeue(), Ok("Volkswagen Golf GTI"));
/// assert_eq!(queue.dequeue(), Ok("Ford Escort 1.4"));
/// assert_eq!(queue.dequeue(), Err(QueueEmptyError));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: LinkedList<T>,
}

impl<T> Queue<T> {
    /// Creates a new empty queue.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: LinkedList::new(),
        }
    }

    /// Returns `true` if the queue holds no items.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items in the queue.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Adds an item to the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the item at the head of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueEmptyError`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T, QueueEmptyError> {
        self.items.pop_front().ok_or(QueueEmptyError)
    }

    /// Returns the item at the head of the queue without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`QueueEmptyError`] if the queue is empty.
    pub fn peek(&self) -> Result<&T, QueueEmptyError> {
        self.items.front().ok_or(QueueEmptyError)
    }

    /// Returns an iterator from the head of the queue to its back.
    #[must_use]
    pub fn iter(&self) -> LinkedListIterator<'_, T> {
        self.items.iter()
    }
}

impl<T: PartialEq> Queue<T> {
    /// Returns `true` if the queue holds an item equal to `item`.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T> Default for Queue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Enqueues the items in iteration order.
impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Queue").field(&self.items).finish()
    }
}

/// Renders the items from head to back.
impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.items, formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_dequeue_preserves_enqueue_order() {
        let mut queue: Queue<i32> = (1..=3).collect();
        assert_eq!(queue.dequeue(), Ok(1));
        queue.enqueue(4);
        assert_eq!(queue.dequeue(), Ok(2));
        assert_eq!(queue.dequeue(), Ok(3));
        assert_eq!(queue.dequeue(), Ok(4));
        assert_eq!(queue.dequeue(), Err(QueueEmptyError));
    }

    #[rstest]
    fn test_peek_on_empty_queue() {
        let queue: Queue<String> = Queue::default();
        assert_eq!(queue.peek(), Err(QueueEmptyError));
    }

    #[rstest]
    fn test_contains() {
        let queue: Queue<&str> = ["a", "b"].into_iter().collect();
        assert!(queue.contains(&"b"));
        assert!(!queue.contains(&"c"));
    }
}
