//! Error types for the sequence containers.

use std::fmt;

/// Represents an access to a [`LinkedList`](super::LinkedList) position
/// that does not exist.
///
/// # Examples
///
/// ```rust
/// use arborlist::sequence::{IndexOutOfBoundsError, LinkedList};
///
/// let mut list = LinkedList::from_slice(&[1, 2, 3]);
/// let error = list.remove(5).unwrap_err();
/// assert_eq!(error, IndexOutOfBoundsError { index: 5, length: 3 });
/// assert_eq!(
///     error.to_string(),
///     "index out of bounds: the length is 3 but the index is 5"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBoundsError {
    /// The requested position.
    pub index: usize,
    /// The length of the list at the time of the request.
    pub length: usize,
}

impl fmt::Display for IndexOutOfBoundsError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "index out of bounds: the length is {} but the index is {}",
            self.length, self.index
        )
    }
}

impl std::error::Error for IndexOutOfBoundsError {}

/// Represents a `peek` or `pop` on an empty [`Stack`](super::Stack).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackEmptyError;

impl fmt::Display for StackEmptyError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("stack is empty")
    }
}

impl std::error::Error for StackEmptyError {}

/// Represents a `peek` or `dequeue` on an empty [`Queue`](super::Queue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueEmptyError;

impl fmt::Display for QueueEmptyError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("queue is empty")
    }
}

impl std::error::Error for QueueEmptyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_bounds_display() {
        let error = IndexOutOfBoundsError {
            index: 4,
            length: 2,
        };
        assert_eq!(
            format!("{error}"),
            "index out of bounds: the length is 2 but the index is 4"
        );
    }

    #[test]
    fn test_empty_errors_display() {
        assert_eq!(format!("{StackEmptyError}"), "stack is empty");
        assert_eq!(format!("{QueueEmptyError}"), "queue is empty");
    }
}
