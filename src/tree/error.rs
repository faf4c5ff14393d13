//! Error types for the binary tree map.

use std::fmt;

/// Represents a lookup of a key that has no mapping in a
/// [`BinaryTree`](super::BinaryTree).
///
/// Raised by `get`, `get_mut`, `set` and `remove`. The failing operation
/// leaves the tree untouched, so the error is always recoverable.
///
/// The error owns a copy of the key that was looked up. For a tree keyed by
/// `String` and queried with `&str`, that copy is a `String`. The error can
/// be displayed whenever the key is `Debug`.
///
/// # Examples
///
/// ```rust
/// use arborlist::tree::{BinaryTree, KeyNotFoundError};
///
/// let tree: BinaryTree<&str, i32> = BinaryTree::new();
/// let error = tree.get("missing").unwrap_err();
/// assert_eq!(error, KeyNotFoundError::new("missing".to_string()));
/// assert_eq!(error.to_string(), "key not found: \"missing\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyNotFoundError<Q> {
    /// The key that was looked up.
    pub key: Q,
}

impl<Q> KeyNotFoundError<Q> {
    /// Creates an error for the given key.
    pub const fn new(key: Q) -> Self {
        Self { key }
    }

    /// Consumes the error, returning the key.
    pub fn into_key(self) -> Q {
        self.key
    }
}

impl<Q: fmt::Debug> fmt::Display for KeyNotFoundError<Q> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "key not found: {:?}", self.key)
    }
}

impl<Q: fmt::Debug> std::error::Error for KeyNotFoundError<Q> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&42, "key not found: 42")]
    #[case(&"E", "key not found: \"E\"")]
    fn test_key_not_found_display(#[case] key: &dyn fmt::Debug, #[case] expected: &str) {
        assert_eq!(KeyNotFoundError::new(key).to_string(), expected);
    }

    #[rstest]
    fn test_key_not_found_renders_absent_key() {
        let error = KeyNotFoundError::new(None::<i32>);
        assert_eq!(error.to_string(), "key not found: None");
        assert_eq!(error.into_key(), None);
    }

    #[rstest]
    fn test_key_not_found_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(KeyNotFoundError::new(1));
        assert_eq!(error.to_string(), "key not found: 1");
    }
}
