//! Ordered map based on an unbalanced binary search tree.
//!
//! - [`BinaryTree`]: ordered key-value map with parent-linked nodes
//! - [`TraversalOrder`]: pre-, in- and post-order walks over a tree
//! - [`KeyNotFoundError`]: raised when a lookup key has no mapping
//!
//! # Examples
//!
//! ```rust
//! use arborlist::tree::{BinaryTree, TraversalOrder};
//!
//! let mut tree = BinaryTree::new();
//! for key in ["E", "J", "D", "B", "G", "F", "A", "H", "C", "I"] {
//!     tree.insert(key, key);
//! }
//! assert_eq!(tree.to_string(), "[A, B, C, D, E, F, G, H, I, J]");
//!
//! // E has two children; F, the leftmost node below J, takes its place.
//! tree.remove("E").unwrap();
//!
//! let mut pre_order = Vec::new();
//! tree.traverse(TraversalOrder::PreOrder, |key, _| pre_order.push(*key));
//! assert_eq!(pre_order[0], "F");
//! ```
//!
//! # Nullable Keys
//!
//! Keys that may be absent are modelled as `Option<T>`. `None` orders
//! before any present key and two `None` keys are equal:
//!
//! ```rust
//! use arborlist::tree::BinaryTree;
//!
//! let mut tree = BinaryTree::new();
//! tree.insert(Some(1), "one");
//! tree.insert(None, "absent");
//! assert_eq!(tree.to_string(), "[absent, one]");
//! assert_eq!(tree.insert(None, "still absent"), Some("absent"));
//! ```

mod error;
mod map;
mod node;
mod traversal;

pub use error::KeyNotFoundError;
pub use map::BinaryTree;
pub use map::BinaryTreeIntoIterator;
pub use map::BinaryTreeIterator;
pub use traversal::TraversalOrder;
