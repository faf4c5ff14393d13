//! # arborlist
//!
//! Generic, in-memory container abstractions for Rust.
//!
//! ## Overview
//!
//! - **Ordered Map**: [`BinaryTree`](tree::BinaryTree), an unbalanced binary
//!   search tree with parent-linked nodes and pluggable traversal orders
//! - **Sequences**: [`LinkedList`](sequence::LinkedList), a doubly-linked
//!   list, with [`Stack`](sequence::Stack) and [`Queue`](sequence::Queue)
//!   adapters built on top of it
//!
//! All linked structures are stored in index-based arenas, so the crate
//! needs no `unsafe` code and no reference-counted cycles.
//!
//! ## Feature Flags
//!
//! - `sequence`: Linked list, stack and queue
//! - `tree`: Binary tree map and traversal orders (implies `sequence`)
//!
//! Both are enabled by default.
//!
//! ## Example
//!
//! ```rust
//! use arborlist::prelude::*;
//!
//! let mut tree = BinaryTree::new();
//! for key in ["E", "J", "D", "B", "G"] {
//!     tree.insert(key, key.to_lowercase());
//! }
//! assert_eq!(tree.to_string(), "[b, d, e, g, j]");
//!
//! let mut pre_order = Vec::new();
//! tree.traverse(TraversalOrder::PreOrder, |key, _| pre_order.push(*key));
//! assert_eq!(pre_order, vec!["E", "D", "B", "J", "G"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use arborlist::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "tree")]
    pub use crate::tree::*;
}

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "sequence")]
mod slot;

#[cfg(feature = "tree")]
pub mod tree;
