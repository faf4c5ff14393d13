//! Sequential containers.
//!
//! - [`LinkedList`]: doubly-linked list with O(1) operations at both ends
//! - [`Stack`]: last-in first-out adapter over [`LinkedList`]
//! - [`Queue`]: first-in first-out adapter over [`LinkedList`]
//!
//! # Examples
//!
//! ```rust
//! use arborlist::sequence::{Queue, Stack};
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.pop(), Ok(2));
//!
//! let mut queue = Queue::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//! assert_eq!(queue.dequeue(), Ok(1));
//! ```

mod error;
mod list;
mod queue;
mod stack;

pub use error::IndexOutOfBoundsError;
pub use error::QueueEmptyError;
pub use error::StackEmptyError;
pub use list::LinkedList;
pub use list::LinkedListIntoIterator;
pub use list::LinkedListIterator;
pub use queue::Queue;
pub use stack::Stack;
