//! Fundamental data structures: a bounded stack, a FIFO queue, a singly
//! linked list and an unbalanced binary search tree.
//!
//! Each container is single-owner and independent of the others. Expected
//! "nothing there" outcomes (empty, full, not found) are ordinary return
//! values, never panics.

pub mod bst;
pub mod config;
pub mod demo;
pub mod error;
pub mod linked_list;
pub mod queue;
pub mod stack;

pub use bst::BinarySearchTree;
pub use error::{CapacityError, CollectionError, ConfigError};
pub use linked_list::SinglyLinkedList;
pub use queue::Queue;
pub use stack::BoundedStack;
