//! Data structures for the M269 ADTs library.
//!
//! Textbook abstract data types, each behind a small contract and, where it
//! teaches something, more than one representation:
//! - [`stack`]: vector-backed and linked-list-backed LIFO stacks
//! - [`queue`]: vector-backed and linked-list-backed FIFO queues
//! - [`bag`]: a multiset backed by an item to count map
//!
//! The linked-list variants share the `node` module, which holds all of the
//! crate's unsafe code. Nodes never leave the crate:
//!
//! ```compile_fail
//! use m269_adts_lib::data_structures::node::Node;
//! ```

pub mod bag;
pub(crate) mod node;
pub mod queue;
pub mod stack;

// Re-export common data structures
pub use bag::{Bag, BagError, BagResult};
pub use queue::{Fifo, LinkedListQueue, Queue, QueueError, QueueResult, VecQueue};
pub use stack::{LinkedListStack, Lifo, Stack, StackError, StackResult, VecStack};
