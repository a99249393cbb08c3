// Copyright (c) 2025 M269 ADTs Authors
//
// Licensed under the BSD 3-Clause License (LICENSE or https://opensource.org/licenses/BSD-3-Clause)

//! Queue ADT
//!
//! A first-in, first-out sequence of items with two representations that
//! differ in one operation:
//!
//! * [`VecQueue`] appends to the back of a vector and dequeues by removing its
//!   first element, which shifts every remaining item: O(n).
//! * [`LinkedListQueue`] keeps singly linked nodes with a link to the last
//!   node, so dequeuing only moves the head: O(1).
//!
//! [`Queue`] names the linked-list representation for that reason.
//!
//! # Example
//!
//! ```
//! use m269_adts_lib::data_structures::Queue;
//!
//! let mut queue = Queue::new();
//! for n in 0..3 {
//!     queue.enqueue(n);
//!     assert_eq!(queue.front(), Ok(&0));
//! }
//!
//! let mut dequeued = Vec::new();
//! while queue.size() > 0 {
//!     dequeued.push(queue.dequeue().unwrap());
//! }
//! assert_eq!(dequeued, vec![0, 1, 2]);
//! ```

mod error;
mod linked_list_queue;
mod vec_queue;

pub use error::{QueueError, QueueResult};
pub use linked_list_queue::LinkedListQueue;
pub use vec_queue::VecQueue;

/// The default queue representation.
pub type Queue<T> = LinkedListQueue<T>;

/// Operations shared by every queue representation.
pub trait Fifo<T> {
    /// Returns the number of items in the queue.
    fn size(&self) -> usize;

    /// Returns `true` if the queue holds no items.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the item that has been in the queue the longest.
    ///
    /// # Errors
    ///
    /// [`QueueError::Empty`] if the queue is empty.
    fn front(&self) -> QueueResult<&T>;

    /// Adds `item` to the back of the queue.
    fn enqueue(&mut self, item: T);

    /// Removes and returns the front item.
    ///
    /// # Errors
    ///
    /// [`QueueError::Empty`] if the queue is empty. The queue is left unchanged.
    fn dequeue(&mut self) -> QueueResult<T>;
}

/// Builds the error for an operation rejected on an empty queue.
fn empty_queue(structure: &'static str, operation: &'static str) -> QueueError {
    tracing::debug!(structure, operation, "rejected operation on empty queue");
    QueueError::Empty { operation }
}
