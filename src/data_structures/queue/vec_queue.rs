// Copyright (c) 2025 M269 ADTs Authors
//
// Licensed under the BSD 3-Clause License (LICENSE or https://opensource.org/licenses/BSD-3-Clause)

//! Vector-backed queue.

use super::{empty_queue, Fifo, QueueResult};
use crate::config::collections::CollectionsConfig;
use crate::config::{ConfigResult, Validate};

/// A first-in, first-out sequence of items, implemented with a `Vec`.
///
/// Items are appended at the back and removed from index 0. Removing the
/// first element shifts all the others, so [`VecQueue::dequeue`] is O(n).
/// Prefer [`super::LinkedListQueue`] unless the queue stays small.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VecQueue<T> {
    members: Vec<T>,
}

impl<T> VecQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self { members: Vec::new() }
    }

    /// Creates an empty queue with room for `capacity` items before it
    /// reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
        }
    }

    /// Creates an empty queue sized by the configured `queue_capacity`.
    ///
    /// The section is validated first, so an out-of-range capacity is
    /// reported as a [`ConfigError`] instead of aborting the allocation.
    ///
    /// [`ConfigError`]: crate::error::config::ConfigError
    pub fn from_config(config: &CollectionsConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::with_capacity(config.queue_capacity))
    }

    /// Returns the number of items in the queue.
    ///
    /// Complexity: O(1).
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the queue holds no items.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the front item without removing it.
    ///
    /// Precondition: `self.size() > 0`. Complexity: O(1).
    pub fn front(&self) -> QueueResult<&T> {
        self.members
            .first()
            .ok_or_else(|| empty_queue("VecQueue", "front"))
    }

    /// Adds `item` to the back of the queue.
    ///
    /// Complexity: O(1) amortised.
    pub fn enqueue(&mut self, item: T) {
        self.members.push(item);
    }

    /// Removes and returns the front item.
    ///
    /// Precondition: `self.size() > 0`. Complexity: O(`self.size()`).
    pub fn dequeue(&mut self) -> QueueResult<T> {
        if self.members.is_empty() {
            return Err(empty_queue("VecQueue", "dequeue"));
        }
        Ok(self.members.remove(0))
    }
}

impl<T> Default for VecQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Fifo<T> for VecQueue<T> {
    fn size(&self) -> usize {
        VecQueue::size(self)
    }

    fn front(&self) -> QueueResult<&T> {
        VecQueue::front(self)
    }

    fn enqueue(&mut self, item: T) {
        VecQueue::enqueue(self, item)
    }

    fn dequeue(&mut self) -> QueueResult<T> {
        VecQueue::dequeue(self)
    }
}
