// Copyright (c) 2025 M269 ADTs Authors
//
// Licensed under the BSD 3-Clause License (LICENSE or https://opensource.org/licenses/BSD-3-Clause)

//! Linked-list-backed queue.
//!
//! Items live in a singly linked chain of nodes running from the front
//! (`head`) to the back (`last`). `head` owns the chain; `last` is a
//! non-owning alias of the final node so that enqueuing does not have to walk
//! the chain.

use std::fmt;
use std::marker::PhantomData;

use super::{empty_queue, Fifo, QueueResult};
use crate::data_structures::node::{self, Link, Node};

/// A first-in, first-out sequence of items, implemented with a linked list.
///
/// Every operation is O(1).
pub struct LinkedListQueue<T> {
    /// Link to the front node; owns the whole chain
    head: Link<T>,

    /// Alias of the back node, `None` exactly when `head` is `None`
    last: Link<T>,

    /// Number of nodes in the chain
    length: usize,

    /// The queue owns values of type `T` through its nodes
    _owns: PhantomData<Box<Node<T>>>,
}

impl<T> LinkedListQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            head: None,
            last: None,
            length: 0,
            _owns: PhantomData,
        }
    }

    /// Returns the number of items in the queue.
    ///
    /// Complexity: O(1).
    pub fn size(&self) -> usize {
        self.length
    }

    /// Returns `true` if the queue holds no items.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the front item without removing it.
    ///
    /// Precondition: `self.size() > 0`. Complexity: O(1).
    pub fn front(&self) -> QueueResult<&T> {
        match self.head {
            // SAFETY: `head` is a live node owned by this queue; the borrow is
            // tied to `&self`.
            Some(head) => Ok(unsafe { &head.as_ref().item }),
            None => Err(empty_queue("LinkedListQueue", "front")),
        }
    }

    /// Adds `item` to the back of the queue.
    ///
    /// Complexity: O(1).
    pub fn enqueue(&mut self, item: T) {
        let node = Node::allocate(item, None);
        match self.last {
            // SAFETY: `last` aliases the final node of the chain owned by this
            // queue. `&mut self` guarantees no outstanding borrows into it.
            Some(last) => unsafe { (*last.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.last = Some(node);
        self.length += 1;
    }

    /// Removes and returns the front item.
    ///
    /// Precondition: `self.size() > 0`. Complexity: O(1).
    pub fn dequeue(&mut self) -> QueueResult<T> {
        let head = self
            .head
            .ok_or_else(|| empty_queue("LinkedListQueue", "dequeue"))?;

        // SAFETY: `head` is owned by this queue and is unlinked right below,
        // so it is reclaimed exactly once.
        let node = unsafe { Node::reclaim(head) };
        let (item, next) = node.into_parts();
        self.head = next;
        if self.head.is_none() {
            self.last = None;
        }
        self.length -= 1;
        Ok(item)
    }

    /// Walks the chain from the front.
    fn walk(&self) -> impl Iterator<Item = &T> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let link = cursor?;
            // SAFETY: every node reachable from `head` is alive while `self`
            // is borrowed.
            let node = unsafe { link.as_ref() };
            cursor = node.next;
            Some(&node.item)
        })
    }
}

impl<T> Default for LinkedListQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedListQueue<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        for item in self.walk() {
            copy.enqueue(item.clone());
        }
        copy
    }
}

impl<T: PartialEq> PartialEq for LinkedListQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.walk().eq(other.walk())
    }
}

impl<T: Eq> Eq for LinkedListQueue<T> {}

impl<T> Drop for LinkedListQueue<T> {
    fn drop(&mut self) {
        self.last = None;
        // SAFETY: the queue is the sole owner of its chain and is going away.
        unsafe { node::free_chain(self.head.take()) };
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedListQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedListQueue")
            .field("size", &self.length)
            .field("front_to_back", &DebugChain(self))
            .finish()
    }
}

struct DebugChain<'a, T>(&'a LinkedListQueue<T>);

impl<T: fmt::Debug> fmt::Debug for DebugChain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.walk()).finish()
    }
}

impl<T> Fifo<T> for LinkedListQueue<T> {
    fn size(&self) -> usize {
        LinkedListQueue::size(self)
    }

    fn front(&self) -> QueueResult<&T> {
        LinkedListQueue::front(self)
    }

    fn enqueue(&mut self, item: T) {
        LinkedListQueue::enqueue(self, item)
    }

    fn dequeue(&mut self) -> QueueResult<T> {
        LinkedListQueue::dequeue(self)
    }
}

// SAFETY: the queue exclusively owns its nodes; `last` only ever aliases a
// node of that same chain.
unsafe impl<T: Send> Send for LinkedListQueue<T> {}
unsafe impl<T: Sync> Sync for LinkedListQueue<T> {}
