// Copyright (c) 2025 M269 ADTs Authors
//
// Licensed under the BSD 3-Clause License (LICENSE or https://opensource.org/licenses/BSD-3-Clause)

//! Linked-list-backed stack.
//!
//! The top of the stack is the head of a singly linked chain of
//! nodes. Pushing allocates a node in front of the head and popping
//! reclaims the head node, so neither operation ever moves existing items.

use std::fmt;
use std::marker::PhantomData;

use super::{empty_stack, Lifo, StackResult};
use crate::data_structures::node::{self, Link, Node};

/// A last-in, first-out sequence of items, implemented with a linked list.
///
/// Every operation is O(1) with no hidden amortised cost.
pub struct LinkedListStack<T> {
    /// Link to the top node; owns the whole chain
    head: Link<T>,

    /// Number of nodes in the chain
    length: usize,

    /// The stack owns values of type `T` through its nodes
    _owns: PhantomData<Box<Node<T>>>,
}

impl<T> LinkedListStack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            head: None,
            length: 0,
            _owns: PhantomData,
        }
    }

    /// Returns the number of items in the stack.
    ///
    /// Complexity: O(1).
    pub fn size(&self) -> usize {
        self.length
    }

    /// Returns `true` if the stack holds no items.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the top item without removing it.
    ///
    /// Precondition: `self.size() > 0`. Complexity: O(1).
    pub fn top(&self) -> StackResult<&T> {
        match self.head {
            // SAFETY: `head` is a live node owned by this stack, and the
            // returned borrow is tied to `&self`, so no `&mut self` call can
            // free the node while the reference exists.
            Some(head) => Ok(unsafe { &head.as_ref().item }),
            None => Err(empty_stack("LinkedListStack", "top")),
        }
    }

    /// Puts `item` on top of the stack.
    ///
    /// Postcondition: `self.top()` is `item`. Complexity: O(1).
    pub fn push(&mut self, item: T) {
        self.head = Some(Node::allocate(item, self.head));
        self.length += 1;
    }

    /// Removes and returns the top item.
    ///
    /// Precondition: `self.size() > 0`. Complexity: O(1).
    pub fn pop(&mut self) -> StackResult<T> {
        let head = self
            .head
            .ok_or_else(|| empty_stack("LinkedListStack", "pop"))?;

        // SAFETY: `head` was allocated by `push` and is owned by this stack.
        // It is unlinked right below, so it is reclaimed exactly once.
        let node = unsafe { Node::reclaim(head) };
        let (item, next) = node.into_parts();
        self.head = next;
        self.length -= 1;
        Ok(item)
    }

    /// Walks the chain from the top.
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

impl<T> Default for LinkedListStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedListStack<T> {
    fn clone(&self) -> Self {
        // Pushing reverses order, so copy from the bottom up.
        let items: Vec<&T> = self.walk().collect();
        let mut copy = Self::new();
        for item in items.into_iter().rev() {
            copy.push(item.clone());
        }
        copy
    }
}

impl<T: PartialEq> PartialEq for LinkedListStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.walk().eq(other.walk())
    }
}

impl<T: Eq> Eq for LinkedListStack<T> {}

impl<T> Drop for LinkedListStack<T> {
    fn drop(&mut self) {
        // SAFETY: the stack is the sole owner of its chain and is going away.
        unsafe { node::free_chain(self.head.take()) };
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedListStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedListStack")
            .field("size", &self.length)
            .field("top_down", &DebugChain(self))
            .finish()
    }
}

struct DebugChain<'a, T>(&'a LinkedListStack<T>);

impl<T: fmt::Debug> fmt::Debug for DebugChain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.walk()).finish()
    }
}

impl<T> Lifo<T> for LinkedListStack<T> {
    fn size(&self) -> usize {
        LinkedListStack::size(self)
    }

    fn top(&self) -> StackResult<&T> {
        LinkedListStack::top(self)
    }

    fn push(&mut self, item: T) {
        LinkedListStack::push(self, item)
    }

    fn pop(&mut self) -> StackResult<T> {
        LinkedListStack::pop(self)
    }
}

// SAFETY: the stack exclusively owns its nodes, so sending or sharing it is
// the same as sending or sharing the items themselves.
unsafe impl<T: Send> Send for LinkedListStack<T> {}
unsafe impl<T: Sync> Sync for LinkedListStack<T> {}
