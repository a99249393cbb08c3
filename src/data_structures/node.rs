// Copyright (c) 2025 M269 ADTs Authors
//
// Licensed under the BSD 3-Clause License (LICENSE or https://opensource.org/licenses/BSD-3-Clause)

//! Node implementation shared by the linked-list stack and queue.
//!
//! A node owns exactly one item and a link to the next node. Nodes are
//! heap-allocated one at a time and handed around as raw [`Link`]s; the
//! container that holds a link is its sole owner until it gives the node back
//! through [`Node::reclaim`]. The chain is strictly singly linked and acyclic.

use std::ptr::NonNull;

/// Owning link to a heap-allocated node, or `None` at the end of a chain.
pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

/// A node in a singly linked list.
///
/// # Type Parameters
///
/// * `T` - Type of the item stored in the node.
#[derive(Debug)]
pub(crate) struct Node<T> {
    /// The item stored in this node
    pub(crate) item: T,

    /// Link to the next node, owned by this node
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Creates a new unlinked node holding `item`.
    pub(crate) fn new(item: T) -> Self {
        Self { item, next: None }
    }

    /// Moves `item` onto the heap in a fresh node whose successor is `next`.
    ///
    /// The returned link owns the allocation. It must eventually be passed to
    /// [`Node::reclaim`] exactly once, or the node leaks.
    pub(crate) fn allocate(item: T, next: Link<T>) -> NonNull<Node<T>> {
        let mut node = Box::new(Self::new(item));
        node.next = next;
        NonNull::from(Box::leak(node))
    }

    /// Takes back ownership of a node produced by [`Node::allocate`].
    ///
    /// # Safety
    ///
    /// `link` must come from [`Node::allocate`], must not have been reclaimed
    /// before, and no reference into the node may outlive this call.
    pub(crate) unsafe fn reclaim(link: NonNull<Node<T>>) -> Box<Node<T>> {
        // SAFETY: the caller guarantees `link` is a live, uniquely owned
        // allocation obtained from `Box::leak`.
        unsafe { Box::from_raw(link.as_ptr()) }
    }

    /// Splits the node into its item and its link to the next node.
    pub(crate) fn into_parts(self) -> (T, Link<T>) {
        (self.item, self.next)
    }
}

/// Frees every node reachable from `head`, one at a time.
///
/// Iterative so that very long chains do not exhaust the call stack.
///
/// # Safety
///
/// `head` must be the sole owner of the chain it starts, and every node in
/// the chain must have come from [`Node::allocate`].
pub(crate) unsafe fn free_chain<T>(mut head: Link<T>) {
    while let Some(link) = head {
        // SAFETY: each link in an owned chain is reclaimed exactly once, as
        // `head` moves past it before the next iteration.
        let node = unsafe { Node::reclaim(link) };
        head = node.next;
    }
}
