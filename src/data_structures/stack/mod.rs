// Copyright (c) 2025 M269 ADTs Authors
//
// Licensed under the BSD 3-Clause License (LICENSE or https://opensource.org/licenses/BSD-3-Clause)

//! Stack ADT
//!
//! A last-in, first-out sequence of items with two interchangeable
//! representations:
//!
//! * [`VecStack`] keeps the items in a growable vector and works at its back.
//! * [`LinkedListStack`] keeps the items in singly linked nodes and works at
//!   the head.
//!
//! Both are O(1) for every operation. [`Stack`] names the vector-backed one,
//! since pushing and popping at the end of a vector is already O(1) and the
//! simpler of the two.
//!
//! # Example
//!
//! ```
//! use m269_adts_lib::data_structures::Stack;
//!
//! let mut stack = Stack::new();
//! for n in 0..3 {
//!     stack.push(n);
//!     assert_eq!(stack.top(), Ok(&n));
//! }
//!
//! let mut popped = Vec::new();
//! while stack.size() > 0 {
//!     popped.push(stack.pop().unwrap());
//! }
//! assert_eq!(popped, vec![2, 1, 0]);
//! ```

mod error;
mod linked_list_stack;
mod vec_stack;

pub use error::{StackError, StackResult};
pub use linked_list_stack::LinkedListStack;
pub use vec_stack::VecStack;

/// The default stack representation.
pub type Stack<T> = VecStack<T>;

/// Operations shared by every stack representation.
///
/// Lets code and tests be written once against the LIFO contract and run
/// against either representation.
pub trait Lifo<T> {
    /// Returns the number of items in the stack.
    fn size(&self) -> usize;

    /// Returns `true` if the stack holds no items.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the most recently pushed item that has not been popped.
    ///
    /// # Errors
    ///
    /// [`StackError::Empty`] if the stack is empty.
    fn top(&self) -> StackResult<&T>;

    /// Puts `item` on top of the stack.
    fn push(&mut self, item: T);

    /// Removes and returns the top item.
    ///
    /// # Errors
    ///
    /// [`StackError::Empty`] if the stack is empty. The stack is left unchanged.
    fn pop(&mut self) -> StackResult<T>;
}

/// Builds the error for an operation rejected on an empty stack.
fn empty_stack(structure: &'static str, operation: &'static str) -> StackError {
    tracing::debug!(structure, operation, "rejected operation on empty stack");
    StackError::Empty { operation }
}
