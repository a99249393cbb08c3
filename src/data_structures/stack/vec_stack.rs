// Copyright (c) 2025 M269 ADTs Authors
//
// Licensed under the BSD 3-Clause License (LICENSE or https://opensource.org/licenses/BSD-3-Clause)

//! Vector-backed stack.

use super::{empty_stack, Lifo, StackResult};
use crate::config::collections::CollectionsConfig;
use crate::config::{ConfigResult, Validate};

/// A last-in, first-out sequence of items, implemented with a `Vec`.
///
/// The top of the stack is the back of the vector, so every operation is
/// O(1) (amortised for `push`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VecStack<T> {
    members: Vec<T>,
}

impl<T> VecStack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { members: Vec::new() }
    }

    /// Creates an empty stack with room for `capacity` items before it
    /// reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
        }
    }

    /// Creates an empty stack sized by the configured `stack_capacity`.
    ///
    /// The section is validated first, so an out-of-range capacity is
    /// reported as a [`ConfigError`] instead of aborting the allocation.
    ///
    /// [`ConfigError`]: crate::error::config::ConfigError
    pub fn from_config(config: &CollectionsConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::with_capacity(config.stack_capacity))
    }

    /// Returns the number of items in the stack.
    ///
    /// Complexity: O(1).
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the stack holds no items.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the top item without removing it.
    ///
    /// Precondition: `self.size() > 0`. Complexity: O(1).
    pub fn top(&self) -> StackResult<&T> {
        self.members
            .last()
            .ok_or_else(|| empty_stack("VecStack", "top"))
    }

    /// Puts `item` on top of the stack.
    ///
    /// Postcondition: `self.top()` is `item`. Complexity: O(1) amortised.
    pub fn push(&mut self, item: T) {
        self.members.push(item);
    }

    /// Removes and returns the top item.
    ///
    /// Precondition: `self.size() > 0`. Complexity: O(1).
    pub fn pop(&mut self) -> StackResult<T> {
        self.members
            .pop()
            .ok_or_else(|| empty_stack("VecStack", "pop"))
    }
}

impl<T> Default for VecStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Lifo<T> for VecStack<T> {
    fn size(&self) -> usize {
        VecStack::size(self)
    }

    fn top(&self) -> StackResult<&T> {
        VecStack::top(self)
    }

    fn push(&mut self, item: T) {
        VecStack::push(self, item)
    }

    fn pop(&mut self) -> StackResult<T> {
        VecStack::pop(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::stack::StackError;
    use crate::error::config::ConfigError;

    #[test]
    fn test_stack_basic_operations() {
        let mut stack = VecStack::new();

        assert!(stack.is_empty());
        assert_eq!(stack.size(), 0);

        for n in 0..3 {
            stack.push(n);
            assert_eq!(stack.top(), Ok(&n));
        }
        assert_eq!(stack.size(), 3);

        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.pop(), Ok(0));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_stack_empty_rejections() {
        let mut stack: VecStack<String> = VecStack::default();

        assert_eq!(stack.top(), Err(StackError::Empty { operation: "top" }));
        assert_eq!(stack.pop(), Err(StackError::Empty { operation: "pop" }));
        assert_eq!(stack.size(), 0);
    }

    #[test]
    fn test_stack_from_config() {
        let config = CollectionsConfig {
            stack_capacity: 64,
            ..CollectionsConfig::default()
        };
        let mut stack = VecStack::from_config(&config).unwrap();

        assert!(stack.members.capacity() >= 64);
        assert!(stack.is_empty());

        stack.push('x');
        assert_eq!(stack.top(), Ok(&'x'));
    }

    #[test]
    fn test_stack_from_config_rejects_oversized_capacity() {
        let config = CollectionsConfig {
            stack_capacity: usize::MAX,
            ..CollectionsConfig::default()
        };

        match VecStack::<u64>::from_config(&config) {
            Err(ConfigError::ValueOutOfRange { key, .. }) => {
                assert_eq!(key, "collections.stack_capacity")
            }
            other => panic!("expected ValueOutOfRange, got {other:?}"),
        }
    }
}
