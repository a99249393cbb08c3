//! Tests for the error module.
//!
//! This module contains tests for error conversion and display.

use crate::data_structures::{Bag, LinkedListQueue, VecStack};
use crate::error::config::ConfigError;
use crate::error::{AdtError, AdtResult, BagError, QueueError, StackError};

/// Pops, dequeues and removes through `?`, as an application would.
fn take_one_of_each(
    stack: &mut VecStack<u8>,
    queue: &mut LinkedListQueue<u8>,
    bag: &mut Bag<u8>,
) -> AdtResult<(u8, u8)> {
    let popped = stack.pop()?;
    let dequeued = queue.dequeue()?;
    bag.remove(&popped)?;
    Ok((popped, dequeued))
}

/// Test that data structure errors convert into `AdtError` through `?`.
#[test]
fn test_errors_propagate_with_question_mark() {
    let mut stack = VecStack::new();
    let mut queue = LinkedListQueue::new();
    let mut bag = Bag::new();

    assert_eq!(
        take_one_of_each(&mut stack, &mut queue, &mut bag),
        Err(AdtError::Stack(StackError::Empty { operation: "pop" }))
    );

    stack.push(1);
    assert_eq!(
        take_one_of_each(&mut stack, &mut queue, &mut bag),
        Err(AdtError::Queue(QueueError::Empty { operation: "dequeue" }))
    );

    stack.push(1);
    queue.enqueue(2);
    assert_eq!(
        take_one_of_each(&mut stack, &mut queue, &mut bag),
        Err(AdtError::Bag(BagError::NotPresent))
    );

    stack.push(3);
    queue.enqueue(4);
    bag.add(3);
    assert_eq!(take_one_of_each(&mut stack, &mut queue, &mut bag), Ok((3, 4)));
    assert!(bag.is_empty());
}

/// Test that precondition violations are told apart from setup failures.
#[test]
fn test_precondition_classification() {
    let stack_error: AdtError = StackError::Empty { operation: "top" }.into();
    let config_error: AdtError = ConfigError::ValidationError("bad".to_string()).into();

    assert!(stack_error.is_precondition_violation());
    assert!(!config_error.is_precondition_violation());
    assert!(!AdtError::Logging("taken".to_string()).is_precondition_violation());
}

/// Test that nested errors display their cause.
#[test]
fn test_nested_error_display() {
    let error = AdtError::from(QueueError::Empty { operation: "front" });
    assert_eq!(
        error.to_string(),
        "Queue error: Cannot front from an empty queue"
    );

    let error = AdtError::from(ConfigError::ValueOutOfRange {
        key: "collections.stack_capacity".to_string(),
        message: "too large".to_string(),
    });
    assert!(error.to_string().contains("collections.stack_capacity"));
}
