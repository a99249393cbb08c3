//! Test modules for the M269 ADTs library.
//!
//! This module contains the crate-internal test suite:
//! - Model-based and property tests for each ADT using proptest
//! - Table tests using test-case
//! - Configuration loading tests against temporary files
//! - Shared strategies and fixtures

pub mod error_tests;
pub mod queue_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{
    bag_text_strategy, items_strategy, queue_ops_strategy, stack_ops_strategy, QueueOp, StackOp,
    TestFixture,
};
