// Copyright (c) 2025 M269 ADTs Authors
//
// Licensed under the BSD 3-Clause License (LICENSE or https://opensource.org/licenses/BSD-3-Clause)

//! Error types for stack operations.

/// Errors that can occur in stack operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum StackError {
    /// `top` or `pop` was called on an empty stack.
    #[error("Cannot {operation} an empty stack")]
    Empty {
        /// The rejected operation.
        operation: &'static str,
    },
}

/// Result type for stack operations
pub type StackResult<T> = std::result::Result<T, StackError>;
