// Copyright (c) 2025 M269 ADTs Authors
//
// Licensed under the BSD 3-Clause License (LICENSE or https://opensource.org/licenses/BSD-3-Clause)

//! Error types for queue operations.

/// Errors that can occur in queue operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum QueueError {
    /// `front` or `dequeue` was called on an empty queue.
    #[error("Cannot {operation} from an empty queue")]
    Empty {
        /// The rejected operation.
        operation: &'static str,
    },
}

/// Result type for queue operations
pub type QueueResult<T> = std::result::Result<T, QueueError>;
