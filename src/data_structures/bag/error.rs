// Copyright (c) 2025 M269 ADTs Authors
//
// Licensed under the BSD 3-Clause License (LICENSE or https://opensource.org/licenses/BSD-3-Clause)

//! Error types for bag operations.

/// Errors that can occur in bag operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum BagError {
    /// `remove` was called for an item with no copies in the bag.
    #[error("Cannot remove an item that is not in the bag")]
    NotPresent,
}

/// Result type for bag operations
pub type BagResult<T> = std::result::Result<T, BagError>;
