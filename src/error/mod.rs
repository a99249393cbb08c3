//! Error module for the M269 ADTs library.
//!
//! Each data structure reports its own precondition violations with a small
//! error enum (see [`StackError`], [`QueueError`], [`BagError`]). This module
//! gathers them, together with configuration and logging failures, into
//! [`AdtError`] for callers that want a single error type.

use thiserror::Error;

pub mod config;

pub use crate::data_structures::{BagError, QueueError, StackError};

/// Result type alias used throughout the M269 ADTs library.
pub type AdtResult<T> = Result<T, AdtError>;

/// Core error enum for the M269 ADTs library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdtError {
    /// A stack operation was rejected.
    #[error("Stack error: {0}")]
    Stack(#[from] StackError),

    /// A queue operation was rejected.
    #[error("Queue error: {0}")]
    Queue(#[from] QueueError),

    /// A bag operation was rejected.
    #[error("Bag error: {0}")]
    Bag(#[from] BagError),

    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}

impl AdtError {
    /// Returns `true` if the error is a violated precondition of a data
    /// structure operation, as opposed to a setup failure.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, Self::Stack(_) | Self::Queue(_) | Self::Bag(_))
    }
}
