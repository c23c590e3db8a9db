//! Error types shared by the book and its callers
//!
//! Value-level errors only; book state errors live with the book.

use crate::order::Side;
use thiserror::Error;

/// Order-specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("Invalid side: expected {expected}, got {actual}")]
    InvalidSide { expected: Side, actual: Side },

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}
