//! Error types shared by the containers and the analyzer

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violations surfaced to the caller.
///
/// A failed call leaves the container exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The operation needs at least one element
    #[error("container is empty")]
    EmptyContainer,

    /// Lookup or removal of a key that is not stored
    #[error("no such key")]
    NoSuchKey,

    /// Positional access outside of the valid range
    #[error("index {index} out of bounds for size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    /// A value that cannot be accepted (incomparable heap element, negative k, ...)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Create an index out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Error::IndexOutOfBounds { index, size }
    }
}
