//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
///
/// Two failure classes surface to callers: a caller-supplied value violating
/// a documented constraint, and a storage write that did not succeed.
/// Malformed persisted data is not an error; the stores recover from it
/// locally (empty collection, absent profile, invalid-timestamp sentinel)
/// and log a warning instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("persistence failure: {0}")]
    Persistence(String),
}

impl Error {
    /// Create an invalid-input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a persistence error
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
