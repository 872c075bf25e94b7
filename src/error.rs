use std::error::Error;
use thiserror::Error;

/// Boxed error produced by a fallible user callback
pub type CallbackError = Box<dyn Error + Send + Sync + 'static>;

/// Errors surfaced by cursor operations
#[derive(Debug, Error)]
pub enum SequenceError {
    /// `current()` was called while the cursor was not positioned on an element
    #[error("the operation is invalid for the current state of the {cursor} cursor")]
    InvalidState { cursor: &'static str },

    /// A fallible callback supplied to `try_map`, `try_filter`, ... returned an error
    #[error("callback failed: {0}")]
    Callback(#[source] CallbackError),
}

impl SequenceError {
    pub fn invalid_state(cursor: &'static str) -> Self {
        SequenceError::InvalidState { cursor }
    }

    pub fn callback(error: impl Into<CallbackError>) -> Self {
        SequenceError::Callback(error.into())
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, SequenceError::InvalidState { .. })
    }
}

pub type Result<T, E = SequenceError> = std::result::Result<T, E>;
