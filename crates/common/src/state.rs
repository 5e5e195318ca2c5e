//! Common state machine error types
//!
//! Shared by domain crates that model status lifecycles.

use thiserror::Error;

/// Errors that can occur during state transitions
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StateError {
    #[error("Invalid transition: cannot apply {event} from {from}")]
    InvalidTransition { from: String, event: String },

    #[error("Already {0}")]
    NoOp(String),
}

impl From<StateError> for crate::Error {
    fn from(err: StateError) -> Self {
        crate::Error::Conflict(err.to_string())
    }
}
