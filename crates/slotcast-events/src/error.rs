//! Event registry error types.

use thiserror::Error;

/// Errors returned by [`EventEmitter`](crate::EventEmitter) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// No listener is registered under the requested name.
    #[error("requested event does not exist: {name}")]
    EventNotFound {
        /// The event name that was looked up.
        name: String,
    },
}

impl EventError {
    pub(crate) fn not_found(name: impl Into<String>) -> Self {
        Self::EventNotFound { name: name.into() }
    }

    /// Check if this error reports a missing event.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EventNotFound { .. })
    }
}

/// Result type for event registry operations.
pub type EventResult<T> = Result<T, EventError>;
