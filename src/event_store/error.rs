//! Event Store Errors
//!
//! Error types for event store operations.

/// Errors that can occur in the event store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventStoreError {
    /// Business rule violation on creation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Referenced event does not exist
    #[error("Event not found: id={0}")]
    NotFound(i64),
}

impl EventStoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Check if this error is a missing-event error
    pub fn is_not_found(&self) -> bool {
        matches!(self, EventStoreError::NotFound(_))
    }
}
