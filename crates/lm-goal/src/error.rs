// error.rs — Error types for the goal subsystem.
//
// Goal operations themselves never fail: blank input and unknown indices are
// no-ops. Only event delivery can go wrong.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GoalError {
    /// Failed to serialize an event.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A notification sink rejected an event (non-fatal).
    #[error("notification error: {0}")]
    NotificationError(String),
}
