//! Reasons a machine-state checkpoint cannot be written or restored.

use thiserror::Error;

/// Errors that can occur when writing or restoring a checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The captured state could not be encoded as JSON
    #[error("Cannot encode checkpoint: {0}")]
    Encode(#[source] serde_json::Error),

    /// The input is not a JSON checkpoint
    #[error("Cannot decode checkpoint: {0}")]
    Decode(#[source] serde_json::Error),

    /// Written by a different checkpoint format
    #[error("Checkpoint format {found} is not supported, expected {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The captured state value is a compound value with no regions
    #[error("Checkpoint {id} has no active regions")]
    EmptyConfiguration { id: String },

    /// `event` and `_event.data` name different events
    #[error("Checkpoint {id} records event '{event}' but its envelope carries '{envelope}'")]
    EventMismatch {
        id: String,
        event: String,
        envelope: String,
    },
}
