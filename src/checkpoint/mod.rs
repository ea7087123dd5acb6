//! Checkpoint and restore of machine states.
//!
//! A checkpoint captures a [`MachineState`] so an interpreter can resume
//! from the same configuration after a restart.

use crate::core::MachineState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable checkpoint of a machine state.
///
/// # Example
///
/// ```rust
/// use statechart_core::checkpoint::Checkpoint;
/// use statechart_core::core::{MachineState, StateValue};
/// use serde_json::json;
///
/// let state = MachineState::initial(StateValue::atomic("idle"), json!({}));
/// let json = Checkpoint::new(state.clone()).to_json().unwrap();
///
/// let restored = Checkpoint::from_json(&json).unwrap().restore();
/// assert_eq!(restored, state);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Captured machine state
    pub state: MachineState,
}

impl Checkpoint {
    /// Capture `state` now, under a fresh id.
    pub fn new(state: MachineState) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            state,
        }
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(CheckpointError::Encode)
    }

    /// Deserialize from JSON and validate.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json).map_err(CheckpointError::Decode)?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Check that this checkpoint can be restored.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        if self.state.value.is_leaf_marker() {
            return Err(CheckpointError::EmptyConfiguration {
                id: self.id.clone(),
            });
        }
        let envelope = &self.state.scxml_event.data;
        if self.state.event != *envelope {
            return Err(CheckpointError::EventMismatch {
                id: self.id.clone(),
                event: self.state.event.event_type.clone(),
                envelope: envelope.event_type.clone(),
            });
        }
        Ok(())
    }

    /// Take the captured state.
    pub fn restore(self) -> MachineState {
        tracing::debug!(checkpoint = %self.id, value = %self.state.value, "restoring checkpoint");
        self.state
    }
}
