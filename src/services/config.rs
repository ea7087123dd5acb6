//! Serializable services configuration.

use crate::core::DEFAULT_DELIMITER;
use serde::{Deserialize, Serialize};

/// Settings for a [`Services`](super::Services) instance.
///
/// Every field is optional when deserializing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    /// Path delimiter used for state ids
    pub delimiter: char,
    /// Emit diagnostic warnings; off in production builds
    pub warnings: bool,
    /// Starting value of the identifier counter
    pub id_seed: u64,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            warnings: true,
            id_seed: 0,
        }
    }
}

impl ServicesConfig {
    /// Parse configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
