//! Build errors for transition builders.

use thiserror::Error;

/// Errors that can occur when building transition configs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Triggering event not specified. Call .on(event) before .build()")]
    MissingEvent,

    #[error("A targetless transition cannot also have targets")]
    TargetlessWithTargets,
}
