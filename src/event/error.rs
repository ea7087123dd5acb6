//! Event classification errors.

use thiserror::Error;

/// Errors that can occur when reading the type of an untyped event.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventTypeError {
    /// Structured event has no `type` field
    #[error("Event object has no 'type' field")]
    MissingType,

    /// Structured event has a `type` that is not a string
    #[error("Event 'type' must be a string")]
    NonStringType,

    /// Event is neither a string, a number nor an object
    #[error("Cannot read an event type from {found}")]
    UnsupportedShape { found: &'static str },

    /// Value carries the envelope discriminant but is not a valid envelope
    #[error("Invalid event envelope: {0}")]
    InvalidEnvelope(String),
}
