//! Errors raised while converting path-like input into state values.

use thiserror::Error;

/// Errors that can occur when parsing state paths and state values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Input is neither a string nor a sequence of strings
    #[error("Cannot convert {found} to a state path")]
    UnsupportedShape { found: &'static str },

    /// A path sequence contains something other than a string
    #[error("State path segment {index} is not a string")]
    NonStringSegment { index: usize },

    /// A zero-length path has no state value
    #[error("Empty state path")]
    EmptyPath,

    /// A compound value has a region that is neither a string nor a record
    #[error("Region '{key}' must be a string or a record of regions")]
    InvalidRegion { key: String },
}
