//! Event normalization.
//!
//! Raw events arrive as bare type names, numbers or structured objects.
//! This module turns them into event objects and wraps those in the
//! protocol envelope consumed by the transition algorithm, and classifies
//! envelopes that report errors.

mod envelope;
mod error;
mod raw;
pub mod reserved;

pub use envelope::{
    is_scxml_error_event, is_scxml_event_value, to_scxml_event, EnvelopeKind, EnvelopeOverrides,
    EventInput, EventOrigin, ScxmlEvent, SCXML_DISCRIMINANT,
};
pub use error::EventTypeError;
pub use raw::{get_event_type, to_event_object, EventObject, RawEvent};
