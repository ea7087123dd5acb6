//! Protocol envelopes around events.
//!
//! Before transitions are evaluated every incoming event is wrapped in an
//! [`ScxmlEvent`]. Wrapping is idempotent: an envelope is never wrapped twice.

use super::error::EventTypeError;
use super::raw::{to_event_object, EventObject, RawEvent};
use super::reserved::{ERROR_EXECUTION, ERROR_PLATFORM};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Value of the `$$type` discriminant carried by every envelope.
pub const SCXML_DISCRIMINANT: &str = "scxml";

/// Discriminant marking a value as an envelope.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvelopeKind {
    #[default]
    #[serde(rename = "scxml")]
    Scxml,
}

/// Where an event came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventOrigin {
    /// Sent to the machine from outside
    #[default]
    External,
    /// Raised by the machine itself
    Internal,
    /// Raised by the runtime, e.g. done and error events
    Platform,
}

/// Canonical wrapped event.
///
/// Field names on the wire follow SCXML: `type` holds the origin
/// classification and `origin` the id of the sending session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScxmlEvent {
    /// Event type
    pub name: String,
    /// The structured event
    pub data: EventObject,
    /// Always `scxml`; marks the value as an envelope
    #[serde(rename = "$$type")]
    pub kind: EnvelopeKind,
    /// Origin classification
    #[serde(rename = "type", default)]
    pub origin: EventOrigin,
    /// Id of the `send` action that raised the event
    #[serde(rename = "sendid", default, skip_serializing_if = "Option::is_none")]
    pub send_id: Option<String>,
    /// Session that sent the event
    #[serde(rename = "origin", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Kind of the sending session
    #[serde(rename = "origintype", default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    /// Invocation the event came from
    #[serde(rename = "invokeid", default, skip_serializing_if = "Option::is_none")]
    pub invoke_id: Option<String>,
}

impl ScxmlEvent {
    /// See [`is_scxml_error_event`].
    pub fn is_error(&self) -> bool {
        is_scxml_error_event(self)
    }
}

/// Caller-supplied fields that take precedence over envelope defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnvelopeOverrides {
    /// Origin classification, `external` when unset
    pub origin: Option<EventOrigin>,
    /// Id of the `send` action that raised the event
    pub send_id: Option<String>,
    /// Session that sent the event
    pub source: Option<String>,
    /// Kind of the sending session
    pub source_type: Option<String>,
    /// Invocation the event came from
    pub invoke_id: Option<String>,
}

/// An event that may or may not already be wrapped.
#[derive(Clone, Debug, PartialEq)]
pub enum EventInput {
    Raw(RawEvent),
    Envelope(ScxmlEvent),
}

impl EventInput {
    /// True if the event is already wrapped.
    pub fn is_scxml_event(&self) -> bool {
        matches!(self, Self::Envelope(_))
    }
}

impl From<RawEvent> for EventInput {
    fn from(event: RawEvent) -> Self {
        Self::Raw(event)
    }
}

impl From<EventObject> for EventInput {
    fn from(event: EventObject) -> Self {
        Self::Raw(RawEvent::Object(event))
    }
}

impl From<&str> for EventInput {
    fn from(event_type: &str) -> Self {
        Self::Raw(event_type.into())
    }
}

impl From<String> for EventInput {
    fn from(event_type: String) -> Self {
        Self::Raw(event_type.into())
    }
}

impl From<ScxmlEvent> for EventInput {
    fn from(event: ScxmlEvent) -> Self {
        Self::Envelope(event)
    }
}

impl TryFrom<Value> for EventInput {
    type Error = EventTypeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if is_scxml_event_value(&value) {
            return serde_json::from_value(value)
                .map(Self::Envelope)
                .map_err(|e| EventTypeError::InvalidEnvelope(e.to_string()));
        }
        RawEvent::try_from(value).map(Self::Raw)
    }
}

/// True if an untyped value carries the envelope discriminant.
pub fn is_scxml_event_value(value: &Value) -> bool {
    value
        .as_object()
        .and_then(|record| record.get("$$type"))
        .and_then(Value::as_str)
        == Some(SCXML_DISCRIMINANT)
}

/// Wrap an event in an envelope.
///
/// Envelopes are returned unchanged, ignoring `overrides`. Anything else is
/// converted to an event object and wrapped with the `external` origin,
/// after which `overrides` are applied.
///
/// ```rust
/// use statechart_core::event::{to_scxml_event, EventOrigin};
///
/// let wrapped = to_scxml_event("TOGGLE", None);
/// assert_eq!(wrapped.name, "TOGGLE");
/// assert_eq!(wrapped.origin, EventOrigin::External);
///
/// let again = to_scxml_event(wrapped.clone(), None);
/// assert_eq!(again, wrapped);
/// ```
pub fn to_scxml_event(event: impl Into<EventInput>, overrides: Option<EnvelopeOverrides>) -> ScxmlEvent {
    let raw = match event.into() {
        EventInput::Envelope(envelope) => return envelope,
        EventInput::Raw(raw) => raw,
    };
    let data = to_event_object(raw, None);
    let overrides = overrides.unwrap_or_default();

    ScxmlEvent {
        name: data.event_type.clone(),
        data,
        kind: EnvelopeKind::Scxml,
        origin: overrides.origin.unwrap_or_default(),
        send_id: overrides.send_id,
        source: overrides.source,
        source_type: overrides.source_type,
        invoke_id: overrides.invoke_id,
    }
}

/// True for execution errors and platform errors.
pub fn is_scxml_error_event(event: &ScxmlEvent) -> bool {
    event.name == ERROR_EXECUTION || event.name.starts_with(ERROR_PLATFORM)
}
