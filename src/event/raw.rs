//! Raw events and event objects.

use super::error::EventTypeError;
use crate::util::json_kind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

const TYPE_KEY: &str = "type";

/// Structured event: a `type` plus arbitrary payload fields.
///
/// Serializes flat, as `{"type": ..., ...payload}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventObject {
    /// Event type
    #[serde(rename = "type")]
    pub event_type: String,
    /// Every field other than `type`
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl EventObject {
    /// Create an event object with an empty payload.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            payload: Map::new(),
        }
    }

    /// Add a payload field.
    ///
    /// A string `"type"` replaces the event type; any other `"type"` value is
    /// dropped, so the payload never carries a second `type` key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        if key != TYPE_KEY {
            self.payload.insert(key, value);
        } else if let Value::String(event_type) = value {
            self.event_type = event_type;
        }
        self
    }

    /// Read a payload field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }
}

/// An event as supplied by a caller.
#[derive(Clone, Debug, PartialEq)]
pub enum RawEvent {
    /// Bare event type
    Type(String),
    /// Bare numeric event type, coerced to a string
    Number(Number),
    /// Structured event
    Object(EventObject),
}

impl RawEvent {
    /// The event's type as a string.
    pub fn event_type(&self) -> String {
        match self {
            Self::Type(event_type) => event_type.clone(),
            Self::Number(number) => number.to_string(),
            Self::Object(event) => event.event_type.clone(),
        }
    }
}

impl From<&str> for RawEvent {
    fn from(event_type: &str) -> Self {
        Self::Type(event_type.to_string())
    }
}

impl From<String> for RawEvent {
    fn from(event_type: String) -> Self {
        Self::Type(event_type)
    }
}

impl From<i64> for RawEvent {
    fn from(number: i64) -> Self {
        Self::Number(number.into())
    }
}

impl From<u64> for RawEvent {
    fn from(number: u64) -> Self {
        Self::Number(number.into())
    }
}

impl From<EventObject> for RawEvent {
    fn from(event: EventObject) -> Self {
        Self::Object(event)
    }
}

impl TryFrom<Value> for RawEvent {
    type Error = EventTypeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(event_type) => Ok(Self::Type(event_type)),
            Value::Number(number) => Ok(Self::Number(number)),
            Value::Object(mut record) => match record.remove(TYPE_KEY) {
                Some(Value::String(event_type)) => Ok(Self::Object(EventObject {
                    event_type,
                    payload: record,
                })),
                Some(_) => Err(EventTypeError::NonStringType),
                None => Err(EventTypeError::MissingType),
            },
            other => Err(EventTypeError::UnsupportedShape {
                found: json_kind(&other),
            }),
        }
    }
}

/// Read the type of an untyped event.
///
/// Strings and numbers are their own type; objects must carry a string
/// `type` field.
///
/// ```rust
/// use statechart_core::event::get_event_type;
/// use serde_json::json;
///
/// assert_eq!(get_event_type(&json!("TOGGLE")).unwrap(), "TOGGLE");
/// assert_eq!(get_event_type(&json!(42)).unwrap(), "42");
/// assert_eq!(get_event_type(&json!({"type": "TOGGLE", "on": true})).unwrap(), "TOGGLE");
/// assert!(get_event_type(&json!({"on": true})).is_err());
/// ```
pub fn get_event_type(event: &Value) -> Result<String, EventTypeError> {
    match event {
        Value::String(event_type) => Ok(event_type.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Object(record) => match record.get(TYPE_KEY) {
            Some(Value::String(event_type)) => Ok(event_type.clone()),
            Some(_) => Err(EventTypeError::NonStringType),
            None => Err(EventTypeError::MissingType),
        },
        other => Err(EventTypeError::UnsupportedShape {
            found: json_kind(other),
        }),
    }
}

/// Turn a raw event into an event object.
///
/// Bare types become `{type, ...payload}`; event objects pass through and
/// `payload` is ignored. A string `"type"` in `payload` wins over the bare
/// type, as spreading the payload last would; a non-string one is dropped.
pub fn to_event_object(event: impl Into<RawEvent>, payload: Option<Map<String, Value>>) -> EventObject {
    match event.into() {
        RawEvent::Object(event) => event,
        bare => {
            let mut payload = payload.unwrap_or_default();
            let event_type = match payload.remove(TYPE_KEY) {
                Some(Value::String(event_type)) => event_type,
                _ => bare.event_type(),
            };
            EventObject {
                event_type,
                payload,
            }
        }
    }
}
