//! Conversion between state paths, state ids and state values.

use super::error::ParseError;
use super::state::MachineState;
use super::value::StateValue;
use crate::util::json_kind;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Root-to-leaf sequence of region names.
pub type StatePath = Vec<String>;

/// Separator used between path segments unless configured otherwise.
pub const DEFAULT_DELIMITER: char = '.';

/// Split a state id into its path segments.
///
/// ```rust
/// use statechart_core::core::to_state_path;
///
/// assert_eq!(to_state_path("a.b.c", '.'), vec!["a", "b", "c"]);
/// ```
pub fn to_state_path(id: &str, delimiter: char) -> StatePath {
    id.split(delimiter).map(str::to_string).collect()
}

/// Classify an untyped path-like value.
///
/// Arrays of strings are returned as-is, strings are split on `delimiter`,
/// anything else is a [`ParseError`].
pub fn state_path_from_json(value: &Value, delimiter: char) -> Result<StatePath, ParseError> {
    match value {
        Value::String(id) => Ok(to_state_path(id, delimiter)),
        Value::Array(segments) => segments
            .iter()
            .enumerate()
            .map(|(index, segment)| {
                segment
                    .as_str()
                    .map(str::to_string)
                    .ok_or(ParseError::NonStringSegment { index })
            })
            .collect(),
        other => Err(ParseError::UnsupportedShape {
            found: json_kind(other),
        }),
    }
}

/// Join path segments with `delimiter`.
pub fn path_join<S: AsRef<str>>(path: &[S], delimiter: char) -> String {
    let mut joined = String::new();
    for (i, segment) in path.iter().enumerate() {
        if i > 0 {
            joined.push(delimiter);
        }
        joined.push_str(segment.as_ref());
    }
    joined
}

/// Build the state value addressed by a single path.
///
/// A one-segment path is atomic; longer paths nest one region per level,
/// with the last segment as an atomic value under its parent.
///
/// ```rust
/// use statechart_core::core::{path_to_state_value, StateValue};
///
/// let value = path_to_state_value(&["a", "b", "c"]).unwrap();
/// assert_eq!(
///     value,
///     StateValue::compound([("a", StateValue::compound([("b", StateValue::atomic("c"))]))])
/// );
/// ```
pub fn path_to_state_value<S: AsRef<str>>(path: &[S]) -> Result<StateValue, ParseError> {
    let (last, ancestors) = path.split_last().ok_or(ParseError::EmptyPath)?;
    let mut value = StateValue::atomic(last.as_ref());
    for segment in ancestors.iter().rev() {
        value = StateValue::Compound(BTreeMap::from([(segment.as_ref().to_string(), value)]));
    }
    Ok(value)
}

/// Anything that can be resolved to a state value.
#[derive(Clone, Debug, PartialEq)]
pub enum StateInput {
    /// Already a state value, passed through
    Value(StateValue),
    /// A path, converted segment by segment
    Path(StatePath),
    /// A delimited state id such as `"a.b.c"`
    Id(String),
    /// A machine state, whose current value is used as-is
    Machine(Box<MachineState>),
}

impl From<StateValue> for StateInput {
    fn from(value: StateValue) -> Self {
        Self::Value(value)
    }
}

impl From<&StateValue> for StateInput {
    fn from(value: &StateValue) -> Self {
        Self::Value(value.clone())
    }
}

impl From<StatePath> for StateInput {
    fn from(path: StatePath) -> Self {
        Self::Path(path)
    }
}

impl From<&[&str]> for StateInput {
    fn from(path: &[&str]) -> Self {
        Self::Path(path.iter().map(|s| s.to_string()).collect())
    }
}

impl From<&str> for StateInput {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<String> for StateInput {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

impl From<MachineState> for StateInput {
    fn from(state: MachineState) -> Self {
        Self::Machine(Box::new(state))
    }
}

impl From<&MachineState> for StateInput {
    fn from(state: &MachineState) -> Self {
        Self::Machine(Box::new(state.clone()))
    }
}

/// Resolve any [`StateInput`] to a state value.
///
/// ```rust
/// use statechart_core::core::{to_state_value, StateValue};
///
/// let value = to_state_value("a.b", '.').unwrap();
/// assert_eq!(value, StateValue::compound([("a", StateValue::atomic("b"))]));
///
/// let value = to_state_value("a", '.').unwrap();
/// assert_eq!(value, StateValue::atomic("a"));
/// ```
pub fn to_state_value(
    input: impl Into<StateInput>,
    delimiter: char,
) -> Result<StateValue, ParseError> {
    match input.into() {
        StateInput::Machine(state) => Ok(state.value),
        StateInput::Path(path) => path_to_state_value(&path),
        StateInput::Value(value) => Ok(value),
        StateInput::Id(id) => path_to_state_value(&to_state_path(&id, delimiter)),
    }
}

fn is_state_like(record: &Map<String, Value>) -> bool {
    ["value", "context", "event", "_event"]
        .iter()
        .all(|field| record.contains_key(*field))
}

fn decode_regions(record: &Map<String, Value>) -> Result<StateValue, ParseError> {
    record
        .iter()
        .map(|(key, sub)| -> Result<(String, StateValue), ParseError> {
            let value = match sub {
                Value::String(name) => StateValue::atomic(name.as_str()),
                Value::Object(nested) => decode_regions(nested)?,
                _ => return Err(ParseError::InvalidRegion { key: key.clone() }),
            };
            Ok((key.clone(), value))
        })
        .collect::<Result<BTreeMap<_, _>, _>>()
        .map(StateValue::Compound)
}

fn decode_state_value(value: &Value) -> Result<StateValue, ParseError> {
    match value {
        Value::String(name) => Ok(StateValue::atomic(name.as_str())),
        Value::Object(record) => decode_regions(record),
        other => Err(ParseError::UnsupportedShape {
            found: json_kind(other),
        }),
    }
}

/// Classify an untyped value and resolve it to a state value.
///
/// Machine-state-like records contribute their `value` field unchanged,
/// arrays are paths, strings are delimited ids and any other record is
/// taken to already be a state value.
pub fn state_value_from_json(value: &Value, delimiter: char) -> Result<StateValue, ParseError> {
    match value {
        Value::Object(record) if is_state_like(record) => decode_state_value(&record["value"]),
        Value::Object(record) => decode_regions(record),
        Value::Array(_) => path_to_state_value(&state_path_from_json(value, delimiter)?),
        Value::String(id) => to_state_value(id.as_str(), delimiter),
        other => Err(ParseError::UnsupportedShape {
            found: json_kind(other),
        }),
    }
}
