//! Machine state records.
//!
//! A machine state pairs the active configuration with the extended context
//! and the event that produced it. Anywhere a state value is expected, a
//! machine state can be supplied and its `value` is used unchanged.

use super::error::ParseError;
use super::matching::matches_state;
use super::path::{StateInput, StatePath};
use super::value::StateValue;
use crate::event::{reserved, to_scxml_event, EventObject, ScxmlEvent};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Snapshot of a running machine.
///
/// `event` is always the `data` of `scxml_event`; both are kept so the
/// record serializes with the `value`/`context`/`event`/`_event` fields
/// other tooling expects.
///
/// # Example
///
/// ```rust
/// use statechart_core::core::{MachineState, StateValue};
/// use serde_json::json;
///
/// let state = MachineState::initial(
///     StateValue::compound([("door", StateValue::atomic("locked"))]),
///     json!({"attempts": 0}),
/// );
///
/// assert!(state.matches("door", '.').unwrap());
/// assert_eq!(state.event.event_type, "xstate.init");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineState {
    /// Active configuration
    pub value: StateValue,
    /// Extended state
    pub context: Value,
    /// Event object that led to this state
    pub event: EventObject,
    /// Envelope of `event`
    #[serde(rename = "_event")]
    pub scxml_event: ScxmlEvent,
}

impl MachineState {
    /// Create a state reached through `scxml_event`.
    pub fn new(value: StateValue, context: Value, scxml_event: ScxmlEvent) -> Self {
        Self {
            value,
            context,
            event: scxml_event.data.clone(),
            scxml_event,
        }
    }

    /// Create the state a machine starts in, reached through the init event.
    pub fn initial(value: StateValue, context: Value) -> Self {
        Self::new(value, context, to_scxml_event(reserved::INIT, None))
    }

    /// Check whether this state is in the state described by `query`.
    pub fn matches(&self, query: impl Into<StateInput>, delimiter: char) -> Result<bool, ParseError> {
        matches_state(query, &self.value, delimiter)
    }

    /// Active leaf paths of this state.
    pub fn to_state_paths(&self) -> Vec<StatePath> {
        self.value.to_state_paths()
    }

    /// Every active state id, ancestors included.
    pub fn to_strings(&self, delimiter: char) -> Vec<String> {
        self.value.to_strings(delimiter)
    }
}
