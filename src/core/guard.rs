//! Guard predicates over state values.
//!
//! Guards are pure boolean functions of the machine's current configuration.
//! The most common one, "in state", is built on the containment query of
//! [`StateValue::is_satisfied_by`].

use super::error::ParseError;
use super::path::{to_state_value, StateInput};
use super::value::StateValue;
use std::fmt;

/// Pure predicate over the active configuration.
///
/// # Example
///
/// ```rust
/// use statechart_core::core::{Guard, StateValue};
///
/// let in_locked = Guard::in_state_id("door.locked", '.').unwrap();
///
/// let value = StateValue::compound([
///     ("door", StateValue::atomic("locked")),
///     ("light", StateValue::atomic("off")),
/// ]);
/// assert!(in_locked.check(&value));
/// assert!(!in_locked.check(&StateValue::atomic("door")));
/// ```
pub struct Guard {
    predicate: Box<dyn Fn(&StateValue) -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&StateValue) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Guard that passes while the configuration satisfies `query`.
    pub fn in_state(query: StateValue) -> Self {
        Self::new(move |actual| query.is_satisfied_by(actual))
    }

    /// Like [`Guard::in_state`], resolving the query first.
    pub fn in_state_id(
        query: impl Into<StateInput>,
        delimiter: char,
    ) -> Result<Self, ParseError> {
        Ok(Self::in_state(to_state_value(query, delimiter)?))
    }

    /// Guard that passes when `self` fails.
    pub fn negate(self) -> Self {
        Self::new(move |actual| !self.check(actual))
    }

    /// Evaluate the predicate against the current configuration.
    pub fn check(&self, state: &StateValue) -> bool {
        (self.predicate)(state)
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
