//! Containment queries over state values.
//!
//! `matches_state(query, actual)` asks whether the machine, currently in
//! `actual`, is in every state the query names. This is a refinement
//! relation, not equality: an actual configuration that is more specific
//! than the query still matches it.

use super::error::ParseError;
use super::path::{to_state_value, StateInput};
use super::value::StateValue;

impl StateValue {
    /// Check whether `actual` satisfies this value used as a query.
    ///
    /// Regions active in `actual` but not named by the query are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statechart_core::core::StateValue;
    ///
    /// let actual = StateValue::compound([("a", StateValue::atomic("b"))]);
    ///
    /// assert!(StateValue::atomic("a").is_satisfied_by(&actual));
    /// assert!(!actual.is_satisfied_by(&StateValue::atomic("a")));
    /// ```
    pub fn is_satisfied_by(&self, actual: &StateValue) -> bool {
        match (self, actual) {
            (StateValue::Atomic(query), StateValue::Atomic(name)) => query == name,
            // The query wants more detail than an atomic state has.
            (StateValue::Compound(_), StateValue::Atomic(_)) => false,
            (StateValue::Atomic(query), StateValue::Compound(regions)) => {
                regions.contains_key(query)
            }
            (StateValue::Compound(query), StateValue::Compound(regions)) => {
                query.iter().all(|(key, sub_query)| {
                    regions
                        .get(key)
                        .is_some_and(|sub_actual| sub_query.is_satisfied_by(sub_actual))
                })
            }
        }
    }
}

/// Check whether `actual` is in the state described by `queried`.
///
/// Both arguments are first resolved with [`to_state_value`].
///
/// # Example
///
/// ```rust
/// use statechart_core::core::{matches_state, StateValue};
///
/// let actual = StateValue::compound([
///     ("light", StateValue::atomic("on")),
///     ("door", StateValue::compound([("closed", StateValue::atomic("locked"))])),
/// ]);
///
/// assert!(matches_state("door.closed", actual.clone(), '.').unwrap());
/// assert!(matches_state("light", actual.clone(), '.').unwrap());
/// assert!(!matches_state("door.open", actual, '.').unwrap());
/// ```
pub fn matches_state(
    queried: impl Into<StateInput>,
    actual: impl Into<StateInput>,
    delimiter: char,
) -> Result<bool, ParseError> {
    let queried = to_state_value(queried, delimiter)?;
    let actual = to_state_value(actual, delimiter)?;
    Ok(queried.is_satisfied_by(&actual))
}
