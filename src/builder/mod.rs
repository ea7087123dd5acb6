//! Builder API for ergonomic construction of transition configs and state
//! values.

pub mod error;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use transition::TransitionConfigBuilder;

use crate::normalize::{OneOrMany, Target, TransitionConfig};

/// Create an unguarded transition to a single target.
///
/// # Example
///
/// ```
/// use statechart_core::builder::simple_transition;
///
/// let transition = simple_transition("TIMER", "yellow");
/// assert_eq!(transition.event, "TIMER");
/// assert!(transition.guard.is_none());
/// ```
pub fn simple_transition(event: &str, target: impl Into<Target>) -> TransitionConfig {
    TransitionConfig {
        target: Some(OneOrMany::One(target.into())),
        event: event.to_string(),
        ..Default::default()
    }
}

/// Create a transition to a single target with a named guard.
///
/// # Example
///
/// ```
/// use statechart_core::builder::guarded_transition;
///
/// let transition = guarded_transition("SUBMIT", "success", "isValid");
/// assert_eq!(transition.guard.as_deref(), Some("isValid"));
/// ```
pub fn guarded_transition(
    event: &str,
    target: impl Into<Target>,
    guard: impl Into<String>,
) -> TransitionConfig {
    TransitionConfig {
        guard: Some(guard.into()),
        ..simple_transition(event, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::to_transition_config_array;

    #[test]
    fn simple_transition_matches_shorthand() {
        let shorthand = to_transition_config_array("TIMER", "yellow");
        assert_eq!(vec![simple_transition("TIMER", "yellow")], shorthand);
    }

    #[test]
    fn guarded_transition_keeps_guard() {
        let transition = guarded_transition("SUBMIT", "success", "isValid");

        assert_eq!(transition.guard.as_deref(), Some("isValid"));
        assert_eq!(transition.normalized_target(), Some(vec![Target::from("success")]));
    }

    #[test]
    fn builder_and_helper_agree() {
        let built = TransitionConfigBuilder::new()
            .on("SUBMIT")
            .target("success")
            .guard("isValid")
            .build()
            .unwrap();

        assert_eq!(built, guarded_transition("SUBMIT", "success", "isValid"));
    }
}
