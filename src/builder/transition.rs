//! Builder for constructing transition configs.

use crate::builder::error::BuildError;
use crate::normalize::{OneOrMany, Target, TransitionConfig};

/// Builder for [`TransitionConfig`] with a fluent API.
#[derive(Debug, Default)]
pub struct TransitionConfigBuilder {
    event: Option<String>,
    targets: Vec<Target>,
    targetless: bool,
    guard: Option<String>,
    actions: Vec<String>,
    internal: Option<bool>,
    description: Option<String>,
}

impl TransitionConfigBuilder {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    /// Add a target. May be called repeatedly.
    pub fn target(mut self, target: impl Into<Target>) -> Self {
        self.targets.push(target.into());
        self
    }

    /// Add several targets.
    pub fn targets<I, T>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Target>,
    {
        self.targets.extend(targets.into_iter().map(Into::into));
        self
    }

    /// Mark the transition as targetless: it stays in the current state.
    pub fn targetless(mut self) -> Self {
        self.targetless = true;
        self
    }

    /// Name the guard condition (optional).
    pub fn guard(mut self, guard: impl Into<String>) -> Self {
        self.guard = Some(guard.into());
        self
    }

    /// Add an action to execute (optional).
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.actions.push(action.into());
        self
    }

    /// Mark the transition internal or external (optional).
    pub fn internal(mut self, internal: bool) -> Self {
        self.internal = Some(internal);
        self
    }

    /// Attach a human-readable description (optional).
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build the transition config.
    pub fn build(self) -> Result<TransitionConfig, BuildError> {
        let event = self.event.ok_or(BuildError::MissingEvent)?;

        let target = if self.targetless {
            if !self.targets.is_empty() {
                return Err(BuildError::TargetlessWithTargets);
            }
            Some(OneOrMany::One(Target::targetless()))
        } else {
            let mut targets = self.targets;
            match targets.len() {
                0 => None,
                1 => targets.pop().map(OneOrMany::One),
                _ => Some(OneOrMany::Many(targets)),
            }
        };

        Ok(TransitionConfig {
            target,
            guard: self.guard,
            actions: self.actions,
            internal: self.internal,
            description: self.description,
            event,
        })
    }
}
