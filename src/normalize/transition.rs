//! Transition shorthand.

use super::OneOrMany;
use serde::{Deserialize, Serialize};

/// Target id that means "no target": the transition stays in place.
pub const TARGETLESS_KEY: &str = "";

/// Reference to another machine definition.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MachineRef {
    /// Id of the referenced machine
    pub id: String,
}

impl MachineRef {
    /// Reference the machine with `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// A single transition target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// State id, relative or absolute
    Id(String),
    /// Machine reference
    Machine(MachineRef),
}

impl Target {
    /// The targetless sentinel.
    pub fn targetless() -> Self {
        Self::Id(TARGETLESS_KEY.to_string())
    }

    /// True for the targetless sentinel.
    pub fn is_targetless(&self) -> bool {
        matches!(self, Self::Id(id) if id == TARGETLESS_KEY)
    }
}

impl From<&str> for Target {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<String> for Target {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

impl From<MachineRef> for Target {
    fn from(machine: MachineRef) -> Self {
        Self::Machine(machine)
    }
}

/// One target or several, as written in a definition.
pub type TargetSpec = OneOrMany<Target>;

/// Explicit transition record.
///
/// `event` is filled in by [`to_transition_config_array`]; any value set
/// beforehand is replaced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionConfig {
    /// Target(s); `None` is a no-op transition
    pub target: Option<TargetSpec>,
    /// Name of the guard condition
    pub guard: Option<String>,
    /// Names of the actions to execute
    pub actions: Vec<String>,
    /// Internal transitions do not exit the source state
    pub internal: Option<bool>,
    /// Human-readable description
    pub description: Option<String>,
    /// Event that triggers the transition
    pub event: String,
}

impl TransitionConfig {
    /// Normalized targets of this transition, see [`normalize_target`].
    pub fn normalized_target(&self) -> Option<Vec<Target>> {
        normalize_target(self.target.clone())
    }
}

/// Any shorthand accepted where a transition is expected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionLike {
    /// No target: a no-op transition
    Undefined,
    Target(Target),
    Config(TransitionConfig),
}

impl From<&str> for TransitionLike {
    fn from(id: &str) -> Self {
        Self::Target(id.into())
    }
}

impl From<Option<&str>> for TransitionLike {
    fn from(id: Option<&str>) -> Self {
        id.map_or(Self::Undefined, Self::from)
    }
}

impl From<Target> for TransitionLike {
    fn from(target: Target) -> Self {
        Self::Target(target)
    }
}

impl From<MachineRef> for TransitionLike {
    fn from(machine: MachineRef) -> Self {
        Self::Target(machine.into())
    }
}

impl From<TransitionConfig> for TransitionLike {
    fn from(config: TransitionConfig) -> Self {
        Self::Config(config)
    }
}

impl From<TransitionLike> for OneOrMany<TransitionLike> {
    fn from(transition: TransitionLike) -> Self {
        Self::One(transition)
    }
}

impl From<&str> for OneOrMany<TransitionLike> {
    fn from(id: &str) -> Self {
        Self::One(id.into())
    }
}

impl From<Option<&str>> for OneOrMany<TransitionLike> {
    fn from(id: Option<&str>) -> Self {
        Self::One(id.into())
    }
}

impl From<MachineRef> for OneOrMany<TransitionLike> {
    fn from(machine: MachineRef) -> Self {
        Self::One(machine.into())
    }
}

impl From<TransitionConfig> for OneOrMany<TransitionLike> {
    fn from(config: TransitionConfig) -> Self {
        Self::One(config.into())
    }
}

/// Expand transition shorthand into explicit records tagged with `event`.
///
/// A single value is treated as a one-element list. Undefined, id and
/// machine shorthand become `{target, event}`; explicit records keep their
/// fields and get `event` set.
///
/// ```rust
/// use statechart_core::normalize::{to_transition_config_array, Target, TransitionLike};
///
/// let configs = to_transition_config_array("EVENT", "target");
/// assert_eq!(configs.len(), 1);
/// assert_eq!(configs[0].event, "EVENT");
/// assert_eq!(configs[0].normalized_target(), Some(vec![Target::from("target")]));
///
/// let configs = to_transition_config_array("EVENT", TransitionLike::Undefined);
/// assert_eq!(configs.len(), 1);
/// assert!(configs[0].target.is_none());
/// ```
pub fn to_transition_config_array(
    event: &str,
    config_like: impl Into<OneOrMany<TransitionLike>>,
) -> Vec<TransitionConfig> {
    config_like
        .into()
        .into_vec()
        .into_iter()
        .map(|transition| match transition {
            TransitionLike::Undefined => TransitionConfig {
                event: event.to_string(),
                ..Default::default()
            },
            TransitionLike::Target(target) => TransitionConfig {
                target: Some(OneOrMany::One(target)),
                event: event.to_string(),
                ..Default::default()
            },
            TransitionLike::Config(config) => TransitionConfig {
                event: event.to_string(),
                ..config
            },
        })
        .collect()
}

/// Normalize a target to a list, or `None` for "stay in place".
///
/// Both an absent target and the targetless sentinel mean no region change.
pub fn normalize_target(target: Option<TargetSpec>) -> Option<Vec<Target>> {
    match target {
        None => None,
        Some(OneOrMany::One(target)) if target.is_targetless() => None,
        Some(spec) => Some(spec.into_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_shorthand_expands_to_target() {
        assert_eq!(
            to_transition_config_array("EVENT", "target"),
            vec![TransitionConfig {
                target: Some(OneOrMany::One(Target::from("target"))),
                event: "EVENT".to_string(),
                ..Default::default()
            }]
        );
    }

    #[test]
    fn undefined_is_a_single_noop_transition() {
        assert_eq!(
            to_transition_config_array("EVENT", TransitionLike::Undefined),
            vec![TransitionConfig {
                target: None,
                event: "EVENT".to_string(),
                ..Default::default()
            }]
        );
        assert_eq!(to_transition_config_array("EVENT", None::<&str>).len(), 1);
    }

    #[test]
    fn machine_reference_expands_to_target() {
        let configs = to_transition_config_array("SPAWN", MachineRef::new("child"));
        assert_eq!(
            configs[0].target,
            Some(OneOrMany::One(Target::Machine(MachineRef::new("child"))))
        );
    }

    #[test]
    fn explicit_record_keeps_fields_and_gets_event() {
        let config = TransitionConfig {
            target: Some(OneOrMany::Many(vec!["a".into(), "b".into()])),
            guard: Some("isValid".to_string()),
            actions: vec!["log".to_string()],
            event: "STALE".to_string(),
            ..Default::default()
        };

        let configs = to_transition_config_array("SUBMIT", config.clone());
        assert_eq!(
            configs,
            vec![TransitionConfig {
                event: "SUBMIT".to_string(),
                ..config
            }]
        );
    }

    #[test]
    fn list_keeps_order_and_tags_every_element() {
        let configs = to_transition_config_array(
            "NEXT",
            vec![
                TransitionLike::from("first"),
                TransitionLike::Undefined,
                TransitionLike::Config(TransitionConfig {
                    guard: Some("ready".to_string()),
                    ..Default::default()
                }),
            ],
        );

        assert_eq!(configs.len(), 3);
        assert!(configs.iter().all(|c| c.event == "NEXT"));
        assert_eq!(configs[0].normalized_target(), Some(vec![Target::from("first")]));
        assert!(configs[1].target.is_none());
        assert_eq!(configs[2].guard.as_deref(), Some("ready"));
    }

    #[test]
    fn targetless_and_absent_normalize_to_none() {
        assert_eq!(normalize_target(None), None);
        assert_eq!(normalize_target(Some(OneOrMany::One(Target::targetless()))), None);
    }

    #[test]
    fn targets_normalize_to_lists() {
        assert_eq!(
            normalize_target(Some(OneOrMany::One("a".into()))),
            Some(vec![Target::from("a")])
        );
        assert_eq!(
            normalize_target(Some(OneOrMany::Many(vec!["a".into(), "b".into()]))),
            Some(vec![Target::from("a"), Target::from("b")])
        );
    }

    #[test]
    fn targetless_id_shorthand_keeps_sentinel_until_normalized() {
        let configs = to_transition_config_array("TICK", TARGETLESS_KEY);
        assert_eq!(configs[0].target, Some(OneOrMany::One(Target::targetless())));
        assert_eq!(configs[0].normalized_target(), None);
    }
}
