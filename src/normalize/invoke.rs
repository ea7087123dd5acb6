//! Invocation shorthand.

use crate::event::ScxmlEvent;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Something that can be invoked and driven by events.
pub trait Behavior: Send + Sync {
    /// State the behavior starts in.
    fn initial_state(&self) -> Value;

    /// Compute the next state from the current one and an event.
    fn transition(&self, state: &Value, event: &ScxmlEvent) -> Value;
}

/// Creates a behavior from the invoking machine's context and event.
pub type BehaviorCreator = Arc<dyn Fn(&Value, &ScxmlEvent) -> Arc<dyn Behavior> + Send + Sync>;

/// Structured source: a `type` naming a registered service plus parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvokeSourceDefinition {
    /// Registered service name
    #[serde(rename = "type")]
    pub source_type: String,
    /// Parameters passed to the service
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

impl InvokeSourceDefinition {
    /// Definition without parameters.
    pub fn new(source_type: impl Into<String>) -> Self {
        Self {
            source_type: source_type.into(),
            params: Map::new(),
        }
    }
}

/// What an invocation runs.
#[derive(Clone)]
pub enum InvokeSource {
    /// Name of a registered service
    Named(String),
    Definition(InvokeSourceDefinition),
    Creator(BehaviorCreator),
}

impl fmt::Debug for InvokeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Self::Definition(definition) => f.debug_tuple("Definition").field(definition).finish(),
            Self::Creator(_) => f.write_str("Creator(..)"),
        }
    }
}

/// Explicit invocation record.
#[derive(Clone, Debug)]
pub struct InvokeConfig {
    /// Invocation id, unique within the machine
    pub id: String,
    /// What to run
    pub src: InvokeSource,
    /// Forward every event the parent receives to the invoked service
    pub auto_forward: bool,
}

/// Any shorthand accepted where an invocation is expected.
#[derive(Clone)]
pub enum Invocable {
    /// Already explicit
    Config(InvokeConfig),
    /// A behavior value, invoked as-is
    Behavior(Arc<dyn Behavior>),
    /// A bare creator function
    Creator(BehaviorCreator),
    /// A source name
    Source(String),
    /// A structured source
    Definition(InvokeSourceDefinition),
}

impl Invocable {
    /// Wrap a behavior value.
    pub fn behavior(behavior: impl Behavior + 'static) -> Self {
        Self::Behavior(Arc::new(behavior))
    }

    /// Wrap a creator function.
    pub fn creator<F>(creator: F) -> Self
    where
        F: Fn(&Value, &ScxmlEvent) -> Arc<dyn Behavior> + Send + Sync + 'static,
    {
        Self::Creator(Arc::new(creator))
    }
}

impl From<&str> for Invocable {
    fn from(name: &str) -> Self {
        Self::Source(name.to_string())
    }
}

impl From<String> for Invocable {
    fn from(name: String) -> Self {
        Self::Source(name)
    }
}

impl From<InvokeConfig> for Invocable {
    fn from(config: InvokeConfig) -> Self {
        Self::Config(config)
    }
}

impl From<InvokeSourceDefinition> for Invocable {
    fn from(definition: InvokeSourceDefinition) -> Self {
        Self::Definition(definition)
    }
}

/// Resolve invocation shorthand into an explicit record with `id`.
///
/// Explicit records pass through unchanged. A behavior is wrapped in a
/// creator that returns it; everything else becomes the `src` directly.
pub fn to_invoke_config(invocable: impl Into<Invocable>, id: &str) -> InvokeConfig {
    let src = match invocable.into() {
        Invocable::Config(config) => return config,
        Invocable::Behavior(behavior) => {
            let creator: BehaviorCreator =
                Arc::new(move |_: &Value, _: &ScxmlEvent| Arc::clone(&behavior));
            InvokeSource::Creator(creator)
        }
        Invocable::Creator(creator) => InvokeSource::Creator(creator),
        Invocable::Source(name) => InvokeSource::Named(name),
        Invocable::Definition(definition) => InvokeSource::Definition(definition),
    };

    InvokeConfig {
        id: id.to_string(),
        src,
        auto_forward: false,
    }
}

/// Turn a source name into a structured `{type}` source.
///
/// Structured sources and creators pass through.
pub fn to_invoke_source(src: InvokeSource) -> InvokeSource {
    match src {
        InvokeSource::Named(name) => InvokeSource::Definition(InvokeSourceDefinition::new(name)),
        other => other,
    }
}

/// Id of the `index`-th invocation declared on a state node.
pub fn create_invoke_id(state_node_id: &str, index: usize) -> String {
    format!("{state_node_id}:invocation[{index}]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::to_scxml_event;
    use serde_json::json;

    struct Counter;

    impl Behavior for Counter {
        fn initial_state(&self) -> Value {
            json!(0)
        }

        fn transition(&self, state: &Value, event: &ScxmlEvent) -> Value {
            match (state.as_i64(), event.name.as_str()) {
                (Some(count), "INC") => json!(count + 1),
                _ => state.clone(),
            }
        }
    }

    #[test]
    fn explicit_config_passes_through() {
        let config = InvokeConfig {
            id: "original".to_string(),
            src: InvokeSource::Named("fetchUser".to_string()),
            auto_forward: true,
        };

        let resolved = to_invoke_config(config, "ignored");
        assert_eq!(resolved.id, "original");
        assert!(resolved.auto_forward);
        assert!(matches!(resolved.src, InvokeSource::Named(ref name) if name == "fetchUser"));
    }

    #[test]
    fn source_name_becomes_src() {
        let resolved = to_invoke_config("fetchUser", "user");
        assert_eq!(resolved.id, "user");
        assert!(!resolved.auto_forward);
        assert!(matches!(resolved.src, InvokeSource::Named(ref name) if name == "fetchUser"));
    }

    #[test]
    fn behavior_is_wrapped_in_creator() {
        let resolved = to_invoke_config(Invocable::behavior(Counter), "counter");

        let InvokeSource::Creator(creator) = resolved.src else {
            panic!("behavior should be wrapped in a creator");
        };
        let behavior = creator(&json!({}), &to_scxml_event("xstate.init", None));
        assert_eq!(behavior.initial_state(), json!(0));
        assert_eq!(
            behavior.transition(&json!(1), &to_scxml_event("INC", None)),
            json!(2)
        );
    }

    #[test]
    fn creator_is_used_directly() {
        let invocable =
            Invocable::creator(|_context, _event| Arc::new(Counter) as Arc<dyn Behavior>);
        let resolved = to_invoke_config(invocable, "spawned");

        assert_eq!(resolved.id, "spawned");
        assert!(matches!(resolved.src, InvokeSource::Creator(_)));
    }

    #[test]
    fn structured_source_is_kept() {
        let mut definition = InvokeSourceDefinition::new("poll");
        definition.params.insert("interval".to_string(), json!(500));

        let resolved = to_invoke_config(definition.clone(), "poller");
        assert!(matches!(resolved.src, InvokeSource::Definition(ref d) if *d == definition));
    }

    #[test]
    fn source_name_normalizes_to_definition() {
        let src = to_invoke_source(InvokeSource::Named("fetchUser".to_string()));
        assert!(
            matches!(src, InvokeSource::Definition(ref d) if d.source_type == "fetchUser" && d.params.is_empty())
        );

        let definition = InvokeSourceDefinition::new("poll");
        let src = to_invoke_source(InvokeSource::Definition(definition.clone()));
        assert!(matches!(src, InvokeSource::Definition(ref d) if *d == definition));
    }

    #[test]
    fn definition_serializes_flat() {
        let mut definition = InvokeSourceDefinition::new("poll");
        definition.params.insert("interval".to_string(), json!(500));

        assert_eq!(
            serde_json::to_value(&definition).unwrap(),
            json!({"type": "poll", "interval": 500})
        );
    }

    #[test]
    fn invoke_ids_name_state_and_index() {
        assert_eq!(create_invoke_id("app.loading", 0), "app.loading:invocation[0]");
    }
}
