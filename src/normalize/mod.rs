//! Normalization of machine-definition shorthand.
//!
//! Machine definitions accept several shorthand forms for transitions,
//! invocations, context mappers and observers. Each form is modelled as a
//! closed enum and resolved here, once, into the uniform record the
//! interpreter consumes.

mod context;
mod invoke;
mod observer;
mod transition;

pub use context::{map_context, ContextMapper, FunctionMapper, MapperFn, PropertyMapper};
pub use invoke::{
    create_invoke_id, to_invoke_config, to_invoke_source, Behavior, BehaviorCreator, Invocable,
    InvokeConfig, InvokeSource, InvokeSourceDefinition,
};
pub use observer::{to_observer, CompleteFn, ErrorFn, NextFn, Observer, ObserverLike};
pub use transition::{
    normalize_target, to_transition_config_array, MachineRef, Target, TargetSpec,
    TransitionConfig, TransitionLike, TARGETLESS_KEY,
};

/// A single value or a list of values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Coerce to a list; a single value becomes a one-element list.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(values) => values.len(),
        }
    }

    /// True for an empty list.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Many(values)
    }
}
