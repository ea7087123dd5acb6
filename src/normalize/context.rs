//! Context mappers.
//!
//! A mapper derives a record from the machine context and the current
//! event, e.g. the payload of an assignment or the data sent to a child.

use crate::event::{EventObject, ScxmlEvent};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Function of `(context, event)`.
pub type MapperFn = Arc<dyn Fn(&Value, &EventObject) -> Value + Send + Sync>;

/// One entry of a per-key mapper.
#[derive(Clone)]
pub enum PropertyMapper {
    /// Computed from context and event
    Compute(MapperFn),
    /// Copied as-is
    Literal(Value),
}

impl fmt::Debug for PropertyMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compute(_) => f.write_str("Compute(..)"),
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
        }
    }
}

/// Either a single function or a record of per-key entries.
///
/// The two forms do not mix. Adding an entry with
/// [`compute`](Self::compute) or [`literal`](Self::literal) to a function
/// mapper discards the function and starts an empty per-key record.
#[derive(Clone, Debug)]
pub enum ContextMapper {
    Function(FunctionMapper),
    Properties(BTreeMap<String, PropertyMapper>),
}

/// Newtype so [`ContextMapper`] can derive `Debug`.
#[derive(Clone)]
pub struct FunctionMapper(pub MapperFn);

impl fmt::Debug for FunctionMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FunctionMapper(..)")
    }
}

impl ContextMapper {
    /// Mapper whose result is the function's return value.
    pub fn function<F>(mapper: F) -> Self
    where
        F: Fn(&Value, &EventObject) -> Value + Send + Sync + 'static,
    {
        Self::Function(FunctionMapper(Arc::new(mapper)))
    }

    /// Empty per-key mapper, filled with [`compute`](Self::compute) and
    /// [`literal`](Self::literal).
    pub fn properties() -> Self {
        Self::Properties(BTreeMap::new())
    }

    /// Add a computed entry. A function mapper is replaced, not extended.
    pub fn compute<F>(self, key: impl Into<String>, mapper: F) -> Self
    where
        F: Fn(&Value, &EventObject) -> Value + Send + Sync + 'static,
    {
        self.with_entry(key.into(), PropertyMapper::Compute(Arc::new(mapper)))
    }

    /// Add a literal entry. A function mapper is replaced, not extended.
    pub fn literal(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with_entry(key.into(), PropertyMapper::Literal(value.into()))
    }

    fn with_entry(self, key: String, entry: PropertyMapper) -> Self {
        let mut entries = match self {
            Self::Properties(entries) => entries,
            Self::Function(_) => BTreeMap::new(),
        };
        entries.insert(key, entry);
        Self::Properties(entries)
    }
}

/// Derive a record from `context` and the envelope's event.
///
/// A function mapper's result is returned directly. A per-key mapper
/// yields an object with computed entries evaluated and literal entries
/// copied.
///
/// ```rust
/// use statechart_core::event::to_scxml_event;
/// use statechart_core::normalize::{map_context, ContextMapper};
/// use serde_json::json;
///
/// let mapper = ContextMapper::properties()
///     .compute("user", |context, _event| context["user"].clone())
///     .literal("retries", 3);
///
/// let mapped = map_context(&mapper, &json!({"user": "ada"}), &to_scxml_event("FETCH", None));
/// assert_eq!(mapped, json!({"user": "ada", "retries": 3}));
/// ```
pub fn map_context(mapper: &ContextMapper, context: &Value, event: &ScxmlEvent) -> Value {
    match mapper {
        ContextMapper::Function(FunctionMapper(function)) => function(context, &event.data),
        ContextMapper::Properties(entries) => {
            let mapped: Map<String, Value> = entries
                .iter()
                .map(|(key, entry)| {
                    let value = match entry {
                        PropertyMapper::Compute(function) => function(context, &event.data),
                        PropertyMapper::Literal(value) => value.clone(),
                    };
                    (key.clone(), value)
                })
                .collect();
            Value::Object(mapped)
        }
    }
}
