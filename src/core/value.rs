//! Recursive state values.
//!
//! A state value describes the active configuration of a statechart: either a
//! single atomic state name, or a record of active named regions. A record with
//! one key is an ordinary nested compound state; a record with several keys
//! has orthogonal (parallel) regions active at the same time.

use super::path::{StatePath, DEFAULT_DELIMITER};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The active configuration of a machine.
///
/// Serializes untagged: an atomic value is a JSON string, a compound value is
/// a JSON object of regions.
///
/// # Example
///
/// ```rust
/// use statechart_core::core::StateValue;
///
/// let value: StateValue = serde_json::from_str(r#"{"door": {"locked": {}}, "light": "on"}"#).unwrap();
/// assert!(value.is_parallel());
/// assert_eq!(value.to_state_paths().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateValue {
    /// A leaf region with no active children
    Atomic(String),
    /// One or more simultaneously active named regions
    Compound(BTreeMap<String, StateValue>),
}

impl StateValue {
    /// Create an atomic state value.
    pub fn atomic(name: impl Into<String>) -> Self {
        Self::Atomic(name.into())
    }

    /// Create a compound state value from `(region, value)` pairs.
    pub fn compound<I, K>(regions: I) -> Self
    where
        I: IntoIterator<Item = (K, StateValue)>,
        K: Into<String>,
    {
        Self::Compound(
            regions
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// The childless marker: an empty record under a key names a leaf.
    pub fn leaf() -> Self {
        Self::Compound(BTreeMap::new())
    }

    /// True for a bare state name.
    pub fn is_atomic(&self) -> bool {
        matches!(self, Self::Atomic(_))
    }

    /// True for an empty record, the idiom for "this key has no children".
    pub fn is_leaf_marker(&self) -> bool {
        matches!(self, Self::Compound(regions) if regions.is_empty())
    }

    /// True if parallel regions are active anywhere in the tree.
    pub fn is_parallel(&self) -> bool {
        match self {
            Self::Atomic(_) => false,
            Self::Compound(regions) => {
                regions.len() > 1 || regions.values().any(StateValue::is_parallel)
            }
        }
    }

    /// Active regions of a compound value.
    pub fn regions(&self) -> Option<&BTreeMap<String, StateValue>> {
        match self {
            Self::Atomic(_) => None,
            Self::Compound(regions) => Some(regions),
        }
    }

    /// Enumerate every active leaf path, one per terminal region.
    ///
    /// Regions are visited in key order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statechart_core::core::StateValue;
    ///
    /// let value = StateValue::compound([
    ///     ("a", StateValue::leaf()),
    ///     ("b", StateValue::compound([("c", StateValue::atomic("d"))])),
    /// ]);
    ///
    /// assert_eq!(
    ///     value.to_state_paths(),
    ///     vec![vec!["a".to_string()], vec!["b".into(), "c".into(), "d".into()]]
    /// );
    /// ```
    pub fn to_state_paths(&self) -> Vec<StatePath> {
        match self {
            // An empty name carries no region, same as an absent value.
            Self::Atomic(name) if name.is_empty() => vec![Vec::new()],
            Self::Atomic(name) => vec![vec![name.clone()]],
            Self::Compound(regions) => regions
                .iter()
                .flat_map(|(key, sub)| {
                    if sub.is_leaf_marker() {
                        return vec![vec![key.clone()]];
                    }
                    sub.to_state_paths()
                        .into_iter()
                        .map(|sub_path| {
                            let mut path = Vec::with_capacity(sub_path.len() + 1);
                            path.push(key.clone());
                            path.extend(sub_path);
                            path
                        })
                        .collect()
                })
                .collect(),
        }
    }

    /// Join a single-branch value into a delimited string.
    ///
    /// A region whose value is `{}` or an empty name ends the string, the
    /// same way [`to_state_paths`](Self::to_state_paths) ends its path there.
    ///
    /// Returns `None` when parallel regions are active, since that
    /// configuration has no lossless string form.
    pub fn to_path_string(&self, delimiter: char) -> Option<String> {
        match self {
            Self::Atomic(name) => Some(name.clone()),
            Self::Compound(regions) => {
                if regions.len() != 1 {
                    return None;
                }
                let (key, sub) = regions.iter().next()?;
                if sub.is_leaf_marker() || matches!(sub, Self::Atomic(name) if name.is_empty()) {
                    return Some(key.clone());
                }
                sub.to_path_string(delimiter)
                    .map(|rest| format!("{key}{delimiter}{rest}"))
            }
        }
    }

    /// Every active state id, ancestors included, as delimited strings.
    ///
    /// Ids at one level are listed before the ids nested below them.
    pub fn to_strings(&self, delimiter: char) -> Vec<String> {
        match self {
            Self::Atomic(name) if name.is_empty() => Vec::new(),
            Self::Atomic(name) => vec![name.clone()],
            Self::Compound(regions) => {
                let mut ids: Vec<String> = regions.keys().cloned().collect();
                for (key, sub) in regions {
                    ids.extend(
                        sub.to_strings(delimiter)
                            .into_iter()
                            .map(|id| format!("{key}{delimiter}{id}")),
                    );
                }
                ids
            }
        }
    }
}

impl From<&str> for StateValue {
    fn from(name: &str) -> Self {
        Self::atomic(name)
    }
}

impl From<String> for StateValue {
    fn from(name: String) -> Self {
        Self::Atomic(name)
    }
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_path_string(DEFAULT_DELIMITER) {
            Some(id) => f.write_str(&id),
            None => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

/// Leaf paths of a possibly absent state value.
///
/// An absent value has exactly one leaf path: the empty path.
pub fn to_state_paths(value: Option<&StateValue>) -> Vec<StatePath> {
    match value {
        None => vec![Vec::new()],
        Some(value) => value.to_state_paths(),
    }
}

#[derive(Default)]
struct PathTree {
    children: BTreeMap<String, PathTree>,
}

impl PathTree {
    fn insert(&mut self, path: &[String]) {
        if let Some((head, rest)) = path.split_first() {
            self.children.entry(head.clone()).or_default().insert(rest);
        }
    }

    fn into_value(self) -> StateValue {
        if self.children.len() == 1 {
            if let Some((name, child)) = self.children.iter().next() {
                if child.children.is_empty() {
                    return StateValue::Atomic(name.clone());
                }
            }
        }
        StateValue::Compound(
            self.children
                .into_iter()
                .map(|(key, child)| {
                    let value = if child.children.is_empty() {
                        StateValue::leaf()
                    } else {
                        child.into_value()
                    };
                    (key, value)
                })
                .collect(),
        )
    }
}

/// Merge leaf paths back into a single state value.
///
/// Returns `None` when no non-empty path is given. A path that is a prefix
/// of another path is absorbed by the longer one.
///
/// # Example
///
/// ```rust
/// use statechart_core::core::{paths_to_state_value, StateValue};
///
/// let paths = vec![
///     vec!["a".to_string(), "b".to_string()],
///     vec!["c".to_string()],
/// ];
/// let value = paths_to_state_value(&paths).unwrap();
///
/// assert_eq!(
///     value,
///     StateValue::compound([("a", StateValue::atomic("b")), ("c", StateValue::leaf())])
/// );
/// ```
pub fn paths_to_state_value(paths: &[StatePath]) -> Option<StateValue> {
    let mut tree = PathTree::default();
    for path in paths {
        tree.insert(path);
    }
    if tree.children.is_empty() {
        return None;
    }
    Some(tree.into_value())
}
