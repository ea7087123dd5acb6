//! State value engine.
//!
//! This module owns the recursive representation of a machine's active
//! configuration:
//! - `StateValue` and conversion to and from paths and delimited ids
//! - Containment queries ("is the machine in state X")
//! - Enumeration of active leaf paths
//! - Guards and machine state records built on the above
//!
//! All logic in this module is pure (no side effects).

mod error;
mod guard;
mod matching;
mod path;
mod state;
mod value;

pub use error::ParseError;
pub use guard::Guard;
pub use matching::matches_state;
pub use path::{
    path_join, path_to_state_value, state_path_from_json, state_value_from_json, to_state_path,
    to_state_value, StateInput, StatePath, DEFAULT_DELIMITER,
};
pub use state::MachineState;
pub use value::{paths_to_state_value, to_state_paths, StateValue};
