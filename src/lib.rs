//! Statechart core: state values, event envelopes and definition normalization
//!
//! This crate holds the pure data layer underneath a hierarchical state-machine
//! interpreter. The interpreter itself lives elsewhere; everything here is a
//! function from inputs to values, apart from the small [`services`] shell that
//! owns the id counter and the warning sink.
//!
//! # Core Concepts
//!
//! - **State values**: Recursive description of the active configuration
//! - **Matching**: "Is the machine in state X" queries over state values
//! - **Event envelopes**: Raw events normalized into the protocol envelope
//! - **Normalization**: Definition shorthand resolved into uniform records
//!
//! # Example
//!
//! ```rust
//! use statechart_core::core::{matches_state, to_state_value, StateValue};
//! use statechart_core::event::{to_scxml_event, EventOrigin};
//!
//! let value = to_state_value("media.playing.fast", '.').unwrap();
//! assert_eq!(value.to_state_paths().len(), 1);
//!
//! let current = StateValue::compound([
//!     ("media", StateValue::compound([("playing", StateValue::atomic("fast"))])),
//!     ("volume", StateValue::atomic("muted")),
//! ]);
//! assert!(matches_state("media.playing", &current, '.').unwrap());
//! assert!(!matches_state("volume.loud", &current, '.').unwrap());
//!
//! let envelope = to_scxml_event("PLAY", None);
//! assert_eq!(envelope.name, "PLAY");
//! assert_eq!(envelope.origin, EventOrigin::External);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod event;
pub mod normalize;
pub mod services;

mod util;

// Re-export commonly used types
pub use crate::core::{matches_state, to_state_value, Guard, MachineState, ParseError, StateValue};
pub use crate::event::{to_scxml_event, EventObject, ScxmlEvent};
pub use crate::normalize::{to_transition_config_array, TransitionConfig};
pub use crate::services::Services;
