//! Reserved event names.

/// Raised when executing an action fails.
pub const ERROR_EXECUTION: &str = "error.execution";

/// Prefix of errors raised by the platform, such as failed invocations.
pub const ERROR_PLATFORM: &str = "error.platform";

/// Prefix of events raised when a compound state reaches a final state.
pub const DONE_STATE: &str = "done.state";

/// Prefix of events raised when an invoked service completes.
pub const DONE_INVOKE: &str = "done.invoke";

/// Event that produces a machine's initial state.
pub const INIT: &str = "xstate.init";

/// `done.state.<id>`
pub fn done_state(id: &str) -> String {
    format!("{DONE_STATE}.{id}")
}

/// `done.invoke.<id>`
pub fn done_invoke(id: &str) -> String {
    format!("{DONE_INVOKE}.{id}")
}

/// `error.platform.<id>`
pub fn error_platform(id: &str) -> String {
    format!("{ERROR_PLATFORM}.{id}")
}
