//! Per-interpreter services.
//!
//! The only state this crate keeps across calls lives here: the identifier
//! counter and the diagnostic warning sink. Each interpreter owns its own
//! [`Services`], so independent interpreters have independent identifier
//! spaces. Hosts that want one process-wide instance can use
//! [`Services::global`].
//!
//! # Example
//!
//! ```rust
//! use statechart_core::services::Services;
//!
//! let services = Services::builder()
//!     .delimiter('/')
//!     .disable_warnings()
//!     .build();
//!
//! assert_eq!(services.unique_id(), "1");
//! assert!(services.matches_state("a", "a/b").unwrap());
//! ```

mod builder;
mod config;
mod ids;
mod warn;

#[cfg(test)]
mod testing;

pub use builder::ServicesBuilder;
pub use config::ServicesConfig;
pub use ids::IdGenerator;
pub use warn::{WarnFn, WarnSink};

use crate::core::{self, ParseError, StateInput, StatePath, StateValue};
use std::fmt;
use std::sync::OnceLock;

/// Identifier counter, warning sink and delimiter of one interpreter.
#[derive(Debug)]
pub struct Services {
    ids: IdGenerator,
    warn: WarnSink,
    delimiter: char,
}

impl Services {
    /// Services with default settings.
    pub fn new() -> Self {
        ServicesBuilder::new().build()
    }

    /// Start building services with custom settings.
    pub fn builder() -> ServicesBuilder {
        ServicesBuilder::new()
    }

    /// Services described by a configuration record.
    pub fn from_config(config: &ServicesConfig) -> Self {
        ServicesBuilder::from_config(config).build()
    }

    /// Process-wide instance with default settings.
    pub fn global() -> &'static Services {
        static GLOBAL: OnceLock<Services> = OnceLock::new();
        GLOBAL.get_or_init(Services::new)
    }

    /// Next unique identifier, as lowercase hex.
    pub fn unique_id(&self) -> String {
        self.ids.next_id()
    }

    /// The identifier counter.
    pub fn ids(&self) -> &IdGenerator {
        &self.ids
    }

    /// Separator used for state ids.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn warn_sink(&self) -> &WarnSink {
        &self.warn
    }

    /// Emit `message` unless `condition` holds.
    pub fn warn(&self, condition: bool, message: &str) {
        self.warn.warn(condition, message);
    }

    /// Report an invocation error that no `onError` handler picked up.
    ///
    /// `current` is the error at the point it was noticed, if it differs
    /// from the error the invocation originally raised.
    pub fn report_unhandled_invocation_error(
        &self,
        invoke_id: &str,
        original: &dyn fmt::Display,
        current: Option<&dyn fmt::Display>,
    ) {
        let message = match current {
            None => format!(
                "Missing onError handler for invocation '{invoke_id}', error was '{original}'."
            ),
            Some(current) => format!(
                "Missing onError handler and/or unhandled exception for invocation \
                 '{invoke_id}'. Original error: '{original}'. Current error is '{current}'."
            ),
        };
        self.warn.emit(&message);
    }

    /// [`core::to_state_value`] with this instance's delimiter.
    pub fn to_state_value(&self, input: impl Into<StateInput>) -> Result<StateValue, ParseError> {
        core::to_state_value(input, self.delimiter)
    }

    /// [`core::to_state_path`] with this instance's delimiter.
    pub fn to_state_path(&self, id: &str) -> StatePath {
        core::to_state_path(id, self.delimiter)
    }

    /// [`core::matches_state`] with this instance's delimiter.
    pub fn matches_state(
        &self,
        queried: impl Into<StateInput>,
        actual: impl Into<StateInput>,
    ) -> Result<bool, ParseError> {
        core::matches_state(queried, actual, self.delimiter)
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn capturing() -> (Services, Arc<Mutex<Vec<String>>>) {
        let messages = Arc::new(Mutex::new(Vec::new()));
        let handle = Arc::clone(&messages);
        let services = Services::builder()
            .warn_with(move |message| handle.lock().unwrap().push(message.to_string()))
            .build();
        (services, messages)
    }

    #[test]
    fn instances_have_isolated_id_spaces() {
        let first = Services::new();
        let second = Services::new();

        assert_eq!(first.unique_id(), "1");
        assert_eq!(first.unique_id(), "2");
        assert_eq!(second.unique_id(), "1");
    }

    #[test]
    fn global_instance_is_shared() {
        let before = Services::global().ids().current();
        Services::global().unique_id();
        assert!(Services::global().ids().current() > before);
        assert!(std::ptr::eq(Services::global(), Services::global()));
    }

    #[test]
    fn config_drives_builder() {
        let config = ServicesConfig {
            delimiter: '/',
            warnings: false,
            id_seed: 15,
        };
        let services = Services::from_config(&config);

        assert_eq!(services.delimiter(), '/');
        assert!(!services.warn_sink().is_enabled());
        assert_eq!(services.unique_id(), "10");
    }

    #[test]
    fn delimiter_is_applied_to_state_helpers() {
        let services = Services::builder().delimiter('/').build();

        assert_eq!(services.to_state_path("a/b"), vec!["a", "b"]);
        assert_eq!(
            services.to_state_value("a/b"),
            Ok(StateValue::compound([("a", StateValue::atomic("b"))]))
        );
        assert!(services.matches_state("a", "a/b").unwrap());
        assert!(!services.matches_state("a.b", "a/b").unwrap());
    }

    #[test]
    fn warn_goes_through_sink() {
        let (services, messages) = capturing();
        services.warn(true, "quiet");
        services.warn(false, "loud");

        assert_eq!(*messages.lock().unwrap(), vec!["loud"]);
    }

    #[test]
    fn unhandled_invocation_error_is_reported_not_raised() {
        let (services, messages) = capturing();

        services.report_unhandled_invocation_error("fetch", &"timeout", None);
        services.report_unhandled_invocation_error("fetch", &"timeout", Some(&"panic in handler"));

        let messages = messages.lock().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(
            messages[0],
            "Missing onError handler for invocation 'fetch', error was 'timeout'."
        );
        assert!(messages[1].contains("Original error: 'timeout'"));
        assert!(messages[1].contains("Current error is 'panic in handler'"));
    }

    #[test]
    fn disabled_warnings_report_nothing() {
        let messages = Arc::new(Mutex::new(Vec::<String>::new()));
        let handle = Arc::clone(&messages);
        let services = Services::builder()
            .warn_with(move |message| handle.lock().unwrap().push(message.to_string()))
            .disable_warnings()
            .build();

        let logged = testing::with_captured_tracing(|| {
            services.report_unhandled_invocation_error("fetch", &"timeout", None);
            services.warn(false, "dropped");
        });

        assert!(messages.lock().unwrap().is_empty());
        assert!(logged.is_empty());
    }

    #[test]
    fn default_services_report_through_tracing() {
        let services = Services::new();

        let logged = testing::with_captured_tracing(|| {
            services.report_unhandled_invocation_error("fetch", &"timeout", None);
        });

        assert!(logged.contains("WARN"));
        assert!(logged.contains("Missing onError handler for invocation 'fetch'"));
    }

    #[test]
    fn config_without_warnings_silences_tracing() {
        let config = ServicesConfig::from_json(r#"{"warnings": false}"#).unwrap();
        let services = Services::from_config(&config);

        let logged = testing::with_captured_tracing(|| services.warn(false, "dropped"));
        assert!(logged.is_empty());
    }
}
