//! Diagnostic warning sink.

use std::fmt;
use std::sync::Arc;

/// Function receiving warning messages.
pub type WarnFn = Arc<dyn Fn(&str) + Send + Sync>;

/// Where diagnostic warnings go.
///
/// Warnings are delivered synchronously, never queued. The default sink
/// emits `tracing` warnings; a disabled sink drops everything.
#[derive(Clone)]
pub struct WarnSink {
    sink: Option<WarnFn>,
}

impl WarnSink {
    /// Sink that forwards to any function.
    pub fn new<F>(sink: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self {
            sink: Some(Arc::new(sink)),
        }
    }

    /// Sink that emits `tracing::warn!` events.
    pub fn tracing() -> Self {
        Self::new(|message| tracing::warn!("{}", message))
    }

    /// Sink that drops every warning.
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    /// False for a disabled sink.
    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Emit `message` unless `condition` holds.
    pub fn warn(&self, condition: bool, message: &str) {
        if !condition {
            self.emit(message);
        }
    }

    /// Emit `message` unconditionally.
    pub fn emit(&self, message: &str) {
        if let Some(sink) = &self.sink {
            sink(message);
        }
    }
}

impl Default for WarnSink {
    fn default() -> Self {
        Self::tracing()
    }
}

impl fmt::Debug for WarnSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WarnSink")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::with_captured_tracing;
    use std::sync::Mutex;

    fn capturing() -> (WarnSink, Arc<Mutex<Vec<String>>>) {
        let messages = Arc::new(Mutex::new(Vec::new()));
        let handle = Arc::clone(&messages);
        let sink = WarnSink::new(move |message| handle.lock().unwrap().push(message.to_string()));
        (sink, messages)
    }

    #[test]
    fn warns_only_when_condition_fails() {
        let (sink, messages) = capturing();

        sink.warn(true, "not emitted");
        sink.warn(false, "emitted");

        assert_eq!(*messages.lock().unwrap(), vec!["emitted"]);
    }

    #[test]
    fn disabled_sink_drops_warnings() {
        let sink = WarnSink::disabled();
        assert!(!sink.is_enabled());

        let logged = with_captured_tracing(|| {
            sink.warn(false, "dropped");
            sink.emit("dropped");
        });
        assert!(logged.is_empty());
    }

    #[test]
    fn default_sink_uses_tracing() {
        let sink = WarnSink::default();
        assert!(sink.is_enabled());

        let logged = with_captured_tracing(|| {
            sink.warn(true, "held back");
            sink.emit("emitted through tracing");
        });
        assert!(logged.contains("WARN"));
        assert!(logged.contains("emitted through tracing"));
        assert!(!logged.contains("held back"));
    }

    #[test]
    fn custom_sink_bypasses_tracing() {
        let (sink, messages) = capturing();

        let logged = with_captured_tracing(|| sink.emit("captured"));
        assert!(logged.is_empty());
        assert_eq!(*messages.lock().unwrap(), vec!["captured"]);
    }

    #[test]
    fn clones_share_the_sink() {
        let (sink, messages) = capturing();
        let clone = sink.clone();

        sink.emit("one");
        clone.emit("two");

        assert_eq!(messages.lock().unwrap().len(), 2);
    }
}
