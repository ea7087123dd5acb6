//! Builder API for creating services.

use super::config::ServicesConfig;
use super::ids::IdGenerator;
use super::warn::WarnSink;
use super::Services;
use crate::core::DEFAULT_DELIMITER;

/// Builder for [`Services`].
pub struct ServicesBuilder {
    delimiter: char,
    warn: WarnSink,
    id_seed: u64,
}

impl ServicesBuilder {
    /// Builder with default settings.
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            warn: WarnSink::default(),
            id_seed: 0,
        }
    }

    /// Start from a configuration record.
    pub fn from_config(config: &ServicesConfig) -> Self {
        let builder = Self::new()
            .delimiter(config.delimiter)
            .id_seed(config.id_seed);
        if config.warnings {
            builder
        } else {
            builder.disable_warnings()
        }
    }

    /// Set the path delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Send warnings to a custom function
    pub fn warn_with<F>(mut self, sink: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.warn = WarnSink::new(sink);
        self
    }

    /// Use an existing sink
    pub fn warn_sink(mut self, sink: WarnSink) -> Self {
        self.warn = sink;
        self
    }

    /// Drop all warnings
    pub fn disable_warnings(mut self) -> Self {
        self.warn = WarnSink::disabled();
        self
    }

    /// Set the identifier counter's starting value
    pub fn id_seed(mut self, seed: u64) -> Self {
        self.id_seed = seed;
        self
    }

    /// Build the services
    pub fn build(self) -> Services {
        Services {
            ids: IdGenerator::with_seed(self.id_seed),
            warn: self.warn,
            delimiter: self.delimiter,
        }
    }
}

impl Default for ServicesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
