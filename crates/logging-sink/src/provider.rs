//! crates/logging-sink/src/provider.rs
//! The built-in provider installed when no custom provider is configured.

use std::sync::Arc;

use logging::{LevelRegistry, LoggerHandle, LoggerProvider};

use crate::backend::WriterBackend;
use crate::format::LineFormat;
use crate::module_logger::ModuleLogger;
use crate::output::Output;

/// Provider producing registry-gated, line-oriented loggers.
///
/// Every logger it hands out is a [`ModuleLogger`] over a [`WriterBackend`]
/// sharing this provider's [`Output`] and [`LineFormat`]. Output defaults to
/// standard error with timestamps.
#[derive(Clone, Debug)]
pub struct DefaultProvider {
    registry: Arc<LevelRegistry>,
    output: Output,
    format: LineFormat,
}

impl DefaultProvider {
    /// Creates a provider gated by `registry`, writing to standard error.
    #[must_use]
    pub fn new(registry: Arc<LevelRegistry>) -> Self {
        Self {
            registry,
            output: Output::default(),
            format: LineFormat::default(),
        }
    }

    /// Replaces the output destination.
    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    /// Replaces the line layout.
    pub fn with_format(mut self, format: LineFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns the registry consulted by the loggers.
    #[must_use]
    pub fn registry(&self) -> &Arc<LevelRegistry> {
        &self.registry
    }

    /// Returns the output destination.
    #[must_use]
    pub const fn output(&self) -> &Output {
        &self.output
    }
}

impl LoggerProvider for DefaultProvider {
    fn logger(&self, module: &str) -> LoggerHandle {
        let backend = WriterBackend::new(self.output.clone(), self.format);
        Arc::new(ModuleLogger::new(module, Arc::clone(&self.registry), backend))
    }
}
