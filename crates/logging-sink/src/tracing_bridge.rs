//! crates/logging-sink/src/tracing_bridge.rs
//! Bridge between the modlog registry and the tracing crate.
//!
//! [`TracingProvider`] hands out registry-gated loggers whose records are
//! re-emitted as tracing events, so an application that already installs a
//! tracing subscriber can route modlog output through it.
//!
//! # Mapping
//!
//! - Events use the fixed target `modlog`; the logger's module name is
//!   recorded in the `module` field.
//! - `CRITICAL` and `ERROR` map to `tracing::Level::ERROR`, `WARNING` to
//!   `WARN`, `INFO` to `INFO` and `DEBUG` to `DEBUG`. The original severity
//!   name is kept in the `severity` field.
//! - When caller info is enabled the call site is recorded in the `caller`
//!   field.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use logging::{LevelRegistry, LoggerProvider};
//! use logging_sink::TracingProvider;
//!
//! tracing_subscriber::fmt().init();
//! let provider = TracingProvider::new(Arc::new(LevelRegistry::new()));
//! let logger = provider.logger("http");
//! logging::warn!(logger, "slow handler");
//! ```

use std::io;
use std::sync::Arc;

use logging::{Level, LevelRegistry, LoggerHandle, LoggerProvider, Record};

use crate::backend::Backend;
use crate::module_logger::ModuleLogger;

/// Backend that re-emits records as tracing events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingBackend;

impl TracingBackend {
    /// Maps a modlog level to the closest tracing level.
    #[must_use]
    pub const fn tracing_level(level: Level) -> tracing::Level {
        match level {
            Level::Critical | Level::Error => tracing::Level::ERROR,
            Level::Warning => tracing::Level::WARN,
            Level::Info => tracing::Level::INFO,
            Level::Debug => tracing::Level::DEBUG,
        }
    }
}

impl Backend for TracingBackend {
    fn emit(&self, module: &str, record: &Record<'_>, caller: bool) -> io::Result<()> {
        let severity = record.level().name();
        let args = record.args();
        let location = caller.then(|| {
            let location = record.location();
            format!("{}:{}", location.file(), location.line())
        });
        let caller = location.as_deref();

        match record.level() {
            Level::Critical | Level::Error => {
                tracing::error!(target: "modlog", module, severity, caller, "{args}");
            }
            Level::Warning => {
                tracing::warn!(target: "modlog", module, severity, caller, "{args}");
            }
            Level::Info => {
                tracing::info!(target: "modlog", module, severity, caller, "{args}");
            }
            Level::Debug => {
                tracing::debug!(target: "modlog", module, severity, caller, "{args}");
            }
        }
        Ok(())
    }
}

/// Provider whose loggers forward to the tracing crate.
#[derive(Clone, Debug)]
pub struct TracingProvider {
    registry: Arc<LevelRegistry>,
}

impl TracingProvider {
    /// Creates a provider gated by `registry`.
    #[must_use]
    pub fn new(registry: Arc<LevelRegistry>) -> Self {
        Self { registry }
    }
}

impl LoggerProvider for TracingProvider {
    fn logger(&self, module: &str) -> LoggerHandle {
        Arc::new(ModuleLogger::new(
            module,
            Arc::clone(&self.registry),
            TracingBackend,
        ))
    }
}
