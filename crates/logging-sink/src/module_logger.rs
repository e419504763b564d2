//! crates/logging-sink/src/module_logger.rs
//! Registry-gated logger bound to one module.

use std::fmt;
use std::sync::Arc;

use logging::{LevelRegistry, Logger, Record};

use crate::backend::Backend;

/// Logger that consults a [`LevelRegistry`] on every call before handing a
/// record to its [`Backend`].
///
/// Nothing is cached at construction: the enabled check and the caller-info
/// flag are read from the registry for each record, so level changes reach
/// loggers that already exist. Disabled records are dropped before the
/// message is rendered. Backend I/O errors are discarded; logging never
/// fails for the caller.
///
/// Custom providers can wrap their own backend in a `ModuleLogger` to get the
/// same central gating the default provider applies.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use logging::{Level, LevelRegistry};
/// use logging_sink::{LineFormat, ModuleLogger, Output, SharedBuffer, WriterBackend};
///
/// let registry = Arc::new(LevelRegistry::new());
/// let buffer = SharedBuffer::new();
/// let backend = WriterBackend::new(
///     Output::Buffer(buffer.clone()),
///     LineFormat::new().without_timestamps(),
/// );
/// let logger = ModuleLogger::new("db", Arc::clone(&registry), backend);
///
/// logging::debug!(logger, "hidden");
/// registry.set_level("db", Level::Debug);
/// logging::debug!(logger, "shown");
///
/// assert_eq!(buffer.lines(), ["[db] DEBUG shown"]);
/// ```
pub struct ModuleLogger<B> {
    module: String,
    registry: Arc<LevelRegistry>,
    backend: B,
}

impl<B> ModuleLogger<B> {
    /// Binds `backend` to `module`, gated by `registry`.
    pub fn new(module: &str, registry: Arc<LevelRegistry>, backend: B) -> Self {
        Self {
            module: module.to_owned(),
            registry,
            backend,
        }
    }

    /// Returns the registry consulted on every call.
    #[must_use]
    pub fn registry(&self) -> &Arc<LevelRegistry> {
        &self.registry
    }

    /// Returns the wrapped backend.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B> fmt::Debug for ModuleLogger<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleLogger")
            .field("module", &self.module)
            .finish_non_exhaustive()
    }
}

impl<B> Logger for ModuleLogger<B>
where
    B: Backend,
{
    fn module(&self) -> &str {
        &self.module
    }

    fn log(&self, record: &Record<'_>) {
        let level = record.level();
        if !self.registry.is_enabled_for(&self.module, level) {
            return;
        }

        let caller = self.registry.is_caller_info_enabled(&self.module, level);
        let _ = self.backend.emit(&self.module, record, caller);
    }
}
