//! crates/logging-sink/src/capture.rs
//! In-memory provider that records emitted records for inspection.

use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use logging::{Level, LevelRegistry, LoggerHandle, LoggerProvider, Record};

use crate::backend::Backend;
use crate::module_logger::ModuleLogger;

/// A record that passed the registry check and was captured.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CapturedRecord {
    /// Module of the emitting logger.
    pub module: String,
    /// Severity of the record.
    pub level: Level,
    /// Rendered message.
    pub message: String,
    /// `file:line` of the call site when caller info was enabled.
    pub caller: Option<String>,
}

type Store = Arc<Mutex<Vec<CapturedRecord>>>;

fn lock(store: &Store) -> MutexGuard<'_, Vec<CapturedRecord>> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Clone, Debug, Default)]
struct CaptureBackend {
    store: Store,
}

impl Backend for CaptureBackend {
    fn emit(&self, module: &str, record: &Record<'_>, caller: bool) -> io::Result<()> {
        let caller = caller.then(|| {
            let location = record.location();
            format!("{}:{}", location.file(), location.line())
        });
        lock(&self.store).push(CapturedRecord {
            module: module.to_owned(),
            level: record.level(),
            message: record.args().to_string(),
            caller,
        });
        Ok(())
    }
}

/// Provider whose loggers append to a shared in-memory list.
///
/// Loggers are gated by the registry exactly like the default provider's,
/// so the captured list shows what would have been written. Clones share
/// the same list.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use logging::{Level, LevelRegistry, LoggerProvider};
/// use logging_sink::CaptureProvider;
///
/// let registry = Arc::new(LevelRegistry::new());
/// let capture = CaptureProvider::new(Arc::clone(&registry));
/// let logger = capture.logger("jobs");
///
/// logging::info!(logger, "queued {}", 3);
/// logging::debug!(logger, "filtered");
///
/// let records = capture.drain();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].level, Level::Info);
/// assert_eq!(records[0].message, "queued 3");
/// assert!(capture.records().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct CaptureProvider {
    registry: Arc<LevelRegistry>,
    backend: CaptureBackend,
}

impl CaptureProvider {
    /// Creates a provider gated by `registry` with an empty record list.
    #[must_use]
    pub fn new(registry: Arc<LevelRegistry>) -> Self {
        Self {
            registry,
            backend: CaptureBackend::default(),
        }
    }

    /// Returns a copy of every captured record, oldest first.
    #[must_use]
    pub fn records(&self) -> Vec<CapturedRecord> {
        lock(&self.backend.store).clone()
    }

    /// Removes and returns every captured record, oldest first.
    pub fn drain(&self) -> Vec<CapturedRecord> {
        lock(&self.backend.store).drain(..).collect()
    }
}

impl LoggerProvider for CaptureProvider {
    fn logger(&self, module: &str) -> LoggerHandle {
        Arc::new(ModuleLogger::new(
            module,
            Arc::clone(&self.registry),
            self.backend.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_in_emission_order() {
        let registry = Arc::new(LevelRegistry::new());
        let capture = CaptureProvider::new(Arc::clone(&registry));
        let first = capture.logger("first");
        let second = capture.logger("second");

        logging::warn!(first, "one");
        logging::error!(second, "two");
        logging::critical!(first, "three");

        let modules: Vec<(String, String)> = capture
            .records()
            .into_iter()
            .map(|record| (record.module, record.message))
            .collect();
        assert_eq!(
            modules,
            [
                ("first".to_owned(), "one".to_owned()),
                ("second".to_owned(), "two".to_owned()),
                ("first".to_owned(), "three".to_owned()),
            ]
        );
    }

    #[test]
    fn drain_clears_the_list() {
        let capture = CaptureProvider::new(Arc::new(LevelRegistry::new()));
        logging::info!(capture.logger("m"), "x");

        assert_eq!(capture.drain().len(), 1);
        assert!(capture.drain().is_empty());
    }

    #[test]
    fn caller_recorded_only_when_enabled() {
        let registry = Arc::new(LevelRegistry::new());
        let capture = CaptureProvider::new(Arc::clone(&registry));
        let logger = capture.logger("m");
        registry.show_caller_info("m", Level::Warning);

        logging::info!(logger, "plain");
        let line = line!() + 1;
        logging::warn!(logger, "located");

        let records = capture.drain();
        assert_eq!(records[0].caller, None);
        assert_eq!(records[1].caller, Some(format!("{}:{line}", file!())));
    }

    #[test]
    fn clones_share_records() {
        let capture = CaptureProvider::new(Arc::new(LevelRegistry::new()));
        let clone = capture.clone();
        logging::error!(clone.logger("m"), "shared");
        assert_eq!(capture.records().len(), 1);
    }
}
