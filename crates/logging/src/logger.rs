//! crates/logging/src/logger.rs
//! Logger and provider capabilities shared by every implementation.

use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use super::levels::Level;

/// A single log call: severity, call site and lazily formatted message.
///
/// The message is kept as [`fmt::Arguments`] so that nothing is rendered
/// until an implementation decides the record passes its filters.
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    level: Level,
    location: &'static Location<'static>,
    args: fmt::Arguments<'a>,
}

impl<'a> Record<'a> {
    /// Creates a record for the given call site.
    #[must_use]
    pub const fn new(
        level: Level,
        location: &'static Location<'static>,
        args: fmt::Arguments<'a>,
    ) -> Self {
        Self {
            level,
            location,
            args,
        }
    }

    /// Severity of the record.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Source location of the log call.
    #[must_use]
    pub const fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Unformatted message arguments.
    #[must_use]
    pub const fn args(&self) -> fmt::Arguments<'a> {
        self.args
    }
}

/// A logger bound to one module name.
///
/// Implementations must treat [`log`](Self::log) as a no-op for records whose
/// (module, level) pair is disabled, and must evaluate that decision at call
/// time so that level changes reach handles that already exist. Logging never
/// fails from the caller's point of view; output errors stay inside the
/// implementation.
///
/// The per-severity methods are conveniences over `log`. They capture the
/// location of their caller; the [`critical!`](crate::critical),
/// [`error!`](crate::error), [`warn!`](crate::warn), [`info!`](crate::info)
/// and [`debug!`](crate::debug) macros do the same without an intermediate
/// frame.
pub trait Logger: Send + Sync {
    /// Name of the module this logger is bound to.
    fn module(&self) -> &str;

    /// Emits `record` if its level is enabled for this logger's module.
    fn log(&self, record: &Record<'_>);

    /// Logs at [`Level::Critical`].
    #[track_caller]
    fn critical(&self, args: fmt::Arguments<'_>) {
        self.log(&Record::new(Level::Critical, Location::caller(), args));
    }

    /// Logs at [`Level::Error`].
    #[track_caller]
    fn error(&self, args: fmt::Arguments<'_>) {
        self.log(&Record::new(Level::Error, Location::caller(), args));
    }

    /// Logs at [`Level::Warning`].
    #[track_caller]
    fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(&Record::new(Level::Warning, Location::caller(), args));
    }

    /// Logs at [`Level::Info`].
    #[track_caller]
    fn info(&self, args: fmt::Arguments<'_>) {
        self.log(&Record::new(Level::Info, Location::caller(), args));
    }

    /// Logs at [`Level::Debug`].
    #[track_caller]
    fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(&Record::new(Level::Debug, Location::caller(), args));
    }
}

/// Shared handle to a logger, as returned by providers.
pub type LoggerHandle = Arc<dyn Logger>;

/// Factory for module-bound loggers.
///
/// Exactly one provider is current per logging context. Providers are shared
/// across threads and may be asked for the same module many times.
pub trait LoggerProvider: Send + Sync {
    /// Returns a logger bound to `module`.
    fn logger(&self, module: &str) -> LoggerHandle;
}

impl<L> Logger for Arc<L>
where
    L: Logger + ?Sized,
{
    fn module(&self) -> &str {
        (**self).module()
    }

    fn log(&self, record: &Record<'_>) {
        (**self).log(record);
    }
}

impl<P> LoggerProvider for Arc<P>
where
    P: LoggerProvider + ?Sized,
{
    fn logger(&self, module: &str) -> LoggerHandle {
        (**self).logger(module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording {
        lines: Mutex<Vec<(Level, String, u32)>>,
    }

    impl Logger for Recording {
        fn module(&self) -> &str {
            "recording"
        }

        fn log(&self, record: &Record<'_>) {
            self.lines.lock().unwrap().push((
                record.level(),
                record.args().to_string(),
                record.location().line(),
            ));
        }
    }

    #[test]
    fn severity_methods_forward_their_level() {
        let logger = Recording::default();
        logger.critical(format_args!("c"));
        logger.error(format_args!("e"));
        logger.warn(format_args!("w"));
        logger.info(format_args!("i"));
        logger.debug(format_args!("d"));

        let levels: Vec<Level> = logger
            .lines
            .lock()
            .unwrap()
            .iter()
            .map(|(level, _, _)| *level)
            .collect();
        assert_eq!(levels, Level::ALL);
    }

    #[test]
    fn severity_methods_capture_the_call_site() {
        let logger = Recording::default();
        let line = line!() + 1;
        logger.info(format_args!("here"));

        let lines = logger.lines.lock().unwrap();
        assert_eq!(lines[0].1, "here");
        assert_eq!(lines[0].2, line);
    }

    #[test]
    fn arc_forwards_to_inner_logger() {
        let logger: LoggerHandle = Arc::new(Recording::default());
        assert_eq!(logger.module(), "recording");
        logger.warn(format_args!("through arc"));
    }
}
