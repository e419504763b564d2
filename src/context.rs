//! src/context.rs
//! Provider slot and level registry shared by every logger of a context.

use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use logging::{LevelRegistry, LoggerHandle, LoggerProvider};
use logging_sink::{DefaultProvider, LineFormat, Output};

/// Module name of the facade's own diagnostics.
pub const INTERNAL_MODULE: &str = "modlog";

/// Shared handle to an installed provider.
pub type ProviderHandle = Arc<dyn LoggerProvider>;

/// Which kind of provider a context currently holds.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ProviderState {
    /// Nothing installed yet; the next logger request installs the default.
    Unset,
    /// The built-in [`DefaultProvider`] was installed lazily.
    Default,
    /// A provider was installed through [`LoggingContext::initialize`].
    Custom,
}

struct Installed {
    provider: ProviderHandle,
    state: ProviderState,
}

/// A level registry plus the provider slot that hands out loggers.
///
/// The process-wide instance behind the crate-level functions is
/// [`LoggingContext::global`]; applications and tests may also own private
/// contexts.
///
/// The slot starts empty. The first [`logger`](Self::logger) call installs a
/// [`DefaultProvider`] bound to this context's registry, using a shared-lock
/// fast path and an exclusive-lock re-check so that racing callers all
/// observe the same instance. [`initialize`](Self::initialize) replaces the
/// slot unconditionally; loggers created earlier keep the provider that
/// built them.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use modlog::{Level, LoggingContext, ProviderState};
/// use modlog::sink::CaptureProvider;
///
/// let context = LoggingContext::new();
/// assert_eq!(context.state(), ProviderState::Unset);
///
/// let capture = CaptureProvider::new(Arc::clone(context.registry()));
/// context.initialize(Arc::new(capture.clone()));
/// assert_eq!(context.state(), ProviderState::Custom);
///
/// context.registry().set_level("jobs", Level::Debug);
/// let logger = context.logger("jobs");
/// modlog::debug!(logger, "picked up {}", 2);
///
/// let messages: Vec<String> = capture
///     .drain()
///     .into_iter()
///     .filter(|record| record.module == "jobs")
///     .map(|record| record.message)
///     .collect();
/// assert_eq!(messages, ["picked up 2"]);
/// ```
pub struct LoggingContext {
    registry: Arc<LevelRegistry>,
    slot: RwLock<Option<Installed>>,
    default_output: Output,
    default_format: LineFormat,
}

impl LoggingContext {
    /// Creates a context with a fresh registry and an empty provider slot.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(Arc::new(LevelRegistry::new()))
    }

    /// Creates a context around an existing registry.
    #[must_use]
    pub fn with_registry(registry: Arc<LevelRegistry>) -> Self {
        Self {
            registry,
            slot: RwLock::new(None),
            default_output: Output::default(),
            default_format: LineFormat::default(),
        }
    }

    /// Sets where a lazily installed default provider writes.
    #[must_use]
    pub fn with_default_output(mut self, output: Output) -> Self {
        self.default_output = output;
        self
    }

    /// Sets the line layout of a lazily installed default provider.
    #[must_use]
    pub fn with_default_format(mut self, format: LineFormat) -> Self {
        self.default_format = format;
        self
    }

    /// Returns the process-wide context.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<LoggingContext> = OnceLock::new();
        GLOBAL.get_or_init(Self::new)
    }

    /// Returns the registry consulted by the default provider's loggers.
    #[must_use]
    pub fn registry(&self) -> &Arc<LevelRegistry> {
        &self.registry
    }

    /// Installs `provider`, replacing whatever was active.
    ///
    /// Handles obtained before the call are not migrated. After the swap a
    /// debug record is sent to the new provider's `modlog` logger; the slot
    /// lock is already released at that point, so a provider that calls back
    /// into this context cannot deadlock.
    pub fn initialize(&self, provider: ProviderHandle) {
        {
            let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
            *slot = Some(Installed {
                provider: Arc::clone(&provider),
                state: ProviderState::Custom,
            });
        }

        announce(&provider, ProviderState::Custom);
    }

    /// Returns the logger for `module` from the current provider, installing
    /// the default provider first when the slot is empty.
    pub fn logger(&self, module: &str) -> LoggerHandle {
        self.provider().logger(module)
    }

    /// Returns the current provider, installing the default one when the
    /// slot is empty.
    pub fn provider(&self) -> ProviderHandle {
        {
            let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(installed) = slot.as_ref() {
                return Arc::clone(&installed.provider);
            }
        }

        self.install_default()
    }

    /// Reports which kind of provider is installed.
    #[must_use]
    pub fn state(&self) -> ProviderState {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map_or(ProviderState::Unset, |installed| installed.state)
    }

    /// Empties the provider slot so the next logger request installs a new
    /// default provider. Registry contents are left untouched.
    #[cfg(any(test, feature = "test-support"))]
    pub fn reset(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn install_default(&self) -> ProviderHandle {
        let provider = {
            let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
            if let Some(installed) = slot.as_ref() {
                return Arc::clone(&installed.provider);
            }

            let provider: ProviderHandle = Arc::new(
                DefaultProvider::new(Arc::clone(&self.registry))
                    .with_output(self.default_output.clone())
                    .with_format(self.default_format),
            );
            *slot = Some(Installed {
                provider: Arc::clone(&provider),
                state: ProviderState::Default,
            });
            provider
        };

        announce(&provider, ProviderState::Default);
        provider
    }
}

impl Default for LoggingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingContext")
            .field("state", &self.state())
            .field("default_output", &self.default_output)
            .finish_non_exhaustive()
    }
}

fn announce(provider: &ProviderHandle, state: ProviderState) {
    #[cfg(feature = "tracing")]
    tracing::debug!(target: "modlog::provider", ?state, "provider installed");

    let logger = provider.logger(INTERNAL_MODULE);
    match state {
        ProviderState::Custom => logging::debug!(logger, "Logger provider initialized"),
        ProviderState::Default | ProviderState::Unset => logging::debug!(
            logger,
            "Default logger initialized (call initialize() to install a custom provider)"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging::{Level, Logger, Record};
    use logging_sink::{CaptureProvider, SharedBuffer};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn buffered() -> (LoggingContext, SharedBuffer) {
        let buffer = SharedBuffer::new();
        let context = LoggingContext::new()
            .with_default_output(Output::Buffer(buffer.clone()))
            .with_default_format(LineFormat::new().without_timestamps());
        (context, buffer)
    }

    #[test]
    fn starts_unset_and_installs_default_lazily() {
        let (context, _) = buffered();
        assert_eq!(context.state(), ProviderState::Unset);

        let _logger = context.logger("app");
        assert_eq!(context.state(), ProviderState::Default);
    }

    #[test]
    fn default_provider_is_installed_once() {
        let (context, _) = buffered();
        let first = context.provider();
        let second = context.provider();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn default_install_is_announced_at_debug() {
        let (context, buffer) = buffered();
        context.registry().set_level(INTERNAL_MODULE, Level::Debug);

        let _logger = context.logger("app");

        assert_eq!(
            buffer.lines(),
            ["[modlog] DEBUG Default logger initialized (call initialize() to install a custom provider)"]
        );
    }

    #[test]
    fn announcement_is_filtered_by_default_level() {
        let (context, buffer) = buffered();
        let logger = context.logger("app");
        logging::info!(logger, "ready");
        assert_eq!(buffer.lines(), ["[app] INFO ready"]);
    }

    #[test]
    fn initialize_replaces_and_announces() {
        let context = LoggingContext::new();
        context.registry().set_level(INTERNAL_MODULE, Level::Debug);
        let capture = CaptureProvider::new(Arc::clone(context.registry()));

        context.initialize(Arc::new(capture.clone()));

        assert_eq!(context.state(), ProviderState::Custom);
        let records = capture.drain();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].module, INTERNAL_MODULE);
        assert_eq!(records[0].level, Level::Debug);
        assert_eq!(records[0].message, "Logger provider initialized");
    }

    #[test]
    fn last_initialize_wins() {
        let context = LoggingContext::new();
        let first: ProviderHandle = Arc::new(CaptureProvider::new(Arc::clone(context.registry())));
        let second: ProviderHandle = Arc::new(CaptureProvider::new(Arc::clone(context.registry())));

        context.initialize(Arc::clone(&first));
        context.initialize(Arc::clone(&second));

        assert!(Arc::ptr_eq(&context.provider(), &second));
    }

    struct Reentrant {
        context: Arc<LoggingContext>,
        calls: AtomicUsize,
    }

    struct Silent(String);

    impl Logger for Silent {
        fn module(&self) -> &str {
            &self.0
        }

        fn log(&self, _: &Record<'_>) {}
    }

    impl LoggerProvider for Reentrant {
        fn logger(&self, module: &str) -> LoggerHandle {
            self.calls.fetch_add(1, Ordering::SeqCst);
            // Reads the slot while the context is still announcing.
            let _ = self.context.state();
            Arc::new(Silent(module.to_owned()))
        }
    }

    #[test]
    fn provider_may_call_back_into_context_during_announce() {
        let context = Arc::new(LoggingContext::new());
        let provider = Arc::new(Reentrant {
            context: Arc::clone(&context),
            calls: AtomicUsize::new(0),
        });

        context.initialize(Arc::clone(&provider) as ProviderHandle);

        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        assert_eq!(context.state(), ProviderState::Custom);
    }

    #[test]
    fn reset_returns_to_unset() {
        let (context, _) = buffered();
        let before = context.provider();
        context.reset();
        assert_eq!(context.state(), ProviderState::Unset);

        let after = context.provider();
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn global_is_a_singleton() {
        assert!(std::ptr::eq(LoggingContext::global(), LoggingContext::global()));
    }
}
