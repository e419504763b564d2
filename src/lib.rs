#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `modlog` is a per-module logging facade. Code asks for a logger by module
//! name, and the minimum level and caller-info flags of each module can be
//! changed at runtime from anywhere in the process. The loggers themselves
//! come from a swappable provider: a line-oriented default is installed on
//! first use unless the application installs its own with [`initialize`].
//!
//! # Design
//!
//! The crate-level functions operate on [`LoggingContext::global`]. A
//! [`LoggingContext`] couples a [`LevelRegistry`] with a provider slot, and
//! applications or tests that want isolation can own their own context
//! instead.
//!
//! - [`new`] returns the current provider's logger for a module, installing
//!   the default provider first when nothing was installed.
//! - [`initialize`] swaps the provider. Handles created before the swap keep
//!   the provider that built them.
//! - Level and caller-info functions read and write the shared registry;
//!   default loggers consult it on every call, so changes apply to handles
//!   that already exist.
//!
//! # Invariants
//!
//! - Concurrent first calls to [`new`] install exactly one default provider.
//! - Unconfigured modules log at `INFO` and above, without caller info.
//! - No logging call fails or panics on behalf of the caller.
//!
//! # Errors
//!
//! [`parse_level`] returns [`ParseLevelError`]; [`configure_from_env`]
//! returns [`LevelConfigError`]. All other functions are total.
//!
//! # Examples
//!
//! ```
//! use modlog::Level;
//!
//! modlog::set_level("billing", Level::Warning);
//!
//! let logger = modlog::new("billing");
//! modlog::info!(logger, "not written");
//! modlog::warn!(logger, "invoice {} overdue", 42);
//!
//! assert!(modlog::is_enabled_for("billing", Level::Error));
//! assert!(!modlog::is_enabled_for("billing", Level::Info));
//! assert_eq!(modlog::level("billing"), Level::Warning);
//! assert_eq!(modlog::level_name(modlog::parse_level("debug")?), "DEBUG");
//! # Ok::<(), modlog::ParseLevelError>(())
//! ```
//!
//! # See also
//!
//! - [`sink`] for the default provider, the capture provider and the
//!   building blocks for custom providers.
//! - [`LevelConfig`] for `LOG_LEVEL`-style directives.

use std::collections::HashMap;

mod context;

pub use context::{INTERNAL_MODULE, LoggingContext, ProviderHandle, ProviderState};
pub use logging::{
    LOG_LEVEL_ENV, Level, LevelConfig, LevelConfigError, LevelRegistry, Logger, LoggerHandle,
    LoggerProvider, ParseLevelError, Record, critical, debug, error, info, level_name, log,
    parse_level, warn,
};
/// Logger implementations and providers.
pub use logging_sink as sink;

/// Returns the logger for `module` from the current process-wide provider.
///
/// The built-in default provider is installed on the first call when no
/// provider was installed with [`initialize`].
pub fn new(module: &str) -> LoggerHandle {
    LoggingContext::global().logger(module)
}

/// Installs `provider` as the process-wide provider, replacing the current
/// one.
pub fn initialize(provider: ProviderHandle) {
    LoggingContext::global().initialize(provider);
}

/// Reports which kind of provider is installed process-wide.
#[must_use]
pub fn provider_state() -> ProviderState {
    LoggingContext::global().state()
}

/// Sets the minimum level of `module`.
pub fn set_level(module: &str, level: Level) {
    LoggingContext::global().registry().set_level(module, level);
}

/// Returns the minimum level of `module`.
#[must_use]
pub fn level(module: &str) -> Level {
    LoggingContext::global().registry().level(module)
}

/// Returns every module that received an explicit level, with its level.
#[must_use]
pub fn all_levels() -> HashMap<String, Level> {
    LoggingContext::global().registry().all_levels()
}

/// Reports whether records at `level` from `module` are emitted.
#[must_use]
pub fn is_enabled_for(module: &str, level: Level) -> bool {
    LoggingContext::global()
        .registry()
        .is_enabled_for(module, level)
}

/// Sets the level used by modules without an explicit level.
pub fn set_default_level(level: Level) {
    LoggingContext::global().registry().set_default_level(level);
}

/// Returns the level used by modules without an explicit level.
#[must_use]
pub fn default_level() -> Level {
    LoggingContext::global().registry().default_level()
}

/// Enables caller info for records at `level` from `module`.
pub fn show_caller_info(module: &str, level: Level) {
    LoggingContext::global()
        .registry()
        .show_caller_info(module, level);
}

/// Disables caller info for records at `level` from `module`.
pub fn hide_caller_info(module: &str, level: Level) {
    LoggingContext::global()
        .registry()
        .hide_caller_info(module, level);
}

/// Reports whether records at `level` from `module` carry their call site.
#[must_use]
pub fn is_caller_info_enabled(module: &str, level: Level) -> bool {
    LoggingContext::global()
        .registry()
        .is_caller_info_enabled(module, level)
}

/// Applies level directives to the process-wide registry.
pub fn configure(config: &LevelConfig) {
    config.apply(LoggingContext::global().registry());
}

/// Reads [`LOG_LEVEL_ENV`] and applies its directives process-wide.
///
/// Returns `Ok(false)` when the variable is unset.
///
/// # Errors
///
/// Returns [`LevelConfigError`] when the variable holds a malformed
/// directive or is not valid Unicode; the registry is left unchanged in that
/// case.
pub fn configure_from_env() -> Result<bool, LevelConfigError> {
    match LevelConfig::from_env()? {
        Some(config) => {
            configure(&config);
            Ok(true)
        }
        None => Ok(false),
    }
}
