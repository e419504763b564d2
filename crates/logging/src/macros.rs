//! crates/logging/src/macros.rs
//! Emit macros that record the call site and defer formatting.
//!
//! Each macro takes the logger first, followed by a format string and its
//! arguments, and expands to a single [`Logger::log`](crate::Logger::log)
//! call. The message is passed as [`format_args!`], so a disabled record is
//! never rendered.

/// Logs a record at an explicit [`Level`](crate::Level).
///
/// # Example
/// ```ignore
/// log!(logger, Level::Warning, "retrying {} in {}s", peer, delay);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        ($logger).log(&$crate::Record::new(
            $level,
            ::core::panic::Location::caller(),
            ::core::format_args!($($arg)+),
        ))
    }};
}

/// Logs a record at [`Level::Critical`](crate::Level::Critical).
///
/// # Example
/// ```ignore
/// critical!(logger, "state file {} is corrupt", path.display());
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Critical, $($arg)+)
    };
}

/// Logs a record at [`Level::Error`](crate::Level::Error).
///
/// # Example
/// ```ignore
/// error!(logger, "request {} failed: {}", id, err);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Logs a record at [`Level::Warning`](crate::Level::Warning).
///
/// # Example
/// ```ignore
/// warn!(logger, "cache miss ratio at {:.1}%", ratio);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warning, $($arg)+)
    };
}

/// Logs a record at [`Level::Info`](crate::Level::Info).
///
/// # Example
/// ```ignore
/// info!(logger, "listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Logs a record at [`Level::Debug`](crate::Level::Debug).
///
/// # Example
/// ```ignore
/// debug!(logger, "decoded {} bytes", len);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}
