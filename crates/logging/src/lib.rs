#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` holds the implementation-independent half of the modlog
//! workspace: the [`Level`] severity scale and its textual codec, the
//! [`LevelRegistry`] that tracks per-module minimum levels and caller-info
//! flags, the [`Logger`] and [`LoggerProvider`] capabilities every backend
//! implements, and [`LevelConfig`] for turning `LOG_LEVEL`-style directives
//! into registry updates.
//!
//! # Design
//!
//! Filtering decisions live in the registry and nowhere else. Loggers hold a
//! module name and ask the registry on every call whether a record passes,
//! so changing a level is immediately visible through handles that already
//! exist. Messages travel as [`std::fmt::Arguments`] inside a [`Record`] and
//! are only rendered once a record has passed the check.
//!
//! # Invariants
//!
//! - Severity order is total: `CRITICAL > ERROR > WARNING > INFO > DEBUG`.
//! - Every (module, level) pair has a defined enabled/caller-info answer.
//!   Unconfigured modules fall back to the default level (INFO) and to
//!   caller info being disabled.
//! - [`LevelRegistry::all_levels`] reports exactly the modules that received
//!   an explicit [`LevelRegistry::set_level`].
//!
//! # Errors
//!
//! Only parsing can fail: [`parse_level`] returns [`ParseLevelError`] and
//! [`LevelConfig`] parsing returns [`LevelConfigError`]. Every registry
//! operation is total.
//!
//! # Examples
//!
//! ```
//! use logging::{Level, LevelRegistry, level_name, parse_level};
//!
//! let registry = LevelRegistry::new();
//! registry.set_level("svc", parse_level("warning")?);
//!
//! let enabled: Vec<&str> = Level::ALL
//!     .into_iter()
//!     .filter(|level| registry.is_enabled_for("svc", *level))
//!     .map(level_name)
//!     .collect();
//! assert_eq!(enabled, ["CRITICAL", "ERROR", "WARNING"]);
//! # Ok::<(), logging::ParseLevelError>(())
//! ```

mod config;
mod levels;
mod logger;
mod macros;
mod registry;

pub use config::{LOG_LEVEL_ENV, LevelConfig, LevelConfigError};
pub use levels::{Level, ParseLevelError, level_name, parse_level};
pub use logger::{Logger, LoggerHandle, LoggerProvider, Record};
pub use registry::LevelRegistry;
