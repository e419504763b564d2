#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging-sink` provides the logger implementations behind the `modlog`
//! facade. Every logger here is a [`ModuleLogger`]: it is bound to one module
//! name, consults the shared [`logging::LevelRegistry`] for each record and
//! forwards enabled records to a [`Backend`].
//!
//! # Design
//!
//! - [`DefaultProvider`] renders records with a [`LineFormat`] and writes one
//!   line per record to an [`Output`] (standard error by default, standard
//!   output, an append-mode file or a [`SharedBuffer`]).
//! - [`CaptureProvider`] keeps records in memory for inspection.
//! - `TracingProvider` (feature `tracing`) forwards records to the tracing
//!   crate.
//!
//! Custom providers can reuse [`ModuleLogger`] with their own [`Backend`] to
//! inherit the same gating.
//!
//! # Invariants
//!
//! - Records below the module's threshold are dropped before their message is
//!   formatted.
//! - A record carries its call site only when caller info is enabled for its
//!   module and level.
//! - Each record is written with a single `write_all` call, so concurrent
//!   loggers never interleave within a line.
//!
//! # Errors
//!
//! [`Backend::emit`] and [`Output::file`] return [`std::io::Error`]. Loggers
//! discard emit errors; logging never fails for the caller.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use logging::{Level, LevelRegistry, LoggerProvider};
//! use logging_sink::{DefaultProvider, LineFormat, Output, SharedBuffer};
//!
//! let registry = Arc::new(LevelRegistry::new());
//! let buffer = SharedBuffer::new();
//! let provider = DefaultProvider::new(Arc::clone(&registry))
//!     .with_output(Output::Buffer(buffer.clone()))
//!     .with_format(LineFormat::new().without_timestamps());
//!
//! let logger = provider.logger("cache");
//! registry.set_level("cache", Level::Warning);
//! logging::info!(logger, "miss");
//! logging::warn!(logger, "evicting {} entries", 12);
//!
//! assert_eq!(buffer.lines(), ["[cache] WARNING evicting 12 entries"]);
//! ```

mod backend;
mod capture;
mod format;
mod module_logger;
mod output;
mod provider;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use backend::{Backend, WriterBackend};
pub use capture::{CaptureProvider, CapturedRecord};
pub use format::LineFormat;
pub use module_logger::ModuleLogger;
pub use output::{Output, SharedBuffer};
pub use provider::DefaultProvider;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{TracingBackend, TracingProvider};
