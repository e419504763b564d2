//! crates/logging-sink/src/backend.rs
//! Record consumers that sit behind [`ModuleLogger`](crate::ModuleLogger).

use std::io;

use logging::Record;

use crate::format::LineFormat;
use crate::output::Output;

/// Consumes records that already passed the registry check.
///
/// Backends never filter; [`ModuleLogger`](crate::ModuleLogger) decides
/// whether a record is emitted and whether it carries its call site, then
/// hands it over together with the module name.
pub trait Backend: Send + Sync {
    /// Emits one record for `module`.
    fn emit(&self, module: &str, record: &Record<'_>, caller: bool) -> io::Result<()>;
}

/// Backend that renders each record with a [`LineFormat`] and writes it to
/// an [`Output`].
#[derive(Clone, Debug, Default)]
pub struct WriterBackend {
    output: Output,
    format: LineFormat,
}

impl WriterBackend {
    /// Creates a backend writing to `output` with the given layout.
    #[must_use]
    pub const fn new(output: Output, format: LineFormat) -> Self {
        Self { output, format }
    }

    /// Returns the destination of rendered lines.
    #[must_use]
    pub const fn output(&self) -> &Output {
        &self.output
    }

    /// Returns the line layout.
    #[must_use]
    pub const fn format(&self) -> LineFormat {
        self.format
    }
}

impl Backend for WriterBackend {
    fn emit(&self, module: &str, record: &Record<'_>, caller: bool) -> io::Result<()> {
        let line = self.format.render(module, record, caller);
        self.output.write_line(&line)
    }
}
