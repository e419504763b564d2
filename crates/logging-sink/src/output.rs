//! crates/logging-sink/src/output.rs
//! Destinations for rendered log lines.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// In-memory, cloneable byte buffer shared between a logger and a test.
///
/// Clones share the same storage, so a test can hand one clone to
/// [`Output::Buffer`] and inspect another after logging.
///
/// # Examples
///
/// ```
/// use logging_sink::{Output, SharedBuffer};
///
/// let buffer = SharedBuffer::new();
/// let output = Output::Buffer(buffer.clone());
/// output.write_line("first")?;
/// output.write_line("second")?;
///
/// assert_eq!(buffer.lines(), ["first", "second"]);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.bytes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the buffered bytes decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Returns the buffered text split into lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Reports whether nothing has been written since creation or the last clear.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Discards the buffered bytes.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl fmt::Debug for SharedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedBuffer")
            .field("len", &self.lock().len())
            .finish()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Where the default logger writes its lines.
///
/// Every line is written with a single locked `write_all`, so lines from
/// concurrent loggers never interleave within a line.
#[derive(Clone, Debug, Default)]
pub enum Output {
    /// The process' standard error stream.
    #[default]
    Stderr,
    /// The process' standard output stream.
    Stdout,
    /// A file opened in append mode.
    File(Arc<Mutex<File>>),
    /// An in-memory buffer, for tests.
    Buffer(SharedBuffer),
}

impl Output {
    /// Opens `path` for appending, creating it when missing.
    pub fn file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::File(Arc::new(Mutex::new(file))))
    }

    /// Writes `line` followed by a newline.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut bytes = Vec::with_capacity(line.len() + 1);
        bytes.extend_from_slice(line.as_bytes());
        bytes.push(b'\n');

        match self {
            Self::Stderr => io::stderr().lock().write_all(&bytes),
            Self::Stdout => io::stdout().lock().write_all(&bytes),
            Self::File(file) => file
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .write_all(&bytes),
            Self::Buffer(buffer) => {
                buffer.lock().extend_from_slice(&bytes);
                Ok(())
            }
        }
    }
}
