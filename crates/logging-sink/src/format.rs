//! crates/logging-sink/src/format.rs
//! Line layout used by the default logger.

use std::fmt::Write as _;

use logging::Record;
use time::OffsetDateTime;
use time::macros::format_description;

/// Renders records into single text lines.
///
/// A line reads `<timestamp> [<module>] <LEVEL> <message>`. When caller info
/// is requested the call site is inserted before the message as
/// `[<file>:<line>]`. Timestamps are UTC with millisecond precision and can
/// be switched off for deterministic output.
///
/// # Examples
///
/// ```
/// use logging::{Level, Record};
/// use logging_sink::LineFormat;
///
/// let format = LineFormat::new().without_timestamps();
/// let line = format.render(
///     "store",
///     &Record::new(Level::Warning, std::panic::Location::caller(), format_args!("low disk")),
///     false,
/// );
/// assert_eq!(line, "[store] WARNING low disk");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LineFormat {
    timestamps: bool,
}

impl LineFormat {
    /// Creates the default layout, with timestamps.
    #[must_use]
    pub const fn new() -> Self {
        Self { timestamps: true }
    }

    /// Drops the timestamp prefix.
    #[must_use]
    pub const fn without_timestamps(mut self) -> Self {
        self.timestamps = false;
        self
    }

    /// Reports whether lines start with a timestamp.
    #[must_use]
    pub const fn timestamps(&self) -> bool {
        self.timestamps
    }

    /// Renders `record` for `module`, with the call site when `caller` is set.
    pub fn render(&self, module: &str, record: &Record<'_>, caller: bool) -> String {
        let mut line = String::with_capacity(64);

        if self.timestamps {
            if let Some(stamp) = timestamp() {
                line.push_str(&stamp);
                line.push(' ');
            }
        }

        let _ = write!(line, "[{module}] {} ", record.level());
        if caller {
            let location = record.location();
            let _ = write!(line, "[{}:{}] ", location.file(), location.line());
        }
        let _ = write!(line, "{}", record.args());
        line
    }
}

impl Default for LineFormat {
    fn default() -> Self {
        Self::new()
    }
}

fn timestamp() -> Option<String> {
    OffsetDateTime::now_utc()
        .format(format_description!(
            "[year]/[month padding:zero]/[day padding:zero] [hour padding:zero]:[minute padding:zero]:[second padding:zero].[subsecond digits:3] UTC"
        ))
        .ok()
}
