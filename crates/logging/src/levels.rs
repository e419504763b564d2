//! crates/logging/src/levels.rs
//! Severity levels and their textual codec.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a log record, ordered from most to least severe.
///
/// The derived ordering follows the declaration order, so `Critical` compares
/// *less* than `Debug`. Threshold checks therefore read as
/// `level <= minimum`: a record passes when it is at least as severe as the
/// configured minimum. Use [`Level::is_at_least`] rather than raw comparisons
/// at call sites to keep that inversion in one place.
///
/// # Examples
///
/// ```
/// use logging::Level;
///
/// assert!(Level::Error.is_at_least(Level::Warning));
/// assert!(!Level::Debug.is_at_least(Level::Info));
/// assert_eq!(Level::default(), Level::Info);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "String", into = "&'static str")
)]
#[repr(u8)]
pub enum Level {
    /// Unrecoverable conditions.
    Critical = 0,
    /// Failed operations.
    Error = 1,
    /// Recoverable anomalies.
    Warning = 2,
    /// Normal operational events. The default minimum for every module.
    #[default]
    Info = 3,
    /// Detailed execution flow.
    Debug = 4,
}

impl Level {
    /// All levels, most severe first.
    pub const ALL: [Self; 5] = [
        Self::Critical,
        Self::Error,
        Self::Warning,
        Self::Info,
        Self::Debug,
    ];

    /// Returns the canonical upper-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }

    /// Returns the numeric rank; `0` is the most severe.
    #[must_use]
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Builds a level from its numeric rank.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Critical),
            1 => Some(Self::Error),
            2 => Some(Self::Warning),
            3 => Some(Self::Info),
            4 => Some(Self::Debug),
            _ => None,
        }
    }

    /// Reports whether `self` is at least as severe as `minimum`.
    #[must_use]
    #[inline]
    pub const fn is_at_least(self, minimum: Self) -> bool {
        self.as_u8() <= minimum.as_u8()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when a level name is not one of the five canonical names.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognized level: \"{input}\"")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    /// Creates a parse error that records the rejected input.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// Returns the text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(text))
            .ok_or_else(|| ParseLevelError::new(text))
    }
}

impl TryFrom<String> for Level {
    type Error = ParseLevelError;

    fn try_from(text: String) -> Result<Self, <Self as TryFrom<String>>::Error> {
        parse_level(&text)
    }
}

impl From<Level> for &'static str {
    fn from(level: Level) -> Self {
        level.name()
    }
}

impl TryFrom<u8> for Level {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        Self::from_u8(value).ok_or(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.as_u8()
    }
}

/// Parses a level name, ignoring ASCII case.
///
/// Only the exact names `CRITICAL`, `ERROR`, `WARNING`, `INFO` and `DEBUG`
/// are accepted. Surrounding whitespace is not trimmed, abbreviations and
/// numeric ranks are rejected.
///
/// # Examples
///
/// ```
/// use logging::{Level, parse_level};
///
/// assert_eq!(parse_level("WarNing"), Ok(Level::Warning));
/// assert!(parse_level("warn").is_err());
/// assert!(parse_level(" info").is_err());
/// ```
pub fn parse_level(text: &str) -> Result<Level, ParseLevelError> {
    text.parse()
}

/// Renders a level as its canonical upper-case name.
#[must_use]
pub const fn level_name(level: Level) -> &'static str {
    level.name()
}
