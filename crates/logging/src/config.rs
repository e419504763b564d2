//! crates/logging/src/config.rs
//! Level directives read from configuration strings and the environment.

use std::env::{self, VarError};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::levels::{Level, ParseLevelError};
use super::registry::LevelRegistry;

/// Environment variable consulted by [`LevelConfig::from_env`].
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Error produced while parsing a level directive list.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LevelConfigError {
    /// A directive named a level that does not exist.
    #[error("invalid level in directive \"{directive}\": {source}")]
    InvalidLevel {
        /// The offending directive.
        directive: String,
        /// The underlying parse failure.
        #[source]
        source: ParseLevelError,
    },
    /// A `module=level` directive had nothing before the `=`.
    #[error("missing module name in directive \"{0}\"")]
    EmptyModule(String),
    /// A directive contained more than one `=`, or a module name contained
    /// a directive separator.
    #[error("malformed directive \"{0}\"")]
    Malformed(String),
    /// The environment variable was set to a value that is not valid Unicode.
    #[error("environment variable {0} is not valid Unicode")]
    NotUnicode(String),
}

/// A parsed list of level directives.
///
/// The textual form is a comma-separated list in which each entry is either
/// a bare level, which sets the default level for unconfigured modules, or
/// `module=level`. Empty entries are skipped so trailing commas are harmless.
/// Later entries win over earlier ones for the same module.
///
/// # Examples
///
/// ```
/// use logging::{Level, LevelConfig, LevelRegistry};
///
/// let config: LevelConfig = "warning,db=debug,http=error".parse()?;
/// let registry = LevelRegistry::new();
/// config.apply(&registry);
///
/// assert_eq!(registry.level("db"), Level::Debug);
/// assert_eq!(registry.level("http"), Level::Error);
/// assert_eq!(registry.level("other"), Level::Warning);
/// # Ok::<(), logging::LevelConfigError>(())
/// ```
///
/// With the `serde` feature the structured form is
/// `{"default": "info", "modules": [["db", "debug"]]}`. Level names are
/// matched like [`parse_level`](crate::parse_level), and module names are
/// held to the same rules as the textual form.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLevelConfig"))]
pub struct LevelConfig {
    /// Level for modules without their own directive.
    pub default: Option<Level>,
    /// Per-module levels in directive order.
    pub modules: Vec<(String, Level)>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLevelConfig {
    #[serde(default)]
    default: Option<Level>,
    #[serde(default)]
    modules: Vec<(String, Level)>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLevelConfig> for LevelConfig {
    type Error = LevelConfigError;

    fn try_from(raw: RawLevelConfig) -> Result<Self, Self::Error> {
        for (module, level) in &raw.modules {
            check_module(module, *level)?;
        }
        Ok(Self {
            default: raw.default,
            modules: raw.modules,
        })
    }
}

impl LevelConfig {
    /// Reads directives from [`LOG_LEVEL_ENV`].
    ///
    /// Returns `Ok(None)` when the variable is unset and
    /// [`LevelConfigError::NotUnicode`] when its value is not valid Unicode.
    pub fn from_env() -> Result<Option<Self>, LevelConfigError> {
        Self::from_var(LOG_LEVEL_ENV, env::var(LOG_LEVEL_ENV))
    }

    fn from_var(
        key: &str,
        value: Result<String, VarError>,
    ) -> Result<Option<Self>, LevelConfigError> {
        match value {
            Ok(text) => text.parse().map(Some),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(LevelConfigError::NotUnicode(key.to_owned())),
        }
    }

    /// Reads directives from `key` using an arbitrary variable lookup.
    pub fn from_lookup<F>(key: &str, lookup: F) -> Result<Option<Self>, LevelConfigError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        lookup(key).map(|value| value.parse()).transpose()
    }

    /// Returns `true` when the configuration carries no directive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.default.is_none() && self.modules.is_empty()
    }

    /// Writes every directive into `registry`.
    pub fn apply(&self, registry: &LevelRegistry) {
        if let Some(level) = self.default {
            registry.set_default_level(level);
        }
        for (module, level) in &self.modules {
            registry.set_level(module, *level);
        }
    }
}

impl FromStr for LevelConfig {
    type Err = LevelConfigError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut config = Self::default();

        for directive in text.split(',').filter(|entry| !entry.is_empty()) {
            match parse_directive(directive)? {
                (None, level) => config.default = Some(level),
                (Some(module), level) => config.modules.push((module.to_owned(), level)),
            }
        }

        Ok(config)
    }
}

impl fmt::Display for LevelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let default = self.default.map(|level| level.to_string());
        let modules = self
            .modules
            .iter()
            .map(|(module, level)| format!("{module}={level}"));
        let directives: Vec<String> = default.into_iter().chain(modules).collect();
        f.write_str(&directives.join(","))
    }
}

/// Parse a directive like "db=debug" into (Some("db"), Debug) or "info" into (None, Info).
fn parse_directive(directive: &str) -> Result<(Option<&str>, Level), LevelConfigError> {
    let invalid_level = |source: ParseLevelError| LevelConfigError::InvalidLevel {
        directive: directive.to_owned(),
        source,
    };

    match directive.split_once('=') {
        None => directive.parse::<Level>().map(|level| (None, level)).map_err(invalid_level),
        Some((_, value)) if value.contains('=') => {
            Err(LevelConfigError::Malformed(directive.to_owned()))
        }
        Some(("", _)) => Err(LevelConfigError::EmptyModule(directive.to_owned())),
        Some((module, value)) => value
            .parse::<Level>()
            .map(|level| (Some(module), level))
            .map_err(invalid_level),
    }
}

/// Rejects module names the textual form could not carry.
#[cfg(feature = "serde")]
fn check_module(module: &str, level: Level) -> Result<(), LevelConfigError> {
    let directive = format!("{module}={level}");
    if module.is_empty() {
        Err(LevelConfigError::EmptyModule(directive))
    } else if module.contains(['=', ',']) {
        Err(LevelConfigError::Malformed(directive))
    } else {
        Ok(())
    }
}
