//! crates/logging/src/registry.rs
//! Per-module minimum levels and caller-info flags.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rustc_hash::FxHashMap;

use super::levels::Level;

/// Caller-info switches for one module, one bit per [`Level`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct CallerInfoFlags(u8);

impl CallerInfoFlags {
    const fn bit(level: Level) -> u8 {
        1 << level.as_u8()
    }

    const fn get(self, level: Level) -> bool {
        self.0 & Self::bit(level) != 0
    }

    fn set(&mut self, level: Level, enabled: bool) {
        if enabled {
            self.0 |= Self::bit(level);
        } else {
            self.0 &= !Self::bit(level);
        }
    }
}

#[derive(Debug, Default)]
struct Settings {
    default_level: Level,
    levels: FxHashMap<String, Level>,
    caller_info: FxHashMap<String, CallerInfoFlags>,
}

/// Thread-safe table of module verbosity settings.
///
/// Every query has a defined answer for every module name: modules that were
/// never configured report the default level ([`Level::Info`] unless changed
/// through [`set_default_level`](Self::set_default_level)) and have caller
/// info disabled at every level.
///
/// # Thread Safety
///
/// All state sits behind a single [`RwLock`]. Queries take the shared lock,
/// so concurrent readers never wait on one another; updates take the
/// exclusive lock for the duration of one map operation. A poisoned lock is
/// recovered rather than propagated so that logging never panics on behalf
/// of its caller.
///
/// # Examples
///
/// ```
/// use logging::{Level, LevelRegistry};
///
/// let registry = LevelRegistry::new();
/// registry.set_level("svc", Level::Warning);
///
/// assert!(registry.is_enabled_for("svc", Level::Error));
/// assert!(!registry.is_enabled_for("svc", Level::Info));
/// assert_eq!(registry.level("other"), Level::Info);
/// ```
#[derive(Debug, Default)]
pub struct LevelRegistry {
    settings: RwLock<Settings>,
}

impl LevelRegistry {
    /// Creates an empty registry with [`Level::Info`] as the default level.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Settings> {
        self.settings.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Settings> {
        self.settings.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Sets the minimum level for `module`.
    pub fn set_level(&self, module: &str, level: Level) {
        let mut settings = self.write();
        if let Some(current) = settings.levels.get_mut(module) {
            *current = level;
        } else {
            settings.levels.insert(module.to_owned(), level);
        }
    }

    /// Returns the minimum level for `module`, or the default level when the
    /// module was never configured.
    pub fn level(&self, module: &str) -> Level {
        let settings = self.read();
        settings
            .levels
            .get(module)
            .copied()
            .unwrap_or(settings.default_level)
    }

    /// Returns a snapshot of every explicitly configured module.
    ///
    /// Modules that only ever used the default level are not listed, and the
    /// default level itself is not part of the snapshot.
    pub fn all_levels(&self) -> HashMap<String, Level> {
        self.read()
            .levels
            .iter()
            .map(|(module, level)| (module.clone(), *level))
            .collect()
    }

    /// Reports whether records at `level` pass the minimum of `module`.
    #[inline]
    pub fn is_enabled_for(&self, module: &str, level: Level) -> bool {
        level.is_at_least(self.level(module))
    }

    /// Sets the level used for modules without an explicit setting.
    pub fn set_default_level(&self, level: Level) {
        self.write().default_level = level;
    }

    /// Returns the level used for modules without an explicit setting.
    pub fn default_level(&self) -> Level {
        self.read().default_level
    }

    /// Enables caller annotation for records of `module` at `level`.
    pub fn show_caller_info(&self, module: &str, level: Level) {
        self.set_caller_info(module, level, true);
    }

    /// Disables caller annotation for records of `module` at `level`.
    pub fn hide_caller_info(&self, module: &str, level: Level) {
        self.set_caller_info(module, level, false);
    }

    /// Reports whether records of `module` at `level` carry their call site.
    pub fn is_caller_info_enabled(&self, module: &str, level: Level) -> bool {
        self.read()
            .caller_info
            .get(module)
            .is_some_and(|flags| flags.get(level))
    }

    fn set_caller_info(&self, module: &str, level: Level, enabled: bool) {
        let mut settings = self.write();
        if let Some(flags) = settings.caller_info.get_mut(module) {
            flags.set(level, enabled);
        } else {
            let mut flags = CallerInfoFlags::default();
            flags.set(level, enabled);
            settings.caller_info.insert(module.to_owned(), flags);
        }
    }
}
