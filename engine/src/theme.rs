//! Persisted light/dark display mode.
//!
//! The mode lives in a host-provided key-value store under
//! [`THEME_STORAGE_KEY`]. Storage problems never reach the reader: a failed
//! read yields the configured default and a failed write keeps the toggled
//! mode in memory only.

use crate::error::{EngineError, EngineResult};
use crate::port::PresentationPort;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

/// Storage key holding the persisted mode.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Mode used when nothing has been persisted yet.
pub const DEFAULT_THEME_MODE: ThemeMode = ThemeMode::Light;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Stylesheet enabled while this mode is active; the other one is disabled.
    pub fn stylesheet(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light.css",
            ThemeMode::Dark => "theme-dark.css",
        }
    }

    /// Glyph shown on the toggle button: it advertises the mode you switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            ThemeMode::Light => "🌙",
            ThemeMode::Dark => "☀️",
        }
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        DEFAULT_THEME_MODE
    }
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(EngineError::InvalidThemeValue(value.to_string())),
        }
    }
}

/// Persistent key-value store provided by the host.
pub trait ThemeStore {
    fn get(&self, key: &str) -> EngineResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> EngineResult<()>;
}

/// Volatile store, used by tests and by hosts without persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    values: HashMap<String, String>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl ThemeStore for MemoryThemeStore {
    fn get(&self, key: &str) -> EngineResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> EngineResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store that fails every operation, the way a browser with storage disabled
/// behaves.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableThemeStore;

impl ThemeStore for UnavailableThemeStore {
    fn get(&self, _key: &str) -> EngineResult<Option<String>> {
        Err(EngineError::StoreUnavailable("storage is disabled".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> EngineResult<()> {
        Err(EngineError::StoreUnavailable("storage is disabled".to_string()))
    }
}

pub struct ThemeController<S: ThemeStore> {
    store: S,
    default_mode: ThemeMode,
    current: ThemeMode,
    applied: Option<ThemeMode>,
}

impl<S: ThemeStore> ThemeController<S> {
    /// Reads the persisted mode once; nothing is applied yet.
    pub fn new(store: S, default_mode: ThemeMode) -> Self {
        let current = Self::read(&store).unwrap_or(default_mode);
        Self {
            store,
            default_mode,
            current,
            applied: None,
        }
    }

    fn read(store: &S) -> Option<ThemeMode> {
        match store.get(THEME_STORAGE_KEY) {
            Ok(Some(value)) => match value.parse() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    log::warn!("Ignoring persisted theme: {e}");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                log::debug!("Theme storage read failed: {e}");
                None
            }
        }
    }

    /// Current mode: the persisted one read at construction, changed only by
    /// [`toggle`](Self::toggle).
    pub fn theme(&self) -> ThemeMode {
        self.current
    }

    pub fn default_mode(&self) -> ThemeMode {
        self.default_mode
    }

    /// Mode last pushed to the presentation, if any.
    pub fn applied(&self) -> Option<ThemeMode> {
        self.applied
    }

    /// Push `mode` to the presentation. Returns `false` when it was already
    /// applied and nothing changed.
    pub fn apply<P: PresentationPort>(&mut self, mode: ThemeMode, port: &mut P) -> bool {
        if self.applied == Some(mode) {
            return false;
        }
        port.apply_theme(mode);
        self.applied = Some(mode);
        log::debug!("Applied {mode} theme");
        true
    }

    /// Apply whatever mode is current, typically once at page load.
    pub fn load<P: PresentationPort>(&mut self, port: &mut P) -> ThemeMode {
        let mode = self.current;
        self.apply(mode, port);
        mode
    }

    pub fn toggle<P: PresentationPort>(&mut self, port: &mut P) -> ThemeMode {
        let next = self.current.toggled();
        self.current = next;
        if let Err(e) = self.store.set(THEME_STORAGE_KEY, next.as_str()) {
            log::warn!("Theme change to {next} will not persist: {e}");
        }
        self.apply(next, port);
        log::info!("Switched to {next} theme");
        next
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
