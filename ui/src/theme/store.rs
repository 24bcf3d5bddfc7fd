use crate::config::defaults::{APP_DIR_NAME, SETTINGS_FILE_NAME};
use engine::error::{EngineError, EngineResult};
use engine::theme::ThemeStore;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key-value settings persisted as a flat TOML table.
///
/// The file is read on every `get` so several processes see each other's
/// writes. A store without a path behaves like disabled browser storage.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: Option<PathBuf>,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// `<config dir>/docnav/settings.toml`, or a store that is always
    /// unavailable when the platform has no config directory.
    pub fn in_config_dir() -> Self {
        let path = dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME));
        if path.is_none() {
            log::warn!("No user config directory, theme changes will not persist");
        }
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn require_path(&self) -> EngineResult<&Path> {
        self.path
            .as_deref()
            .ok_or_else(|| EngineError::StoreUnavailable("no settings location".to_string()))
    }

    fn read_all(&self) -> EngineResult<BTreeMap<String, String>> {
        let path = self.require_path()?;
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(path).map_err(|e| {
            EngineError::StoreUnavailable(format!(
                "Failed to read settings file '{}': {e}",
                path.display()
            ))
        })?;
        toml::from_str(&content).map_err(|e| {
            EngineError::StoreUnavailable(format!(
                "Failed to parse settings file '{}': {e}",
                path.display()
            ))
        })
    }

    /// Where a copy of an unreadable settings file is kept before it is replaced
    pub fn backup_path(path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_owned();
        name.push(".bak");
        PathBuf::from(name)
    }

    fn back_up(path: &Path) {
        let backup = Self::backup_path(path);
        match fs::copy(path, &backup) {
            Ok(_) => log::warn!(
                "Previous settings kept in '{}' for manual recovery",
                backup.display()
            ),
            Err(e) => log::warn!(
                "Could not keep a copy of '{}' before replacing it: {e}",
                path.display()
            ),
        }
    }
}

impl ThemeStore for FileThemeStore {
    fn get(&self, key: &str) -> EngineResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> EngineResult<()> {
        let path = self.require_path()?;
        let mut values = self.read_all().unwrap_or_else(|e| {
            log::warn!("Replacing unreadable settings file '{}': {e}", path.display());
            Self::back_up(path);
            BTreeMap::new()
        });
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                EngineError::StoreUnavailable(format!(
                    "Failed to create settings directory '{}': {e}",
                    parent.display()
                ))
            })?;
        }
        let content = toml::to_string(&values)
            .map_err(|e| EngineError::StoreUnavailable(format!("Failed to encode settings: {e}")))?;
        fs::write(path, content).map_err(|e| {
            EngineError::StoreUnavailable(format!(
                "Failed to write settings file '{}': {e}",
                path.display()
            ))
        })?;

        log::debug!("Persisted {key}={value} to {}", path.display());
        Ok(())
    }
}
