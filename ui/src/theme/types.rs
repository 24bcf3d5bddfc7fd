use engine::theme::{DEFAULT_THEME_MODE, ThemeMode};
use serde::Deserialize;

/// `[theme]` section of the configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    /// Mode used until the reader toggles for the first time
    #[serde(rename = "default", default)]
    pub default_mode: ThemeMode,
    /// Settings file override; defaults to the user config directory
    #[serde(default)]
    pub storage_file: Option<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_mode: DEFAULT_THEME_MODE,
            storage_file: None,
        }
    }
}
