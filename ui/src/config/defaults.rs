/// Default configuration file embedded in the binary
pub const DEFAULT_CONFIG: &str = include_str!("../../../config.default.toml");

/// Name of the settings file holding persisted values such as the theme
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Directory under the user's config dir owned by this application
pub const APP_DIR_NAME: &str = "docnav";
