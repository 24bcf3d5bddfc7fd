use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

pub mod app;
pub mod defaults;
pub mod limits;
pub mod ui;
pub mod validation;

pub use app::AppConfig;
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Global configuration, set once at startup
static CONFIG: std::sync::OnceLock<ConfigLoadResult> = std::sync::OnceLock::new();

/// Environment variables are read as `DOCNAV__SECTION__KEY`
const ENV_PREFIX: &str = "DOCNAV";
const ENV_SEPARATOR: &str = "__";

/// Layer the embedded defaults, the user file and the environment.
///
/// `path` selects an explicit configuration file, which must then exist.
/// Without it an optional `docnav.toml` in the working directory is used.
pub fn load_config(path: Option<&Path>) -> ConfigLoadResult {
    dotenv::dotenv().ok();

    let file_source = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name("docnav").required(false),
    };

    let config = match Config::builder()
        .add_source(File::from_str(defaults::DEFAULT_CONFIG, FileFormat::Toml))
        .add_source(file_source)
        .add_source(Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR))
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your docnav.toml file and DOCNAV__* environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => {
            if let Err(validation_errors) = app_config.validate() {
                let error_messages: Vec<String> =
                    validation_errors.iter().map(|e| e.user_message()).collect();
                return ConfigLoadResult::ValidationError(error_messages.join("\n\n"));
            }
            ConfigLoadResult::Success(Box::new(app_config))
        }
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

/// Load the global configuration; later calls return the first result.
pub fn init_config(path: Option<&Path>) -> &'static ConfigLoadResult {
    CONFIG.get_or_init(|| load_config(path))
}

/// Logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::theme::ThemeMode;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_defaults_load_without_user_file() {
        let file = write_config("");
        match load_config(Some(file.path())) {
            ConfigLoadResult::Success(config) => {
                assert_eq!(config.theme().default_mode, ThemeMode::Light);
                assert_eq!(config.tracker().band_top_percent(), 20.0);
                assert_eq!(config.clipboard().feedback_ms(), 2000);
            }
            other => panic!("Expected defaults to load, got {other:?}"),
        }
    }

    #[test]
    fn test_user_file_overrides_defaults() {
        let file = write_config(
            "[theme]\ndefault = \"dark\"\n\n[tracker]\nband_top_percent = 0.0\nband_bottom_percent = 66.0\n",
        );
        match load_config(Some(file.path())) {
            ConfigLoadResult::Success(config) => {
                assert_eq!(config.theme().default_mode, ThemeMode::Dark);
                assert_eq!(config.tracker().band_bottom_percent(), 66.0);
            }
            other => panic!("Expected override to load, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_band_fails_validation() {
        let file = write_config("[tracker]\nband_top_percent = 60.0\nband_bottom_percent = 60.0\n");
        assert!(matches!(
            load_config(Some(file.path())),
            ConfigLoadResult::ValidationError(_)
        ));
    }

    #[test]
    fn test_unknown_theme_fails_deserialization() {
        let file = write_config("[theme]\ndefault = \"sepia\"\n");
        assert!(matches!(
            load_config(Some(file.path())),
            ConfigLoadResult::DeserializeError(_)
        ));
    }

    #[test]
    fn test_environment_overrides_user_file() {
        // No other test reads the logging level, so the variable cannot leak
        // into a parallel test.
        let file = write_config("[logging]\nlevel = \"warn\"\n");
        unsafe {
            std::env::set_var("DOCNAV__LOGGING__LEVEL", "debug");
        }

        let result = load_config(Some(file.path()));

        unsafe {
            std::env::remove_var("DOCNAV__LOGGING__LEVEL");
        }
        match result {
            ConfigLoadResult::Success(config) => assert_eq!(config.logging().level(), "debug"),
            other => panic!("Expected environment override to load, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_explicit_file_is_a_load_error() {
        let result = load_config(Some(Path::new("/nonexistent/docnav-config.toml")));
        assert!(matches!(result, ConfigLoadResult::LoadError(_)));
    }
}
