use super::{
    LoggingConfig,
    limits::*,
    ui::{ClipboardConfig, TrackerConfig},
    validation::ConfigValidationError,
};
use crate::theme::types::ThemeConfig;
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    page: Option<String>,

    #[serde(default)]
    theme: ThemeConfig,
    #[serde(default)]
    tracker: TrackerConfig,
    #[serde(default)]
    clipboard: ClipboardConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.tracker.band() {
            errors.push(ConfigValidationError::TriggerBand {
                top: self.tracker.band_top_percent(),
                bottom: self.tracker.band_bottom_percent(),
                reason: e.to_string(),
            });
        }

        let feedback_ms = self.clipboard.feedback_ms();
        if !(MIN_COPY_FEEDBACK_MS..=MAX_COPY_FEEDBACK_MS).contains(&feedback_ms) {
            errors.push(ConfigValidationError::CopyFeedback {
                configured: feedback_ms,
                min_limit: MIN_COPY_FEEDBACK_MS,
                max_limit: MAX_COPY_FEEDBACK_MS,
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Page document path, if configured
    pub fn page(&self) -> Option<&str> {
        self.page.as_deref()
    }

    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    pub fn tracker(&self) -> &TrackerConfig {
        &self.tracker
    }

    pub fn clipboard(&self) -> &ClipboardConfig {
        &self.clipboard
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}
