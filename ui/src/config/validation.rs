use super::app::AppConfig;

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid tracker band: top {top}%, bottom {bottom}% ({reason})")]
    TriggerBand { top: f64, bottom: f64, reason: String },
    #[error("Invalid clipboard feedback_ms: {configured} (min: {min_limit}, max: {max_limit})")]
    CopyFeedback {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::TriggerBand { top, bottom, reason } => {
                format!(
                    "Section tracking band is invalid!\n\n\
                    Configured margins: top {top}%, bottom {bottom}%\n\
                    Problem: {reason}\n\n\
                    Please update band_top_percent and band_bottom_percent under [tracker] so that both are \
                    between 0 and 100 and together stay below 100."
                )
            }
            ConfigValidationError::CopyFeedback {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Copy feedback duration out of range!\n\n\
                    Your configured value: {configured} ms\n\
                    Valid range: {min_limit} - {max_limit} ms\n\n\
                    Please update feedback_ms under [clipboard]."
                )
            }
        }
    }
}

/// Configuration loading result
#[derive(Debug)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
    ValidationError(String),
}

impl ConfigLoadResult {
    /// The loaded configuration, or a message suitable for the user.
    pub fn as_result(&self) -> Result<&AppConfig, String> {
        match self {
            ConfigLoadResult::Success(config) => Ok(config),
            ConfigLoadResult::LoadError(msg)
            | ConfigLoadResult::DeserializeError(msg)
            | ConfigLoadResult::ValidationError(msg) => Err(msg.clone()),
        }
    }
}
