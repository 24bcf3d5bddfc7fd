use thiserror::Error;

/// Failures raised by the host collaborators the engine talks to.
///
/// None of these ever reach the reader of the page: the theme controller
/// degrades to its default mode and the copy button shows a transient
/// failure indicator instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Persistent storage unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Invalid theme value '{0}' (expected 'light' or 'dark')")]
    InvalidThemeValue(String),

    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Invalid trigger band: {0}")]
    InvalidTriggerBand(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
