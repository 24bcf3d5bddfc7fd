use crate::components::common::{Msg, PopupActivityMsg};
use engine::error::EngineError;
use std::fmt::Display;
use std::sync::mpsc::{self, Sender};

/// Application-wide error types for the docnav host.
///
/// Most failures in this application are deliberately non-fatal: storage
/// problems degrade to the default theme and a missing navigation target
/// makes the link inert. The variants below are what remains worth
/// reporting, mostly while loading configuration and the page document.
///
/// # Error Categories
///
/// - [`Config`] - configuration loading and validation
/// - [`Page`] - page document reading, parsing and validation
/// - [`Storage`] - persisted settings (logged, never shown as a popup)
/// - [`Clipboard`] - system clipboard access
/// - [`Component`] - presentation tree inconsistencies
///
/// # Examples
///
/// ```no_run
/// use docnav::error::{AppError, ErrorReporter};
///
/// fn report_page_problem(reporter: &ErrorReporter, detail: &str) {
///     reporter.report_simple(AppError::Page(detail.to_string()), "Page", "load");
/// }
/// ```
///
/// [`Config`]: AppError::Config
/// [`Page`]: AppError::Page
/// [`Storage`]: AppError::Storage
/// [`Clipboard`]: AppError::Clipboard
/// [`Component`]: AppError::Component
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Configuration loading and validation errors.
    ///
    /// # Recovery
    /// - Fall back to the embedded defaults
    /// - Point the user at the offending key
    Config(String),

    /// The page document could not be read, parsed or validated.
    Page(String),

    /// Persisted settings could not be read or written.
    Storage(String),

    /// The system clipboard is missing or refused the write.
    Clipboard(String),

    /// Presentation tree issues, e.g. a copy request for an unknown block.
    Component(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Page(msg) => write!(f, "Page Error: {msg}"),
            AppError::Storage(msg) => write!(f, "Storage Error: {msg}"),
            AppError::Clipboard(msg) => write!(f, "Clipboard Error: {msg}"),
            AppError::Component(msg) => write!(f, "Component Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Message without the category prefix
    pub fn message(&self) -> &str {
        match self {
            AppError::Config(msg)
            | AppError::Page(msg)
            | AppError::Storage(msg)
            | AppError::Clipboard(msg)
            | AppError::Component(msg) => msg,
        }
    }
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::StoreUnavailable(_) => AppError::Storage(err.to_string()),
            EngineError::ClipboardUnavailable(_) => AppError::Clipboard(err.to_string()),
            EngineError::InvalidThemeValue(_) | EngineError::InvalidTriggerBand(_) => {
                AppError::Config(err.to_string())
            }
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Error severity levels for appropriate UI response
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    /// Show a warning notice and log
    Warning,
    /// Show an error notice and log
    Error,
    /// Show an error notice, log, and let the caller exit
    Critical,
}

/// Context information for errors
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub component: String,
    pub operation: String,
    pub user_message: String,
    pub technical_details: Option<String>,
    pub suggestion: Option<String>,
    pub severity: ErrorSeverity,
}

impl ErrorContext {
    /// Create new error context with a generic message; use
    /// [`with_message`](Self::with_message) for a specific one.
    pub fn new(component: &str, operation: &str) -> Self {
        Self {
            component: component.to_string(),
            operation: operation.to_string(),
            user_message: format!("An error occurred in {component}. Please try again."),
            technical_details: None,
            suggestion: None,
            severity: ErrorSeverity::Error,
        }
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.user_message = message.to_string();
        self
    }

    pub fn with_technical_details(mut self, details: &str) -> Self {
        self.technical_details = Some(details.to_string());
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }

    pub fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }
}

/// Contextual error with rich information
#[derive(Debug, Clone)]
pub struct ContextualError {
    pub error: AppError,
    pub context: ErrorContext,
}

impl ContextualError {
    pub fn new(error: AppError, context: ErrorContext) -> Self {
        Self { error, context }
    }
}

impl Display for ContextualError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.context.user_message, self.error)
    }
}

/// Central error reporting: logs with context and forwards a notice to
/// the model's message loop.
#[derive(Clone, Debug)]
pub struct ErrorReporter {
    tx: Sender<Msg>,
}

impl ErrorReporter {
    pub fn new(tx: Sender<Msg>) -> Self {
        Self { tx }
    }

    /// Report a simple error with basic context
    pub fn report_simple(&self, error: AppError, component: &str, operation: &str) {
        let context =
            ErrorContext::new(component, operation).with_technical_details(&error.to_string());
        self.report(error, context);
    }

    /// Report a warning
    pub fn report_warning(&self, error: AppError, component: &str, operation: &str) {
        let context = ErrorContext::new(component, operation)
            .with_message(&error.to_string())
            .with_severity(ErrorSeverity::Warning);
        self.report(error, context);
    }

    /// Report an error the caller is about to exit on
    pub fn report_critical(
        &self,
        error: AppError,
        component: &str,
        operation: &str,
        user_message: &str,
    ) {
        let context = ErrorContext::new(component, operation)
            .with_message(user_message)
            .with_technical_details(&error.to_string())
            .with_severity(ErrorSeverity::Critical)
            .with_suggestion("The application will terminate. Please fix the issue and restart.");
        self.report(error, context);
    }

    /// Report error with full context
    pub fn report(&self, error: AppError, context: ErrorContext) {
        let contextual_error = ContextualError::new(error.clone(), context.clone());

        match context.severity {
            ErrorSeverity::Warning => {
                log::warn!(
                    "[{}:{}] {} {}",
                    context.component,
                    context.operation,
                    contextual_error,
                    self.format_additional_context(&context)
                );
            }
            ErrorSeverity::Error => {
                log::error!(
                    "[{}:{}] {} {}",
                    context.component,
                    context.operation,
                    contextual_error,
                    self.format_additional_context(&context)
                );
            }
            ErrorSeverity::Critical => {
                log::error!(
                    "[CRITICAL] [{}:{}] {} {}",
                    context.component,
                    context.operation,
                    contextual_error,
                    self.format_additional_context(&context)
                );
            }
        }

        let popup_msg = match context.severity {
            ErrorSeverity::Warning => {
                PopupActivityMsg::ShowWarning(self.format_user_message(&context))
            }
            ErrorSeverity::Error | ErrorSeverity::Critical => {
                PopupActivityMsg::ShowError(self.create_formatted_error(&error, &context))
            }
        };
        if let Err(e) = self.tx.send(Msg::PopupActivity(popup_msg)) {
            log::error!("Failed to send notice to the model: {e}");
        }
    }

    /// Format additional context information for logging
    fn format_additional_context(&self, context: &ErrorContext) -> String {
        let mut parts = Vec::new();

        if let Some(ref technical_details) = context.technical_details {
            parts.push(format!("Technical: {technical_details}"));
        }

        if let Some(ref suggestion) = context.suggestion {
            parts.push(format!("Suggestion: {suggestion}"));
        }

        if parts.is_empty() {
            String::new()
        } else {
            format!("\n{}", parts.join("\n"))
        }
    }

    /// Format user-friendly message for display
    fn format_user_message(&self, context: &ErrorContext) -> String {
        let mut message = context.user_message.clone();

        if let Some(ref suggestion) = context.suggestion {
            message.push_str(&format!("\n\nSuggestion: {suggestion}"));
        }

        message
    }

    fn create_formatted_error(&self, error: &AppError, context: &ErrorContext) -> AppError {
        let mut formatted_message = String::new();

        formatted_message.push_str(self.get_error_title(error));
        formatted_message.push_str(&format!("\n\n{}", context.user_message));

        if let Some(ref technical) = context.technical_details {
            formatted_message.push_str(&format!("\n\nDetails: {technical}"));
        }

        if let Some(ref suggestion) = context.suggestion {
            formatted_message.push_str(&format!("\n\nSuggestion: {suggestion}"));
        }

        match error {
            AppError::Config(_) => AppError::Config(formatted_message),
            AppError::Page(_) => AppError::Page(formatted_message),
            AppError::Storage(_) => AppError::Storage(formatted_message),
            AppError::Clipboard(_) => AppError::Clipboard(formatted_message),
            AppError::Component(_) => AppError::Component(formatted_message),
        }
    }

    fn get_error_title(&self, error: &AppError) -> &'static str {
        match error {
            AppError::Config(_) => "Configuration Error",
            AppError::Page(_) => "Page Error",
            AppError::Storage(_) => "Storage Error",
            AppError::Clipboard(_) => "Clipboard Error",
            AppError::Component(_) => "Component Error",
        }
    }
}

/// Report an error that stops the application before the model exists and
/// return the text to show the user on the way out.
pub fn report_startup_failure(error: AppError, operation: &str, user_message: &str) -> String {
    let (tx, rx) = mpsc::channel();
    ErrorReporter::new(tx).report_critical(error.clone(), "Startup", operation, user_message);

    match rx.try_recv() {
        Ok(Msg::PopupActivity(PopupActivityMsg::ShowError(formatted))) => {
            formatted.message().to_string()
        }
        _ => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;
    use std::sync::mpsc;

    #[test]
    fn test_engine_errors_map_to_categories() {
        let storage: AppError = EngineError::StoreUnavailable("disk full".to_string()).into();
        assert!(matches!(storage, AppError::Storage(_)));

        let band: AppError = EngineError::InvalidTriggerBand("top".to_string()).into();
        assert!(matches!(band, AppError::Config(_)));
    }

    #[test]
    fn test_warning_is_forwarded_as_warning_popup() {
        let (tx, rx) = mpsc::channel();
        let reporter = ErrorReporter::new(tx);

        reporter.report_warning(
            AppError::Component("no block 'x'".to_string()),
            "Copy",
            "copy_block",
        );

        let received = assert_ok!(rx.try_recv());
        match received {
            Msg::PopupActivity(PopupActivityMsg::ShowWarning(text)) => {
                assert!(text.contains("no block 'x'"));
            }
            other => panic!("Expected warning popup, got {other:?}"),
        }
    }

    #[test]
    fn test_critical_error_carries_title_and_suggestion() {
        let (tx, rx) = mpsc::channel();
        let reporter = ErrorReporter::new(tx);

        reporter.report_critical(
            AppError::Page("missing".to_string()),
            "Page",
            "load",
            "The page document could not be loaded",
        );

        match assert_ok!(rx.try_recv()) {
            Msg::PopupActivity(PopupActivityMsg::ShowError(AppError::Page(text))) => {
                assert!(text.starts_with("Page Error"));
                assert!(text.contains("could not be loaded"));
                assert!(text.contains("Suggestion"));
            }
            other => panic!("Expected page error popup, got {other:?}"),
        }
    }

    #[test]
    fn test_closed_channel_does_not_panic() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        ErrorReporter::new(tx).report_simple(AppError::Clipboard("gone".to_string()), "Test", "op");
    }

    #[test]
    fn test_startup_failure_message_is_formatted_for_the_terminal() {
        let message = report_startup_failure(
            AppError::Config("band_top_percent must be below 100".to_string()),
            "load_config",
            "The configuration could not be loaded",
        );

        assert!(message.starts_with("Configuration Error\n\nThe configuration could not be loaded"));
        assert!(message.contains("Details: Configuration Error: band_top_percent must be below 100"));
        assert!(message.contains("Suggestion: The application will terminate."));
    }
}
