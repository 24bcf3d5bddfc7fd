use docnav::error::ErrorReporter;
use docnav::{AppError, components::common::Msg};
/// Integration helpers for error handling testing patterns
use std::sync::mpsc::Sender;

/// Quick helper for reporting errors from code that only holds a sender
///
/// # Example Usage:
/// ```no_run
/// use std::sync::mpsc;
/// use docnav::{AppError, components::common::Msg};
/// use error_integration::report_error_simple;
///
/// let (tx, _rx) = mpsc::channel::<Msg>();
///
/// fn load_page() -> Result<(), AppError> {
///     Err(AppError::Page("missing title".to_string()))
/// }
///
/// if let Err(e) = load_page() {
///     report_error_simple(&tx, e, "Page", "load");
/// }
/// ```
pub fn report_error_simple(tx: &Sender<Msg>, error: AppError, component: &str, operation: &str) {
    let reporter = ErrorReporter::new(tx.clone());
    reporter.report_simple(error, component, operation);
}

#[cfg(test)]
mod tests {
    use super::*;
    use docnav::components::common::{Msg, PopupActivityMsg};
    use engine::error::EngineError;
    use std::sync::mpsc;

    #[test]
    fn test_report_error_simple() {
        let (tx, rx) = mpsc::channel();
        let error = AppError::Config("test error".to_string());

        report_error_simple(&tx, error, "TestComponent", "test_operation");

        let received = rx.recv().unwrap();
        match received {
            Msg::PopupActivity(PopupActivityMsg::ShowError(AppError::Config(message))) => {
                assert!(message.starts_with("Configuration Error"));
                assert!(message.contains("test error"));
            }
            other => panic!("Expected PopupActivity ShowError message, got {other:?}"),
        }
    }

    #[test]
    fn test_warning_becomes_warning_popup() {
        let (tx, rx) = mpsc::channel();
        let reporter = ErrorReporter::new(tx);

        reporter.report_warning(
            AppError::Storage("settings.toml is read-only".to_string()),
            "Theme",
            "toggle",
        );

        match rx.recv().unwrap() {
            Msg::PopupActivity(PopupActivityMsg::ShowWarning(message)) => {
                assert!(message.contains("settings.toml is read-only"));
            }
            other => panic!("Expected PopupActivity ShowWarning message, got {other:?}"),
        }
    }

    #[test]
    fn test_engine_errors_keep_their_category() {
        let storage: AppError = EngineError::StoreUnavailable("denied".to_string()).into();
        let clipboard: AppError = EngineError::ClipboardUnavailable("headless".to_string()).into();

        assert!(matches!(storage, AppError::Storage(_)));
        assert!(matches!(clipboard, AppError::Clipboard(_)));
    }

    #[test]
    fn test_dropped_receiver_does_not_panic() {
        let (tx, rx) = mpsc::channel();
        drop(rx);

        report_error_simple(
            &tx,
            AppError::Clipboard("gone".to_string()),
            "TestComponent",
            "send",
        );
    }
}
