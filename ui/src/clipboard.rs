use copypasta::{ClipboardContext, ClipboardProvider};
use engine::clipboard::ClipboardService;
use engine::error::{EngineError, EngineResult};

/// System clipboard. Creating the context can fail on headless machines;
/// every copy then reports failure instead of aborting.
pub struct SystemClipboard {
    context: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let context = match ClipboardContext::new() {
            Ok(context) => Some(context),
            Err(e) => {
                log::warn!("System clipboard unavailable: {e}");
                None
            }
        };
        Self { context }
    }

    pub fn is_available(&self) -> bool {
        self.context.is_some()
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("available", &self.is_available())
            .finish()
    }
}

impl ClipboardService for SystemClipboard {
    fn write_text(&mut self, text: &str) -> EngineResult<()> {
        let Some(context) = self.context.as_mut() else {
            return Err(EngineError::ClipboardUnavailable(
                "no system clipboard".to_string(),
            ));
        };
        context
            .set_contents(text.to_string())
            .map_err(|e| EngineError::ClipboardUnavailable(e.to_string()))
    }
}
