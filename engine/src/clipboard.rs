//! Copy-to-clipboard for code blocks with a self-clearing result indicator.

use crate::error::EngineResult;
use crate::port::PresentationPort;
use serde::Serialize;
use std::time::{Duration, Instant};

/// How long the "Copied!" / "Failed" indicator stays before reverting.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// Host clipboard. Best effort, never retried.
pub trait ClipboardService {
    fn write_text(&mut self, text: &str) -> EngineResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

impl CopyOutcome {
    pub fn label(self) -> &'static str {
        match self {
            CopyOutcome::Copied => "Copied!",
            CopyOutcome::Failed => "Failed",
        }
    }
}

#[derive(Debug, Clone)]
struct PendingIndicator {
    block_id: String,
    shown_at: Instant,
}

/// Tracks shown indicators and clears each one once its duration elapsed.
///
/// Time is passed in explicitly so hosts drive it from their tick loop.
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    duration: Duration,
    pending: Vec<PendingIndicator>,
}

impl CopyFeedback {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            pending: Vec::new(),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Copy `text` and show the outcome next to `block_id`.
    pub fn copy<C, P>(
        &mut self,
        clipboard: &mut C,
        block_id: &str,
        text: &str,
        now: Instant,
        port: &mut P,
    ) -> CopyOutcome
    where
        C: ClipboardService,
        P: PresentationPort,
    {
        let outcome = match clipboard.write_text(text) {
            Ok(()) => CopyOutcome::Copied,
            Err(e) => {
                log::warn!("Copy of '{block_id}' failed: {e}");
                CopyOutcome::Failed
            }
        };

        // A second click restarts the timer for that block.
        self.pending.retain(|pending| pending.block_id != block_id);
        self.pending.push(PendingIndicator {
            block_id: block_id.to_string(),
            shown_at: now,
        });
        port.show_copy_indicator(block_id, Some(outcome));
        outcome
    }

    /// Clear every indicator older than the feedback duration. Returns how
    /// many were cleared.
    pub fn tick<P: PresentationPort>(&mut self, now: Instant, port: &mut P) -> usize {
        let duration = self.duration;
        let (expired, kept): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|pending| now.saturating_duration_since(pending.shown_at) >= duration);
        self.pending = kept;
        for pending in &expired {
            port.show_copy_indicator(&pending.block_id, None);
        }
        expired.len()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(COPY_FEEDBACK_DURATION)
    }
}
