use engine::clipboard::COPY_FEEDBACK_DURATION;
use engine::error::EngineResult;
use engine::tracker::TriggerBand;
use serde::Deserialize;
use std::time::Duration;

/// `[tracker]` section: trigger band root margins
#[derive(Debug, Deserialize, Default, Clone)]
pub struct TrackerConfig {
    band_top_percent: Option<f64>,
    band_bottom_percent: Option<f64>,
}

impl TrackerConfig {
    pub fn band_top_percent(&self) -> f64 {
        self.band_top_percent
            .unwrap_or(TriggerBand::DEFAULT.top_percent())
    }

    pub fn band_bottom_percent(&self) -> f64 {
        self.band_bottom_percent
            .unwrap_or(TriggerBand::DEFAULT.bottom_percent())
    }

    pub fn band(&self) -> EngineResult<TriggerBand> {
        TriggerBand::new(self.band_top_percent(), self.band_bottom_percent())
    }
}

/// `[clipboard]` section
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ClipboardConfig {
    feedback_ms: Option<u64>,
}

impl ClipboardConfig {
    /// How long the copy indicator stays visible (default: 2000ms)
    pub fn feedback_ms(&self) -> u64 {
        self.feedback_ms
            .unwrap_or(COPY_FEEDBACK_DURATION.as_millis() as u64)
    }

    pub fn feedback_duration(&self) -> Duration {
        Duration::from_millis(self.feedback_ms())
    }
}
