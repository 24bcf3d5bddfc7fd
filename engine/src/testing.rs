use crate::clipboard::CopyOutcome;
use crate::nav::{EntryId, SectionId};
use crate::port::PresentationPort;
use crate::theme::ThemeMode;
use std::collections::{BTreeMap, BTreeSet};

/// Presentation surface that records every write, for unit tests.
#[derive(Debug, Default)]
pub(crate) struct RecordingPort {
    pub targets: BTreeSet<String>,
    pub hidden_entries: BTreeSet<EntryId>,
    pub hidden_sections: BTreeSet<SectionId>,
    pub active: BTreeSet<EntryId>,
    pub scrolled_to: Vec<String>,
    pub search_focused: bool,
    pub theme_applications: Vec<ThemeMode>,
    pub copy_indicators: BTreeMap<String, CopyOutcome>,
}

impl RecordingPort {
    pub fn with_targets(targets: &[&str]) -> Self {
        Self {
            targets: targets.iter().map(|t| t.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn active_entries(&self) -> Vec<EntryId> {
        self.active.iter().copied().collect()
    }
}

impl PresentationPort for RecordingPort {
    fn set_entry_visible(&mut self, entry: EntryId, visible: bool) {
        if visible {
            self.hidden_entries.remove(&entry);
        } else {
            self.hidden_entries.insert(entry);
        }
    }

    fn set_section_visible(&mut self, section: SectionId, visible: bool) {
        if visible {
            self.hidden_sections.remove(&section);
        } else {
            self.hidden_sections.insert(section);
        }
    }

    fn set_active(&mut self, entry: EntryId, active: bool) {
        if active {
            self.active.insert(entry);
        } else {
            self.active.remove(&entry);
        }
    }

    fn contains_target(&self, target_id: &str) -> bool {
        self.targets.contains(target_id)
    }

    fn scroll_into_view(&mut self, target_id: &str) {
        self.scrolled_to.push(target_id.to_string());
    }

    fn focus_search(&mut self) {
        self.search_focused = true;
    }

    fn blur_search(&mut self) {
        self.search_focused = false;
    }

    fn apply_theme(&mut self, mode: ThemeMode) {
        self.theme_applications.push(mode);
    }

    fn show_copy_indicator(&mut self, block_id: &str, outcome: Option<CopyOutcome>) {
        match outcome {
            Some(outcome) => {
                self.copy_indicators.insert(block_id.to_string(), outcome);
            }
            None => {
                self.copy_indicators.remove(block_id);
            }
        }
    }
}
