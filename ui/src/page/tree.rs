use engine::clipboard::CopyOutcome;
use engine::nav::{EntryId, Heading, NavTree, SectionId};
use engine::port::PresentationPort;
use engine::theme::ThemeMode;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone)]
pub struct SectionNode {
    pub title: String,
    pub entries: Vec<EntryId>,
    pub visible: bool,
}

#[derive(Debug, Clone)]
pub struct EntryNode {
    pub label: String,
    pub target: String,
    pub visible: bool,
    pub active: bool,
}

/// In-memory stand-in for the rendered page: the navigation sidebar, the
/// headings it links to, the search box and the theme switch.
#[derive(Debug, Clone)]
pub struct PresentationTree {
    title: String,
    sections: Vec<SectionNode>,
    entries: Vec<EntryNode>,
    targets: HashSet<String>,
    scrolled_to: Option<String>,
    search_focused: bool,
    theme: Option<ThemeMode>,
    copy_indicators: BTreeMap<String, CopyOutcome>,
}

impl PresentationTree {
    pub fn new(title: &str, nav: &NavTree, headings: &[Heading]) -> Self {
        Self {
            title: title.to_string(),
            sections: nav
                .sections()
                .iter()
                .map(|section| SectionNode {
                    title: section.title().to_string(),
                    entries: section.entries().to_vec(),
                    visible: true,
                })
                .collect(),
            entries: nav
                .entries()
                .iter()
                .map(|entry| EntryNode {
                    label: entry.label().to_string(),
                    target: entry.target_id().to_string(),
                    visible: true,
                    active: false,
                })
                .collect(),
            targets: headings
                .iter()
                .map(|heading| heading.id().to_string())
                .collect(),
            scrolled_to: None,
            search_focused: false,
            theme: None,
            copy_indicators: BTreeMap::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sections(&self) -> &[SectionNode] {
        &self.sections
    }

    pub fn entries(&self) -> &[EntryNode] {
        &self.entries
    }

    pub fn is_entry_visible(&self, entry: EntryId) -> bool {
        self.entries.get(entry.0).is_some_and(|node| node.visible)
    }

    pub fn is_section_visible(&self, section: SectionId) -> bool {
        self.sections.get(section.0).is_some_and(|node| node.visible)
    }

    pub fn active_entries(&self) -> Vec<EntryId> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, node)| node.active)
            .map(|(index, _)| EntryId(index))
            .collect()
    }

    /// Last element scrolled into view
    pub fn scrolled_to(&self) -> Option<&str> {
        self.scrolled_to.as_deref()
    }

    pub fn is_search_focused(&self) -> bool {
        self.search_focused
    }

    pub fn theme(&self) -> Option<ThemeMode> {
        self.theme
    }

    pub fn copy_indicator(&self, block_id: &str) -> Option<CopyOutcome> {
        self.copy_indicators.get(block_id).copied()
    }
}

impl PresentationPort for PresentationTree {
    fn set_entry_visible(&mut self, entry: EntryId, visible: bool) {
        if let Some(node) = self.entries.get_mut(entry.0) {
            node.visible = visible;
        }
    }

    fn set_section_visible(&mut self, section: SectionId, visible: bool) {
        if let Some(node) = self.sections.get_mut(section.0) {
            node.visible = visible;
        }
    }

    fn set_active(&mut self, entry: EntryId, active: bool) {
        if let Some(node) = self.entries.get_mut(entry.0) {
            node.active = active;
        }
    }

    fn contains_target(&self, target_id: &str) -> bool {
        self.targets.contains(target_id)
    }

    fn scroll_into_view(&mut self, target_id: &str) {
        self.scrolled_to = Some(target_id.to_string());
    }

    fn focus_search(&mut self) {
        self.search_focused = true;
    }

    fn blur_search(&mut self) {
        self.search_focused = false;
    }

    fn apply_theme(&mut self, mode: ThemeMode) {
        self.theme = Some(mode);
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
