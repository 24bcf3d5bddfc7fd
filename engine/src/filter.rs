//! Realtime substring filter over the navigation list.
//!
//! Every input event re-evaluates the whole list; there is no filter state
//! beyond the pre-lowered labels, so the same query always yields the same
//! [`VisibilityPlan`].

use crate::nav::{EntryId, NavTree, SectionId};
use crate::port::PresentationPort;
use serde::Serialize;

/// Trim and lowercase a raw query the same way labels are compared.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Every per-entry and per-section shown/hidden decision of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibilityPlan {
    query: String,
    entries: Vec<bool>,
    sections: Vec<bool>,
}

impl VisibilityPlan {
    /// The normalized query this plan was computed for.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_entry_visible(&self, entry: EntryId) -> bool {
        self.entries.get(entry.0).copied().unwrap_or(false)
    }

    pub fn is_section_visible(&self, section: SectionId) -> bool {
        self.sections.get(section.0).copied().unwrap_or(false)
    }

    pub fn visible_entries(&self) -> usize {
        self.entries.iter().filter(|visible| **visible).count()
    }

    pub fn visible_sections(&self) -> usize {
        self.sections.iter().filter(|visible| **visible).count()
    }

    /// Nothing matched: the list must render as an empty state.
    pub fn is_empty(&self) -> bool {
        self.visible_entries() == 0
    }

    /// Write every decision into the presentation tree.
    pub fn apply_to<P: PresentationPort>(&self, port: &mut P) {
        for (index, visible) in self.entries.iter().enumerate() {
            port.set_entry_visible(EntryId(index), *visible);
        }
        for (index, visible) in self.sections.iter().enumerate() {
            port.set_section_visible(SectionId(index), *visible);
        }
    }
}

#[derive(Debug, Clone)]
pub struct FilterIndex {
    labels: Vec<String>,
    entry_sections: Vec<SectionId>,
    section_count: usize,
}

impl FilterIndex {
    pub fn new(tree: &NavTree) -> Self {
        Self {
            labels: tree
                .entries()
                .iter()
                .map(|entry| entry.label().to_lowercase())
                .collect(),
            entry_sections: tree.entries().iter().map(|entry| entry.section()).collect(),
            section_count: tree.sections().len(),
        }
    }

    pub fn apply_query(&self, query: &str) -> VisibilityPlan {
        let query = normalize_query(query);

        let entries: Vec<bool> = self
            .labels
            .iter()
            .map(|label| query.is_empty() || label.contains(query.as_str()))
            .collect();

        let mut sections = vec![query.is_empty(); self.section_count];
        for (visible, section) in entries.iter().zip(&self.entry_sections) {
            if *visible {
                if let Some(slot) = sections.get_mut(section.0) {
                    *slot = true;
                }
            }
        }

        log::trace!(
            "Filter '{query}' keeps {} of {} entries",
            entries.iter().filter(|visible| **visible).count(),
            entries.len()
        );

        VisibilityPlan {
            query,
            entries,
            sections,
        }
    }

    pub fn clear_query(&self) -> VisibilityPlan {
        self.apply_query("")
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
