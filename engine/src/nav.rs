//! Navigation model: entries grouped into sections, plus the page headings
//! they point at.
//!
//! The tree is built once from static page content and never mutated
//! afterwards. Visibility and active state live in the presentation layer,
//! not here.

use serde::{Deserialize, Serialize};

/// Index of a [`NavEntry`] inside its [`NavTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(pub usize);

/// Index of a [`NavSection`] inside its [`NavTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SectionId(pub usize);

/// A single clickable navigation item pointing at a page section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    id: EntryId,
    label: String,
    target_id: String,
    section: SectionId,
}

impl NavEntry {
    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    pub fn section(&self) -> SectionId {
        self.section
    }
}

/// A named group of entries, shown or hidden as a unit by the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    id: SectionId,
    title: String,
    entries: Vec<EntryId>,
}

impl NavSection {
    pub fn id(&self) -> SectionId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entries(&self) -> &[EntryId] {
        &self.entries
    }
}

/// A content heading in reading order.
///
/// `top` and `height` are in document coordinates (pixels from the top of
/// the page) and feed the scroll-driven intersection computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    #[serde(default)]
    pub id: Option<String>,
    pub text: String,
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub height: f64,
}

impl Heading {
    pub fn new(text: &str, top: f64, height: f64) -> Self {
        Self {
            id: None,
            text: text.to_string(),
            top,
            height,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Identifier of this heading; empty until [`assign_heading_ids`] ran.
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }
}

/// Generated identifier for the heading at `index` in document order.
pub fn heading_id(index: usize) -> String {
    format!("heading-{index}")
}

/// Give every heading without an identifier a deterministic one.
///
/// Identical content always yields identical identifiers.
pub fn assign_heading_ids(headings: &mut [Heading]) {
    for (index, heading) in headings.iter_mut().enumerate() {
        let missing = heading.id.as_deref().is_none_or(|id| id.trim().is_empty());
        if missing {
            heading.id = Some(heading_id(index));
        }
    }
}

/// Sections and entries in authored order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavTree {
    sections: Vec<NavSection>,
    entries: Vec<NavEntry>,
}

impl NavTree {
    pub fn builder() -> NavTreeBuilder {
        NavTreeBuilder::default()
    }

    /// Table of contents generation: one section titled `title` holding one
    /// entry per heading. Headings must already carry identifiers.
    pub fn from_headings(title: &str, headings: &[Heading]) -> Self {
        headings
            .iter()
            .fold(Self::builder().section(title), |builder, heading| {
                builder.entry(&heading.text, heading.id())
            })
            .build()
    }

    pub fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn entry(&self, id: EntryId) -> Option<&NavEntry> {
        self.entries.get(id.0)
    }

    pub fn section(&self, id: SectionId) -> Option<&NavSection> {
        self.sections.get(id.0)
    }

    /// First entry whose target matches `target_id`.
    pub fn entry_for_target(&self, target_id: &str) -> Option<EntryId> {
        self.entries
            .iter()
            .find(|entry| entry.target_id == target_id)
            .map(NavEntry::id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Chained builder for [`NavTree`].
///
/// Entries attach to the most recently opened section; an entry added
/// before any section opens an untitled one.
#[derive(Debug, Default)]
pub struct NavTreeBuilder {
    tree: NavTree,
}

impl NavTreeBuilder {
    pub fn section(mut self, title: &str) -> Self {
        self.open_section(title);
        self
    }

    pub fn entry(mut self, label: &str, target_id: &str) -> Self {
        if self.tree.sections.is_empty() {
            self.open_section("");
        }
        let section = SectionId(self.tree.sections.len() - 1);
        let id = EntryId(self.tree.entries.len());
        self.tree.entries.push(NavEntry {
            id,
            label: label.to_string(),
            target_id: target_id.to_string(),
            section,
        });
        self.tree.sections[section.0].entries.push(id);
        self
    }

    pub fn build(self) -> NavTree {
        self.tree
    }

    fn open_section(&mut self, title: &str) {
        let id = SectionId(self.tree.sections.len());
        self.tree.sections.push(NavSection {
            id,
            title: title.to_string(),
            entries: Vec::new(),
        });
    }
}
