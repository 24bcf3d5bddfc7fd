//! Active-section tracking.
//!
//! A heading becomes current when it enters the trigger band near the top
//! of the viewport and stays current until another heading enters the band.
//! Leaving the band changes nothing. Hosts with a native intersection
//! observer feed [`SectionTracker::on_intersection`] directly; hosts that
//! only know scroll positions use [`SectionTracker::observe_scroll`], which
//! derives the same intersection changes from heading geometry.

use crate::error::{EngineError, EngineResult};
use crate::nav::{EntryId, Heading, NavTree, assign_heading_ids};
use crate::port::PresentationPort;
use serde::{Deserialize, Serialize};

/// Viewport region, as root margins in percent of viewport height, inside
/// which a heading counts as crossing into view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriggerBand {
    top_percent: f64,
    bottom_percent: f64,
}

impl TriggerBand {
    /// `-20%` top and `-70%` bottom root margin: the band spans 20%..30% of
    /// the viewport height.
    pub const DEFAULT: TriggerBand = TriggerBand {
        top_percent: 20.0,
        bottom_percent: 70.0,
    };

    pub fn new(top_percent: f64, bottom_percent: f64) -> EngineResult<Self> {
        let in_range = |value: f64| (0.0..100.0).contains(&value);
        if !in_range(top_percent) || !in_range(bottom_percent) {
            return Err(EngineError::InvalidTriggerBand(format!(
                "margins must be within 0..100 percent (top: {top_percent}, bottom: {bottom_percent})"
            )));
        }
        if top_percent + bottom_percent >= 100.0 {
            return Err(EngineError::InvalidTriggerBand(format!(
                "margins leave no band (top: {top_percent}, bottom: {bottom_percent})"
            )));
        }
        Ok(Self {
            top_percent,
            bottom_percent,
        })
    }

    pub fn top_percent(&self) -> f64 {
        self.top_percent
    }

    pub fn bottom_percent(&self) -> f64 {
        self.bottom_percent
    }

    /// Band edges in document coordinates for the given scroll position.
    pub fn span(&self, scroll_offset: f64, viewport_height: f64) -> (f64, f64) {
        let top = scroll_offset + viewport_height * self.top_percent / 100.0;
        let bottom = scroll_offset + viewport_height * (100.0 - self.bottom_percent) / 100.0;
        (top, bottom)
    }

    pub fn intersects(&self, heading: &Heading, scroll_offset: f64, viewport_height: f64) -> bool {
        if viewport_height <= 0.0 {
            return false;
        }
        let (band_top, band_bottom) = self.span(scroll_offset, viewport_height);
        let heading_bottom = heading.top + heading.height.max(0.0);
        heading.top < band_bottom && heading_bottom >= band_top
    }
}

impl Default for TriggerBand {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One heading crossing into or out of the trigger band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntersectionChange {
    pub target_id: String,
    pub is_intersecting: bool,
}

impl IntersectionChange {
    pub fn entered(target_id: &str) -> Self {
        Self {
            target_id: target_id.to_string(),
            is_intersecting: true,
        }
    }

    pub fn left(target_id: &str) -> Self {
        Self {
            target_id: target_id.to_string(),
            is_intersecting: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SectionTracker {
    links: Vec<(EntryId, String)>,
    headings: Vec<Heading>,
    intersecting: Vec<bool>,
    band: TriggerBand,
    active: Option<EntryId>,
}

impl SectionTracker {
    /// Headings without an identifier get `heading-<index>`.
    pub fn new(tree: &NavTree, mut headings: Vec<Heading>, band: TriggerBand) -> Self {
        assign_heading_ids(&mut headings);
        let intersecting = vec![false; headings.len()];
        Self {
            links: tree
                .entries()
                .iter()
                .map(|entry| (entry.id(), entry.target_id().to_string()))
                .collect(),
            headings,
            intersecting,
            band,
            active: None,
        }
    }

    pub fn active(&self) -> Option<EntryId> {
        self.active
    }

    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    pub fn band(&self) -> TriggerBand {
        self.band
    }

    /// Apply a batch of intersection notifications. Each heading that
    /// enters the band clears every active mark and activates its entry;
    /// within one batch the last entering heading wins.
    pub fn on_intersection<P: PresentationPort>(
        &mut self,
        changes: &[IntersectionChange],
        port: &mut P,
    ) -> Option<EntryId> {
        for change in changes.iter().filter(|change| change.is_intersecting) {
            let entry = self.entry_for_target(&change.target_id);
            if entry.is_none() {
                log::debug!("No navigation entry for heading '{}'", change.target_id);
            }
            self.mark_active(entry, port);
        }
        self.active
    }

    /// Derive intersection changes from heading geometry and apply them.
    pub fn observe_scroll<P: PresentationPort>(
        &mut self,
        scroll_offset: f64,
        viewport_height: f64,
        port: &mut P,
    ) -> Option<EntryId> {
        let changes = self.intersection_changes(scroll_offset, viewport_height);
        self.on_intersection(&changes, port)
    }

    /// Headings whose band membership differs from the previous observation,
    /// in document order. The first observation reports every heading that
    /// is already inside the band.
    pub fn intersection_changes(
        &mut self,
        scroll_offset: f64,
        viewport_height: f64,
    ) -> Vec<IntersectionChange> {
        let mut changes = Vec::new();
        for (heading, was_intersecting) in self.headings.iter().zip(self.intersecting.iter_mut()) {
            let now = self.band.intersects(heading, scroll_offset, viewport_height);
            if now != *was_intersecting {
                *was_intersecting = now;
                changes.push(IntersectionChange {
                    target_id: heading.id().to_string(),
                    is_intersecting: now,
                });
            }
        }
        changes
    }

    /// Click on a navigation entry: scroll its heading into view and mark it
    /// active right away. An entry whose target is missing is inert.
    pub fn on_click<P: PresentationPort>(&mut self, entry: EntryId, port: &mut P) -> bool {
        let Some(target) = self
            .links
            .iter()
            .find(|(id, _)| *id == entry)
            .map(|(_, target)| target.clone())
        else {
            log::debug!("Click on unknown navigation entry {entry:?}");
            return false;
        };
        if !port.contains_target(&target) {
            log::debug!("Navigation target '{target}' not found, ignoring click");
            return false;
        }
        port.scroll_into_view(&target);
        self.mark_active(Some(entry), port);
        true
    }

    fn entry_for_target(&self, target_id: &str) -> Option<EntryId> {
        self.links
            .iter()
            .find(|(_, target)| target == target_id)
            .map(|(id, _)| *id)
    }

    fn mark_active<P: PresentationPort>(&mut self, entry: Option<EntryId>, port: &mut P) {
        for (id, _) in &self.links {
            port.set_active(*id, false);
        }
        if let Some(entry) = entry {
            port.set_active(entry, true);
        }
        self.active = entry;
    }
}
