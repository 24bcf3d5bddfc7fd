use crate::clipboard::CopyOutcome;
use crate::nav::{EntryId, SectionId};
use crate::theme::ThemeMode;

/// Write side of the rendering surface the engine drives.
///
/// Incoming events (text input, intersection changes, clicks) are delivered
/// by the host as messages; this trait only covers what the engine pushes
/// back into the tree. Implementations must tolerate repeated calls with
/// the same value.
pub trait PresentationPort {
    fn set_entry_visible(&mut self, entry: EntryId, visible: bool);

    fn set_section_visible(&mut self, section: SectionId, visible: bool);

    fn set_active(&mut self, entry: EntryId, active: bool);

    /// Whether an element with this identifier exists in the tree.
    fn contains_target(&self, target_id: &str) -> bool;

    /// Smooth-scroll the element into view. Only called for existing targets.
    fn scroll_into_view(&mut self, target_id: &str);

    fn focus_search(&mut self);

    fn blur_search(&mut self);

    /// Swap the active stylesheet and the toggle glyph.
    fn apply_theme(&mut self, mode: ThemeMode);

    /// Show the copy result next to a code block; `None` restores the idle
    /// button.
    fn show_copy_indicator(&mut self, block_id: &str, outcome: Option<CopyOutcome>);
}
