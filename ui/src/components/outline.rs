use crate::page::document::CodeBlock;
use crate::page::tree::PresentationTree;
use engine::clipboard::CopyOutcome;
use std::fmt::Write;

const ACTIVE_MARKER: &str = "●";
const SECTION_MARKER: &str = "▾";
const EMPTY_STATE: &str = "No matching sections";

/// Plain-text rendering of the sidebar as the reader would see it: hidden
/// sections and entries are left out, the active entry is marked.
pub fn render_outline(tree: &PresentationTree) -> String {
    let mut out = String::new();
    let theme = tree.theme().unwrap_or_default();
    let _ = writeln!(out, "{}  [{} {}]", tree.title(), theme, theme.toggle_icon());

    let mut any_visible = false;
    for section in tree.sections().iter().filter(|section| section.visible) {
        any_visible = true;
        if !section.title.is_empty() {
            let _ = writeln!(out, "{SECTION_MARKER} {}", section.title);
        }
        for entry in section
            .entries
            .iter()
            .filter_map(|id| tree.entries().get(id.0))
            .filter(|entry| entry.visible)
        {
            let marker = if entry.active { ACTIVE_MARKER } else { " " };
            let _ = writeln!(out, "  {marker} {}", entry.label);
        }
    }

    if !any_visible {
        let _ = writeln!(out, "  {EMPTY_STATE}");
    }
    out
}

/// Label of a code block's copy button
pub fn copy_button_label(outcome: Option<CopyOutcome>) -> &'static str {
    outcome.map_or("Copy", CopyOutcome::label)
}

/// One line per code block with its copy button.
pub fn render_code_blocks(blocks: &[CodeBlock], tree: &PresentationTree) -> String {
    let mut out = String::new();
    for block in blocks {
        let first_line = block.text.lines().next().unwrap_or_default();
        let _ = writeln!(
            out,
            "[{}] {}: {first_line}",
            copy_button_label(tree.copy_indicator(&block.id)),
            block.id
        );
    }
    out
}
