use claims::*;
use docnav::app::{Model, ModelSettings, Notice};
use docnav::components::common::{
    CopyActivityMsg, Msg, NavActivityMsg, PopupActivityMsg, SearchActivityMsg, ThemeActivityMsg,
};
use docnav::page::PageDocument;
use docnav::theme::FileThemeStore;
use engine::clipboard::{ClipboardService, CopyOutcome};
use engine::error::{EngineError, EngineResult};
use engine::nav::{EntryId, SectionId};
use engine::theme::{MemoryThemeStore, THEME_STORAGE_KEY, ThemeMode, ThemeStore};
use engine::tracker::IntersectionChange;
use std::time::{Duration, Instant};
use tempfile::TempDir;

const PAGE: &str = r#"
title = "FastAPI QueryBuilder"

[[sections]]
title = "Getting Started"
[[sections.entries]]
label = "Installation"
target = "installation"
[[sections.entries]]
label = "Quick Start"
target = "quick-start"

[[sections]]
title = "Reference"
[[sections.entries]]
label = "Filtering"
target = "filtering"
[[sections.entries]]
label = "Sorting"
target = "sorting"
[[sections.entries]]
label = "Roadmap"
target = "roadmap"

[[headings]]
id = "installation"
text = "Installation"
top = 220.0
height = 40.0

[[headings]]
id = "quick-start"
text = "Quick Start"
top = 1220.0
height = 40.0

[[headings]]
id = "filtering"
text = "Filtering"
top = 2220.0
height = 40.0

[[headings]]
id = "sorting"
text = "Sorting"
top = 3220.0
height = 40.0

[[code_blocks]]
id = "install"
text = "pip install fastapi-querybuilder"
"#;

#[derive(Debug, Default)]
struct FakeClipboard {
    written: Vec<String>,
    broken: bool,
}

impl ClipboardService for FakeClipboard {
    fn write_text(&mut self, text: &str) -> EngineResult<()> {
        if self.broken {
            return Err(EngineError::ClipboardUnavailable("no display".to_string()));
        }
        self.written.push(text.to_string());
        Ok(())
    }
}

fn model_with<S: ThemeStore>(store: S) -> Model<S, FakeClipboard> {
    let page = assert_ok!(PageDocument::from_toml(PAGE));
    Model::new(
        page,
        ModelSettings::default(),
        store,
        FakeClipboard::default(),
    )
}

fn model() -> Model<MemoryThemeStore, FakeClipboard> {
    model_with(MemoryThemeStore::new())
}

fn search(text: &str) -> Msg {
    Msg::SearchActivity(SearchActivityMsg::TextChanged(text.to_string()))
}

fn scrolled(offset: f64) -> Msg {
    Msg::NavActivity(NavActivityMsg::Scrolled {
        offset,
        viewport_height: 1000.0,
    })
}

#[test]
fn test_initial_state_shows_everything_with_default_theme() {
    let model = model();

    assert_eq!(model.plan.visible_entries(), 5);
    assert!(model.tree.entries().iter().all(|entry| entry.visible));
    assert_some_eq!(model.tree.theme(), ThemeMode::Light);
    assert!(model.tree.active_entries().is_empty());
}

#[test]
fn test_search_hides_non_matching_entries_and_sections() {
    let mut model = model();

    model.process(search("QUI"));

    assert!(model.tree.is_entry_visible(EntryId(1)));
    assert!(!model.tree.is_entry_visible(EntryId(0)));
    assert!(model.tree.is_section_visible(SectionId(0)));
    assert!(!model.tree.is_section_visible(SectionId(1)));
    assert!(model.view().contains("Quick Start"));
    assert!(!model.view().contains("Filtering"));
}

#[test]
fn test_search_without_match_shows_empty_state() {
    let mut model = model();

    model.process(search("zzz"));

    assert!(model.plan.is_empty());
    assert!(model.view().contains("No matching sections"));
}

#[test]
fn test_clearing_search_restores_everything_and_blurs() {
    let mut model = model();
    model.process(Msg::SearchActivity(SearchActivityMsg::Focused));
    model.process(search("sort"));

    model.process(Msg::SearchActivity(SearchActivityMsg::Cleared));

    assert_eq!(model.plan.visible_entries(), 5);
    assert_eq!(model.plan.visible_sections(), 2);
    assert!(!model.tree.is_search_focused());
}

#[test]
fn test_scrolling_marks_the_section_in_the_band() {
    let mut model = model();

    model.process(scrolled(0.0));
    assert_eq!(model.tree.active_entries(), vec![EntryId(0)]);

    model.process(scrolled(2000.0));
    assert_eq!(model.tree.active_entries(), vec![EntryId(2)]);
}

#[test]
fn test_leaving_the_band_keeps_last_active_entry() {
    let mut model = model();
    model.process(scrolled(0.0));

    // Band now sits between headings.
    model.process(scrolled(500.0));

    assert_eq!(model.tree.active_entries(), vec![EntryId(0)]);
}

#[test]
fn test_intersection_batch_last_entering_wins() {
    let mut model = model();

    model.process(Msg::NavActivity(NavActivityMsg::IntersectionChanged(vec![
        IntersectionChange::entered("installation"),
        IntersectionChange::entered("sorting"),
        IntersectionChange::left("quick-start"),
    ])));

    assert_eq!(model.tree.active_entries(), vec![EntryId(3)]);
}

#[test]
fn test_goto_scrolls_and_activates_immediately() {
    let mut model = model();

    model.process(Msg::NavActivity(NavActivityMsg::TargetRequested(
        "filtering".to_string(),
    )));

    assert_some_eq!(model.tree.scrolled_to(), "filtering");
    assert_eq!(model.tree.active_entries(), vec![EntryId(2)]);
}

#[test]
fn test_click_on_entry_with_missing_heading_is_inert() {
    let mut model = model();
    model.process(scrolled(0.0));

    model.process(Msg::NavActivity(NavActivityMsg::EntryClicked(EntryId(4))));

    assert_none!(model.tree.scrolled_to());
    assert_eq!(model.tree.active_entries(), vec![EntryId(0)]);
}

#[test]
fn test_theme_toggle_twice_returns_to_start_and_persists() {
    let mut model = model();
    let toggle = || Msg::ThemeActivity(ThemeActivityMsg::Toggled);

    model.process(toggle());
    assert_eq!(model.theme.theme(), ThemeMode::Dark);
    assert_some_eq!(model.tree.theme(), ThemeMode::Dark);
    assert_some_eq!(
        assert_ok!(model.theme.store().get(THEME_STORAGE_KEY)),
        "dark".to_string()
    );

    model.process(toggle());
    assert_eq!(model.theme.theme(), ThemeMode::Light);
    assert_some_eq!(model.tree.theme(), ThemeMode::Light);
}

#[test]
fn test_persisted_theme_survives_restart() {
    let dir = TempDir::new().unwrap();
    let settings = dir.path().join("nested").join("settings.toml");

    let mut first = model_with(FileThemeStore::new(&settings));
    first.process(Msg::ThemeActivity(ThemeActivityMsg::Toggled));
    drop(first);

    let second = model_with(FileThemeStore::new(&settings));
    assert_eq!(second.theme.theme(), ThemeMode::Dark);
    assert_some_eq!(second.tree.theme(), ThemeMode::Dark);
}

#[test]
fn test_copy_shows_indicator_until_it_expires() {
    let mut model = model();

    model.process(Msg::CopyActivity(CopyActivityMsg::CopyRequested(
        "install".to_string(),
    )));

    assert_eq!(model.clipboard.written, vec!["pip install fastapi-querybuilder"]);
    assert_some_eq!(model.tree.copy_indicator("install"), CopyOutcome::Copied);
    assert!(model.view().contains("Copied!"));

    model.process(Msg::CopyActivity(CopyActivityMsg::Tick(Instant::now())));
    assert_some!(model.tree.copy_indicator("install"));

    model.process(Msg::CopyActivity(CopyActivityMsg::Tick(
        Instant::now() + Duration::from_secs(3),
    )));
    assert_none!(model.tree.copy_indicator("install"));
}

#[test]
fn test_copy_failure_shows_failed_indicator() {
    let mut model = model();
    model.clipboard.broken = true;

    model.process(Msg::CopyActivity(CopyActivityMsg::CopyRequested(
        "install".to_string(),
    )));

    assert_some_eq!(model.tree.copy_indicator("install"), CopyOutcome::Failed);
}

#[test]
fn test_copy_of_unknown_block_raises_warning_notice() {
    let mut model = model();

    model.process(Msg::CopyActivity(CopyActivityMsg::CopyRequested(
        "nope".to_string(),
    )));

    let notices = model.take_notices();
    assert_eq!(notices.len(), 1);
    assert!(matches!(&notices[0], Notice::Warning(message) if message.contains("'nope'")));
    assert!(model.take_notices().is_empty());
}

#[test]
fn test_error_message_becomes_error_notice() {
    let mut model = model();

    model.process(Msg::Error(docnav::AppError::Page("broken".to_string())));

    let notices = model.take_notices();
    assert!(matches!(&notices[..], [Notice::Error(docnav::AppError::Page(_))]));

    model.process(Msg::PopupActivity(PopupActivityMsg::Close));
    assert!(model.notices.is_empty());
}

#[test]
fn test_app_close_sets_quit() {
    let mut model = model();

    model.process(Msg::AppClose);

    assert!(model.quit);
}
