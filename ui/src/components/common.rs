use engine::nav::EntryId;
use engine::tracker::IntersectionChange;
use std::time::Instant;

use crate::error::AppError;

#[derive(Debug, PartialEq)]
pub enum Msg {
    AppClose,
    SearchActivity(SearchActivityMsg),
    NavActivity(NavActivityMsg),
    ThemeActivity(ThemeActivityMsg),
    CopyActivity(CopyActivityMsg),
    PopupActivity(PopupActivityMsg),
    Error(AppError),
}

#[derive(Debug, PartialEq)]
pub enum SearchActivityMsg {
    /// Every keystroke in the search box carries the full input text.
    TextChanged(String),
    /// Escape or the clear button.
    Cleared,
    Focused,
}

#[derive(Debug, PartialEq)]
pub enum NavActivityMsg {
    IntersectionChanged(Vec<IntersectionChange>),
    Scrolled { offset: f64, viewport_height: f64 },
    EntryClicked(EntryId),
    /// Deep link or `goto` command addressing a heading by identifier.
    TargetRequested(String),
}

#[derive(Debug, PartialEq)]
pub enum ThemeActivityMsg {
    Toggled,
}

#[derive(Debug, PartialEq)]
pub enum CopyActivityMsg {
    CopyRequested(String),
    Tick(Instant),
}

#[derive(Debug, PartialEq)]
pub enum PopupActivityMsg {
    ShowWarning(String),
    ShowError(AppError),
    Close,
}
