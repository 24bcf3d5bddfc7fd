use crate::components::common::{
    CopyActivityMsg, Msg, NavActivityMsg, SearchActivityMsg, ThemeActivityMsg,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Viewport height assumed when none is given, in pixels
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 900.0;

#[derive(Debug, Parser)]
#[command(
    name = "docnav",
    version,
    about = "Search, section tracking and theme switching for the FastAPI QueryBuilder docs"
)]
pub struct Cli {
    /// Configuration file (defaults to ./docnav.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Page document to load (overrides `page` from the configuration)
    #[arg(short, long)]
    pub page: Option<PathBuf>,

    /// Print machine-readable JSON instead of the outline
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the navigation sidebar
    Outline,
    /// Filter the navigation by a search query
    Filter { query: String },
    /// Show the current theme, or toggle it
    Theme {
        #[arg(long)]
        toggle: bool,
    },
    /// Scroll to a document offset and report the active section
    Scroll {
        offset: f64,
        #[arg(long, default_value_t = DEFAULT_VIEWPORT_HEIGHT)]
        viewport: f64,
    },
    /// Follow the navigation link pointing at a heading
    Goto { target: String },
    /// Copy a code block to the clipboard
    Copy { block: String },
    /// Read commands from standard input, one per line
    Interactive,
}

impl Command {
    /// Message that carries out this command, if it changes anything
    pub fn to_msg(&self) -> Option<Msg> {
        match self {
            Command::Outline | Command::Interactive => None,
            Command::Filter { query } => Some(Msg::SearchActivity(
                SearchActivityMsg::TextChanged(query.clone()),
            )),
            Command::Theme { toggle } => toggle.then_some(Msg::ThemeActivity(ThemeActivityMsg::Toggled)),
            Command::Scroll { offset, viewport } => Some(Msg::NavActivity(NavActivityMsg::Scrolled {
                offset: *offset,
                viewport_height: *viewport,
            })),
            Command::Goto { target } => Some(Msg::NavActivity(NavActivityMsg::TargetRequested(
                target.clone(),
            ))),
            Command::Copy { block } => Some(Msg::CopyActivity(CopyActivityMsg::CopyRequested(
                block.clone(),
            ))),
        }
    }
}

/// Parse one line of interactive input.
///
/// `/text` searches, `/` alone focuses the search box, `esc` clears it.
/// Unknown input yields `None`.
pub fn parse_interactive_line(line: &str) -> Option<Msg> {
    let line = line.trim_end_matches(['\r', '\n']);
    if let Some(query) = line.strip_prefix('/') {
        if query.is_empty() {
            return Some(Msg::SearchActivity(SearchActivityMsg::Focused));
        }
        return Some(Msg::SearchActivity(SearchActivityMsg::TextChanged(
            query.to_string(),
        )));
    }

    let mut parts = line.trim().splitn(2, char::is_whitespace);
    let command = parts.next()?;
    let argument = parts.next().map(str::trim).unwrap_or_default();

    match command {
        "quit" | "q" => Some(Msg::AppClose),
        "esc" | "clear" => Some(Msg::SearchActivity(SearchActivityMsg::Cleared)),
        "theme" => Some(Msg::ThemeActivity(ThemeActivityMsg::Toggled)),
        "goto" if !argument.is_empty() => Some(Msg::NavActivity(
            NavActivityMsg::TargetRequested(argument.to_string()),
        )),
        "copy" if !argument.is_empty() => Some(Msg::CopyActivity(CopyActivityMsg::CopyRequested(
            argument.to_string(),
        ))),
        "scroll" => {
            let mut numbers = argument.split_whitespace().map(str::parse::<f64>);
            let offset = numbers.next()?.ok()?;
            let viewport_height = match numbers.next() {
                Some(value) => value.ok()?,
                None => DEFAULT_VIEWPORT_HEIGHT,
            };
            Some(Msg::NavActivity(NavActivityMsg::Scrolled {
                offset,
                viewport_height,
            }))
        }
        _ => None,
    }
}
