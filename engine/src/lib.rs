//! # docnav engine
//!
//! Client-side state sync for the FastAPI QueryBuilder documentation site:
//!
//! - [`filter`] - substring filter over the navigation list
//! - [`tracker`] - marks the navigation entry of the section currently in view
//! - [`theme`] - persisted light/dark mode
//! - [`clipboard`] - copy buttons on code blocks with transient feedback
//!
//! The rendering surface is reached only through [`port::PresentationPort`],
//! and persistence only through [`theme::ThemeStore`], so all of the logic
//! runs without a browser.

pub mod clipboard;
pub mod error;
pub mod filter;
pub mod nav;
pub mod port;
pub mod theme;
pub mod tracker;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{EngineError, EngineResult};
pub use filter::{FilterIndex, VisibilityPlan};
pub use nav::{EntryId, Heading, NavEntry, NavSection, NavTree, SectionId};
pub use port::PresentationPort;
pub use theme::{ThemeController, ThemeMode, ThemeStore};
pub use tracker::{IntersectionChange, SectionTracker, TriggerBand};
