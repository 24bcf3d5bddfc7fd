//! # Application Module
//!
//! The application follows a model-view-update architecture:
//! - **Model** - page content, engine components and the presentation tree
//! - **View** - plain-text rendering of the sidebar
//! - **Updates** - message handling per activity (search, navigation, theme, copy, popups)
//!
//! Host events arrive as [`Msg`](crate::components::common::Msg) values; an
//! update may return a follow-up message, which is processed before the next
//! event.

pub mod model;
pub mod update;

pub use model::{Model, ModelSettings, Notice};
