//! Page content and its in-memory presentation.
//!
//! - [`document`] - the static page document (navigation, headings, code blocks)
//! - [`tree`] - the presentation tree the engine writes visibility and active state into
//! - [`validation`] - checks run while loading a page document

pub mod document;
pub mod tree;
pub mod validation;

pub use document::PageDocument;
pub use tree::PresentationTree;
