//! # Docnav
//!
//! Client-side behaviour for the FastAPI QueryBuilder documentation site,
//! driven from the terminal. The navigation components live in the
//! `engine` crate; this crate wires them to configuration, persistence,
//! the system clipboard and a message loop.
//!
//! ## Modules
//!
//! - [`app`] - Application model and message handling
//! - [`cli`] - Command line interface
//! - [`clipboard`] - System clipboard access
//! - [`components`] - Messages and sidebar rendering
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Error types and centralized error reporting
//! - [`logger`] - Logging setup
//! - [`page`] - Page documents and the in-memory presentation tree
//! - [`theme`] - Theme configuration and file-backed persistence
//! - [`validation`] - Validation trait shared by page and config checks

pub mod app;
pub mod cli;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod error;
pub mod logger;
pub mod page;
pub mod theme;
pub mod validation;

pub use error::AppError;

pub use components::common::Msg;

pub use validation::Validator;
