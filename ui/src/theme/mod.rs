//! # Theme persistence for the host
//!
//! The light/dark switching itself lives in [`engine::theme`]. This module
//! supplies what the host adds around it:
//!
//! - **[`ThemeConfig`]** - the `[theme]` configuration section (default mode
//!   and an optional settings file override)
//! - **[`FileThemeStore`]** - a [`engine::theme::ThemeStore`] backed by a
//!   TOML settings file in the user's config directory
//!
//! ## Fallbacks
//!
//! - **No config directory** - the store reports itself unavailable and the
//!   controller keeps the mode in memory only
//! - **Corrupt settings file** - treated like missing storage; the next
//!   successful toggle rewrites it
//! - **Unknown stored value** - ignored in favour of the configured default

pub mod store;
pub mod types;

pub use store::FileThemeStore;
pub use types::ThemeConfig;
