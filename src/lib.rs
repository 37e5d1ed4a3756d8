//! Danish Statistics Explorer: a bilingual terminal front-end.
//!
//! The interesting part is small: two preference stores (language and theme)
//! with synchronous change notification, and a table of English/Danish label
//! pairs that every component resolves through the language store.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod definitions;
pub mod event;
pub mod i18n;
pub mod logging;
pub mod preferences;
pub mod tui;
pub mod ui;

pub use definitions::{LanguageCode, ThemeMode};
pub use i18n::LabelPair;
pub use preferences::{LanguagePreference, Preferences, ThemePreference};
