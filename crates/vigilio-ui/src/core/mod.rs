//! Core, DOM-free primitives and helpers for the Web UI.
pub mod banner;
pub mod config;
pub mod dialog;
pub mod errors;
pub mod format;
pub mod poll;
pub mod prefs;
pub mod store;
