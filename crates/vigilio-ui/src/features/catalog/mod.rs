//! Catalog browsing: home, categories, and search results.
//!
//! # Design
//! - Screens fetch on mount and derive sections on render.
//! - Cards are shared by every catalog screen and the history list.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
