//! Add-movie page: manual entry and source search.
//!
//! # Design
//! - Tab and source choices persist in local preferences.
//! - Search requests go straight to the third-party source, never through the panel API.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
