//! First-run setup flow.
//!
//! # Design
//! - Reuses the settings routing; each step re-fetches settings when it completes.
//! - Completion redirects to the `next` query parameter or the home page.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
