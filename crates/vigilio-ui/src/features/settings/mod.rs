//! Settings feature slice.
//!
//! # Design
//! - One fetch of the global settings decides which settings screen renders.
//! - Validation and selection rules live in `state`; views only wire them to inputs.
//! - Every save re-fetches so the page reflects server truth.

pub mod languages;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
