//! Movie detail and per-movie management.
//!
//! # Design
//! - Detail and management each fetch their own data; the file manager sits below them.
//! - Destructive actions are gated by the confirmation modal.

#[cfg(target_arch = "wasm32")]
pub mod view;
