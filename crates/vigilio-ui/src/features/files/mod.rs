//! Movie file manager.
//!
//! # Design
//! - The listing is flattened into an arena once per fetch; rows come from an explicit walk.
//! - Selection is a set of path keys owned by the screen, not by the rows.
//! - The first top-level node is protected from selection.

pub mod tree;
#[cfg(target_arch = "wasm32")]
pub mod view;
