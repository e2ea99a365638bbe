//! Search source management.

pub mod schema;
#[cfg(target_arch = "wasm32")]
pub mod view;
