//! Background task monitoring.
//!
//! # Design
//! - The inspector response is flattened into row groups by the state module.
//! - Cancellation is confirmed through the shared modal, then the board reloads.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
