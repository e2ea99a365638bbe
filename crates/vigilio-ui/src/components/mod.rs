//! Shared presentational components.

pub(crate) mod icons;
pub(crate) mod loading;
pub(crate) mod modal;
pub(crate) mod panel;
pub(crate) mod shell;
pub(crate) mod tabs;
