//! Feature slices: one module per screen family, pure state next to its view.
pub mod add_movie;
pub mod catalog;
pub mod files;
pub mod history;
pub mod movie;
pub mod settings;
pub mod setup;
pub mod sources;
pub mod tasks;
pub mod torrents;
