// Library crate: exposes the drawing core for integration tests and the JSON command interface.
// GUI-specific modules (app, ui, canvas painting) remain in the binary crate.

pub mod command;
pub mod fixtures;
pub mod geometry;
pub mod harness;
pub mod state;
pub mod surface;
