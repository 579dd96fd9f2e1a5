//! egui host for the drop zone widget.

pub mod controller;
pub mod ui;
