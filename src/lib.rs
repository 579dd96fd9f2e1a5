//! Two-zone drag-and-drop widget: sidebar items dropped onto a zone tint it.

/// Application directory resolution.
pub mod app_dirs;
/// Hex color parsing for item and zone fills.
pub mod color;
/// TOML widget configuration.
pub mod config;
/// Zone measurement and drop resolution.
pub mod drop_zone;
/// egui host: controller and renderer.
pub mod egui_app;
/// Tracing subscriber setup.
pub mod logging;
