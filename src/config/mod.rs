//! Widget configuration persisted as TOML in the app directory.
//!
//! The file stands in for a property panel: it lists the draggable items and
//! the canvas dimensions the widget lays itself out with.

mod defaults;
mod errors;
mod io;
mod types;

pub use errors::ConfigError;
pub use io::{CONFIG_FILE_NAME, config_path, load_from, load_or_default, save, save_to_path};
pub use types::{CanvasSettings, ItemDescriptor, MotionSettings, WidgetConfig};
