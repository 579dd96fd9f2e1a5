//! Drop target resolution for the two-zone widget.
//!
//! Everything in here is independent of egui's event loop: the UI measures
//! the zones once, then feeds release points through [`resolve_drop`].

mod geometry;
mod item;
mod probe;
mod resolver;
mod state;

pub use geometry::{Point, ZoneGeometry};
pub use item::{DraggableItem, ItemId};
pub use probe::{LayoutProbe, MeasuredZones, ZoneId};
pub use resolver::{DropOutcome, resolve_drop, resolve_drop_outcome};
pub use state::{ZoneState, ZoneStates};
