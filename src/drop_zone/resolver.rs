//! Release-point hit testing.

use super::geometry::Point;
use super::item::DraggableItem;
use super::probe::{MeasuredZones, ZoneId};
use super::state::{ZoneState, ZoneStates};

/// Result of resolving one release event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropOutcome {
    pub states: ZoneStates,
    /// Zones whose rectangle contained the release point.
    pub landed: Vec<ZoneId>,
}

impl DropOutcome {
    pub fn missed(&self) -> bool {
        self.landed.is_empty()
    }
}

/// Compute zone occupancy after `item` is released at `pointer`.
pub fn resolve_drop(
    pointer: Point,
    item: &DraggableItem,
    zones: &MeasuredZones,
    current: &ZoneStates,
) -> ZoneStates {
    resolve_drop_outcome(pointer, item, zones, current).states
}

/// Like [`resolve_drop`], also reporting which zones were hit.
///
/// Zones are tested independently; a point inside both rectangles occupies
/// both. Zones that were not hit keep their previous state.
pub fn resolve_drop_outcome(
    pointer: Point,
    item: &DraggableItem,
    zones: &MeasuredZones,
    current: &ZoneStates,
) -> DropOutcome {
    let mut states = current.clone();
    let mut landed = Vec::new();
    for zone in ZoneId::ALL {
        if zones.get(zone).contains(pointer) {
            *states.get_mut(zone) = ZoneState::Occupied(item.clone());
            landed.push(zone);
        }
    }
    DropOutcome { states, landed }
}
