use crate::color::HexColor;

use super::item::DraggableItem;
use super::probe::ZoneId;

/// Occupancy of a single zone. The occupant only exists in the occupied state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ZoneState {
    #[default]
    Empty,
    Occupied(DraggableItem),
}

impl ZoneState {
    pub fn occupant(&self) -> Option<&DraggableItem> {
        match self {
            ZoneState::Empty => None,
            ZoneState::Occupied(item) => Some(item),
        }
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, ZoneState::Occupied(_))
    }

    /// Color the zone should display.
    pub fn fill_color(&self, neutral: HexColor) -> HexColor {
        self.occupant().map_or(neutral, |item| item.color)
    }
}

/// Occupancy of both zones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ZoneStates {
    pub zone1: ZoneState,
    pub zone2: ZoneState,
}

impl ZoneStates {
    pub fn get(&self, zone: ZoneId) -> &ZoneState {
        match zone {
            ZoneId::Zone1 => &self.zone1,
            ZoneId::Zone2 => &self.zone2,
        }
    }

    pub fn get_mut(&mut self, zone: ZoneId) -> &mut ZoneState {
        match zone {
            ZoneId::Zone1 => &mut self.zone1,
            ZoneId::Zone2 => &mut self.zone2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drop_zone::ItemId;

    #[test]
    fn empty_zone_shows_neutral() {
        assert_eq!(
            ZoneState::Empty.fill_color(HexColor::NEUTRAL),
            HexColor::NEUTRAL
        );
        assert!(ZoneState::Empty.occupant().is_none());
    }

    #[test]
    fn occupied_zone_shows_item_color() {
        let red = HexColor::rgb(255, 0, 0);
        let state = ZoneState::Occupied(DraggableItem::new(ItemId(0), "Red", red));
        assert!(state.is_occupied());
        assert_eq!(state.fill_color(HexColor::NEUTRAL), red);
    }
}
