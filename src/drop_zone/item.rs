use crate::color::HexColor;
use crate::config::ItemDescriptor;

/// Position of an item in the configured list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

/// A configured sidebar item that can be dragged onto a zone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraggableItem {
    pub id: ItemId,
    pub label: String,
    pub color: HexColor,
}

impl DraggableItem {
    pub fn new(id: ItemId, label: impl Into<String>, color: HexColor) -> Self {
        Self {
            id,
            label: label.into(),
            color,
        }
    }

    /// Build the item at `index` from its configuration entry.
    pub fn from_config(index: usize, descriptor: &ItemDescriptor) -> Self {
        Self::new(
            ItemId(index),
            descriptor.label.clone(),
            descriptor.background_color,
        )
    }
}
