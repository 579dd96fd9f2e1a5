use crate::color::HexColor;

use super::types::ItemDescriptor;

pub(super) const MAX_DRAG_ELASTIC: f32 = 1.0;
pub(super) const MAX_ANIMATION_SECS: f32 = 5.0;

pub(super) fn default_items() -> Vec<ItemDescriptor> {
    vec![
        ItemDescriptor::new("Red", HexColor::rgb(0xff, 0x3b, 0x30)),
        ItemDescriptor::new("Blue", HexColor::rgb(0x00, 0x7a, 0xff)),
        ItemDescriptor::new("Green", HexColor::rgb(0x34, 0xc7, 0x59)),
    ]
}

pub(super) fn default_canvas_width() -> f32 {
    1440.0
}

pub(super) fn default_canvas_height() -> f32 {
    900.0
}

pub(super) fn default_sidebar_width() -> f32 {
    240.0
}

pub(super) fn default_zone_width() -> f32 {
    288.0
}

pub(super) fn default_zone_height() -> f32 {
    172.0
}

pub(super) fn default_zone_corner_radius() -> f32 {
    5.0
}

pub(super) fn default_item_size() -> f32 {
    100.0
}

pub(super) fn default_white() -> HexColor {
    HexColor::NEUTRAL
}

pub(super) fn default_container_color() -> HexColor {
    HexColor::rgb(0xaa, 0xaa, 0xaa)
}

pub(super) fn default_fill_transition_secs() -> f32 {
    0.3
}

pub(super) fn default_return_secs() -> f32 {
    0.35
}

pub(super) fn default_drag_elastic() -> f32 {
    1.0
}

/// Replace non-finite or negative lengths with `fallback`.
pub(super) fn sanitize_length(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        fallback
    }
}

pub(super) fn clamp_secs(value: f32, fallback: f32) -> f32 {
    sanitize_length(value, fallback).min(MAX_ANIMATION_SECS)
}

pub(super) fn clamp_drag_elastic(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, MAX_DRAG_ELASTIC)
    } else {
        default_drag_elastic()
    }
}
