use serde::{Deserialize, Serialize};

use crate::color::HexColor;

use super::defaults::{
    clamp_drag_elastic, clamp_secs, default_canvas_height, default_canvas_width,
    default_container_color, default_drag_elastic, default_fill_transition_secs,
    default_item_size, default_items, default_return_secs, default_sidebar_width, default_white,
    default_zone_corner_radius, default_zone_height, default_zone_width, sanitize_length,
};

/// One entry of the draggable item list.
///
/// Config keys: `label`, `background_color`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDescriptor {
    /// Text painted on the item.
    #[serde(default)]
    pub label: String,
    /// Fill color; also the color a zone adopts when the item lands in it.
    pub background_color: HexColor,
}

impl ItemDescriptor {
    pub fn new(label: impl Into<String>, background_color: HexColor) -> Self {
        Self {
            label: label.into(),
            background_color,
        }
    }
}

/// Fixed layout of the widget canvas, in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasSettings {
    #[serde(default = "default_canvas_width")]
    pub width: f32,
    #[serde(default = "default_canvas_height")]
    pub height: f32,
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: f32,
    #[serde(default = "default_zone_width")]
    pub zone_width: f32,
    #[serde(default = "default_zone_height")]
    pub zone_height: f32,
    #[serde(default = "default_zone_corner_radius")]
    pub zone_corner_radius: f32,
    /// Edge length of the square sidebar items.
    #[serde(default = "default_item_size")]
    pub item_size: f32,
    #[serde(default = "default_white")]
    pub sidebar_color: HexColor,
    #[serde(default = "default_container_color")]
    pub container_color: HexColor,
    /// Fill of a zone that has not received a drop.
    #[serde(default = "default_white")]
    pub neutral_zone_color: HexColor,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            sidebar_width: default_sidebar_width(),
            zone_width: default_zone_width(),
            zone_height: default_zone_height(),
            zone_corner_radius: default_zone_corner_radius(),
            item_size: default_item_size(),
            sidebar_color: default_white(),
            container_color: default_container_color(),
            neutral_zone_color: default_white(),
        }
    }
}

/// Animation tuning for drags and zone fills.
///
/// Config keys: `fill_transition_secs`, `return_secs`, `drag_elastic`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionSettings {
    /// Duration of a zone's color change after a drop.
    #[serde(default = "default_fill_transition_secs")]
    pub fill_transition_secs: f32,
    /// Duration of an item's glide back to the sidebar after release.
    #[serde(default = "default_return_secs")]
    pub return_secs: f32,
    /// Fraction of the pointer movement the dragged item follows (0.0-1.0).
    #[serde(default = "default_drag_elastic")]
    pub drag_elastic: f32,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            fill_transition_secs: default_fill_transition_secs(),
            return_secs: default_return_secs(),
            drag_elastic: default_drag_elastic(),
        }
    }
}

/// Complete widget configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(default = "default_items")]
    pub draggable_children: Vec<ItemDescriptor>,
    #[serde(default)]
    pub canvas: CanvasSettings,
    #[serde(default)]
    pub motion: MotionSettings,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            draggable_children: default_items(),
            canvas: CanvasSettings::default(),
            motion: MotionSettings::default(),
        }
    }
}

impl WidgetConfig {
    /// Clamp values that would break layout or animation.
    pub fn normalized(mut self) -> Self {
        let canvas = &mut self.canvas;
        canvas.width = sanitize_length(canvas.width, default_canvas_width());
        canvas.height = sanitize_length(canvas.height, default_canvas_height());
        canvas.sidebar_width =
            sanitize_length(canvas.sidebar_width, default_sidebar_width()).min(canvas.width);
        canvas.zone_width = sanitize_length(canvas.zone_width, default_zone_width());
        canvas.zone_height = sanitize_length(canvas.zone_height, default_zone_height());
        canvas.zone_corner_radius =
            sanitize_length(canvas.zone_corner_radius, default_zone_corner_radius());
        canvas.item_size = sanitize_length(canvas.item_size, default_item_size());

        let motion = &mut self.motion;
        motion.fill_transition_secs =
            clamp_secs(motion.fill_transition_secs, default_fill_transition_secs());
        motion.return_secs = clamp_secs(motion.return_secs, default_return_secs());
        motion.drag_elastic = clamp_drag_elastic(motion.drag_elastic);
        self
    }
}
