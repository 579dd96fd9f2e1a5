//! Owns widget state between frames and applies release events to it.

use egui::Color32;
use tracing::{debug, info, warn};

use crate::color::HexColor;
use crate::config::WidgetConfig;
use crate::drop_zone::{
    DraggableItem, ItemId, LayoutProbe, MeasuredZones, Point, ZoneGeometry, ZoneId, ZoneState,
    ZoneStates, resolve_drop_outcome,
};

/// Animated change of a zone's fill from one color to another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillTransition {
    /// Color on screen when the change began, possibly mid-way through an earlier one.
    pub from: Color32,
    pub to: HexColor,
    /// Seconds on the egui clock when the change began.
    pub started_at: f64,
    pub duration: f32,
}

impl FillTransition {
    /// A settled fill with nothing left to animate.
    pub fn settled(color: HexColor) -> Self {
        Self {
            from: color.to_color32(),
            to: color,
            started_at: 0.0,
            duration: 0.0,
        }
    }

    pub fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (((now - self.started_at) / f64::from(self.duration)) as f32).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn color_at(&self, now: f64) -> Color32 {
        let from = self.from;
        let to = self.to.to_color32();
        let t = self.progress(now);
        if t >= 1.0 {
            return to;
        }
        let lerp = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
        Color32::from_rgba_unmultiplied(
            lerp(from.r(), to.r()),
            lerp(from.g(), to.g()),
            lerp(from.b(), to.b()),
            lerp(from.a(), to.a()),
        )
    }
}

/// Widget state shared by the sidebar and the zones.
pub struct DropZoneController {
    config: WidgetConfig,
    items: Vec<DraggableItem>,
    probe: LayoutProbe,
    states: ZoneStates,
    fills: [FillTransition; 2],
}

impl DropZoneController {
    pub fn new(config: WidgetConfig) -> Self {
        let items = config
            .draggable_children
            .iter()
            .enumerate()
            .map(|(index, descriptor)| DraggableItem::from_config(index, descriptor))
            .collect();
        let neutral = FillTransition::settled(config.canvas.neutral_zone_color);
        Self {
            config,
            items,
            probe: LayoutProbe::new(),
            states: ZoneStates::default(),
            fills: [neutral, neutral],
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn items(&self) -> &[DraggableItem] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&DraggableItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn zone_state(&self, zone: ZoneId) -> &ZoneState {
        self.states.get(zone)
    }

    pub fn zone_states(&self) -> &ZoneStates {
        &self.states
    }

    pub fn measured_zones(&self) -> Option<&MeasuredZones> {
        self.probe.measured()
    }

    /// Whether zone rectangles still need to be reported.
    pub fn needs_layout(&self) -> bool {
        !self.probe.is_measured()
    }

    pub fn observe_zone(&mut self, zone: ZoneId, geometry: ZoneGeometry) {
        self.probe.observe(zone, geometry);
    }

    pub fn finish_layout_frame(&mut self) {
        self.probe.finish_frame();
    }

    /// Apply a release of `item_id` at `pointer`.
    ///
    /// `now` is the egui clock, used to start fill transitions for zones whose
    /// color changes.
    pub fn handle_drag_end(&mut self, pointer: Point, item_id: ItemId, now: f64) {
        let Some(zones) = self.probe.measured().copied() else {
            warn!("Release of {item_id:?} before zones were measured; ignoring");
            return;
        };
        let Some(item) = self.item(item_id).cloned() else {
            warn!("Release of unknown item {item_id:?}; ignoring");
            return;
        };
        let outcome = resolve_drop_outcome(pointer, &item, &zones, &self.states);
        if outcome.missed() {
            debug!(
                "'{}' released at ({}, {}) outside both zones",
                item.label, pointer.x, pointer.y
            );
            return;
        }
        for zone in &outcome.landed {
            info!("'{}' dropped into {zone} ({})", item.label, item.color);
        }
        let neutral = self.config.canvas.neutral_zone_color;
        let duration = self.config.motion.fill_transition_secs;
        for zone in ZoneId::ALL {
            let target = outcome.states.get(zone).fill_color(neutral);
            let current = &mut self.fills[zone.index()];
            if current.to != target {
                *current = FillTransition {
                    from: current.color_at(now),
                    to: target,
                    started_at: now,
                    duration,
                };
            }
        }
        self.states = outcome.states;
    }

    /// Color to paint `zone` with at time `now`.
    pub fn zone_fill(&self, zone: ZoneId, now: f64) -> Color32 {
        self.fills[zone.index()].color_at(now)
    }

    /// Whether any zone fill is still changing.
    pub fn is_animating(&self, now: f64) -> bool {
        self.fills.iter().any(|fill| !fill.is_finished(now))
    }
}
