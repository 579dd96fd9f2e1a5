//! Fixed canvas layout: sidebar slots on the left, two zones in the container.

use egui::{Pos2, Rect, Vec2, pos2, vec2};

use crate::config::CanvasSettings;
use crate::drop_zone::ZoneId;

/// Screen rectangles for every part of the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasLayout {
    pub canvas: Rect,
    pub sidebar: Rect,
    pub container: Rect,
    pub item_slots: Vec<Rect>,
    pub zones: [Rect; 2],
}

impl CanvasLayout {
    pub fn compute(origin: Pos2, settings: &CanvasSettings, item_count: usize) -> Self {
        let canvas = Rect::from_min_size(origin, vec2(settings.width, settings.height));
        let sidebar = Rect::from_min_size(origin, vec2(settings.sidebar_width, settings.height));
        let container = Rect::from_min_max(pos2(sidebar.max.x, origin.y), canvas.max);

        let item_size = Vec2::splat(settings.item_size);
        let item_tops = space_evenly(sidebar.min.y, sidebar.height(), settings.item_size, item_count);
        let item_slots = item_tops
            .into_iter()
            .map(|top| {
                Rect::from_min_size(pos2(sidebar.center().x - item_size.x / 2.0, top), item_size)
            })
            .collect();

        let zone_size = vec2(settings.zone_width, settings.zone_height);
        let zone_top = container.center().y - zone_size.y / 2.0;
        let zone_lefts = space_evenly(container.min.x, container.width(), zone_size.x, 2);
        let zones = [
            Rect::from_min_size(pos2(zone_lefts[0], zone_top), zone_size),
            Rect::from_min_size(pos2(zone_lefts[1], zone_top), zone_size),
        ];

        Self {
            canvas,
            sidebar,
            container,
            item_slots,
            zones,
        }
    }

    pub fn zone(&self, zone: ZoneId) -> Rect {
        self.zones[zone.index()]
    }
}

/// Leading edges of `count` boxes of length `size` with equal gaps around each.
///
/// Gaps collapse to zero when the boxes do not fit.
fn space_evenly(start: f32, extent: f32, size: f32, count: usize) -> Vec<f32> {
    if count == 0 {
        return Vec::new();
    }
    let free = (extent - size * count as f32).max(0.0);
    let gap = free / (count as f32 + 1.0);
    (0..count)
        .map(|index| start + gap * (index as f32 + 1.0) + size * index as f32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zones_are_spaced_evenly_and_centered() {
        let layout = CanvasLayout::compute(Pos2::ZERO, &CanvasSettings::default(), 3);
        assert_eq!(layout.container.min.x, 240.0);
        assert_eq!(layout.zones[0], Rect::from_min_size(pos2(448.0, 364.0), vec2(288.0, 172.0)));
        assert_eq!(layout.zones[1], Rect::from_min_size(pos2(944.0, 364.0), vec2(288.0, 172.0)));
    }

    #[test]
    fn items_are_centered_in_sidebar_column() {
        let layout = CanvasLayout::compute(pos2(10.0, 20.0), &CanvasSettings::default(), 3);
        assert_eq!(layout.item_slots.len(), 3);
        for slot in &layout.item_slots {
            assert_eq!(slot.center().x, layout.sidebar.center().x);
        }
        // 900 - 300 leaves 600 split over four gaps.
        assert_eq!(layout.item_slots[0].min.y, 170.0);
        assert_eq!(layout.item_slots[2].max.y, 770.0);
    }

    #[test]
    fn overfull_sidebar_stacks_without_gaps() {
        assert_eq!(space_evenly(0.0, 100.0, 60.0, 2), vec![0.0, 60.0]);
        assert!(space_evenly(0.0, 100.0, 60.0, 0).is_empty());
    }
}
