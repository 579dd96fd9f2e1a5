//! Per-item drag offset: follows the pointer while held, glides home after release.

use egui::{Pos2, Vec2};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragVisual {
    #[default]
    Resting,
    Dragging {
        press_origin: Pos2,
        /// Last pointer position seen during the drag.
        pointer: Pos2,
    },
    Returning {
        from: Vec2,
        started_at: f64,
    },
}

impl DragVisual {
    /// Offset from the item's sidebar slot at time `now`.
    pub fn offset(&self, now: f64, elastic: f32, return_secs: f32) -> Vec2 {
        match *self {
            DragVisual::Resting => Vec2::ZERO,
            DragVisual::Dragging {
                press_origin,
                pointer,
            } => (pointer - press_origin) * elastic,
            DragVisual::Returning { from, started_at } => {
                let t = return_progress(now, started_at, return_secs);
                from * (1.0 - ease_out_cubic(t))
            }
        }
    }

    /// Items that are moving are painted above the zones.
    pub fn is_lifted(&self) -> bool {
        !matches!(self, DragVisual::Resting)
    }

    /// Switch to `Resting` once a return glide has played out.
    pub fn settle(&mut self, now: f64, return_secs: f32) {
        if let DragVisual::Returning { started_at, .. } = *self
            && return_progress(now, started_at, return_secs) >= 1.0
        {
            *self = DragVisual::Resting;
        }
    }

    /// Track the pointer during a drag.
    ///
    /// A grab that interrupts a return glide keeps the item where it is on
    /// screen; a fresh grab anchors at `press_origin`.
    pub fn drag_to(
        &mut self,
        pointer: Pos2,
        press_origin: Option<Pos2>,
        now: f64,
        elastic: f32,
        return_secs: f32,
    ) {
        let press_origin = match *self {
            DragVisual::Dragging { press_origin, .. } => press_origin,
            DragVisual::Returning { .. } if elastic > 0.0 => {
                pointer - self.offset(now, elastic, return_secs) / elastic
            }
            _ => press_origin.unwrap_or(pointer),
        };
        *self = DragVisual::Dragging {
            press_origin,
            pointer,
        };
    }

    /// Begin the glide home from wherever the item currently is.
    pub fn release(&mut self, now: f64, elastic: f32, return_secs: f32) {
        let from = self.offset(now, elastic, return_secs);
        *self = DragVisual::Returning {
            from,
            started_at: now,
        };
    }

    pub fn last_pointer(&self) -> Option<Pos2> {
        match self {
            DragVisual::Dragging { pointer, .. } => Some(*pointer),
            _ => None,
        }
    }
}

fn return_progress(now: f64, started_at: f64, return_secs: f32) -> f32 {
    if return_secs <= 0.0 {
        return 1.0;
    }
    (((now - started_at) / f64::from(return_secs)) as f32).clamp(0.0, 1.0)
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn dragging_follows_pointer_scaled_by_elasticity() {
        let visual = DragVisual::Dragging {
            press_origin: pos2(100.0, 100.0),
            pointer: pos2(300.0, 150.0),
        };
        assert_eq!(visual.offset(0.0, 1.0, 0.3), vec2(200.0, 50.0));
        assert_eq!(visual.offset(0.0, 0.5, 0.3), vec2(100.0, 25.0));
        assert!(visual.is_lifted());
    }

    #[test]
    fn release_glides_back_to_slot() {
        let mut visual = DragVisual::Dragging {
            press_origin: pos2(0.0, 0.0),
            pointer: pos2(80.0, 0.0),
        };
        visual.release(2.0, 1.0, 0.5);
        assert_eq!(visual.offset(2.0, 1.0, 0.5), vec2(80.0, 0.0));
        let midway = visual.offset(2.25, 1.0, 0.5);
        assert!(midway.x > 0.0 && midway.x < 80.0);
        assert_eq!(visual.offset(2.5, 1.0, 0.5), Vec2::ZERO);

        visual.settle(2.4, 0.5);
        assert!(visual.is_lifted());
        visual.settle(2.5, 0.5);
        assert_eq!(visual, DragVisual::Resting);
    }

    #[test]
    fn grab_during_return_keeps_item_in_place() {
        let mut visual = DragVisual::Returning {
            from: vec2(80.0, 40.0),
            started_at: 0.0,
        };
        let shown = visual.offset(0.25, 0.5, 0.5);
        visual.drag_to(pos2(500.0, 500.0), Some(pos2(0.0, 0.0)), 0.25, 0.5, 0.5);
        let after = visual.offset(0.25, 0.5, 0.5);
        assert!((after - shown).length() < 1e-3);

        visual.drag_to(pos2(510.0, 500.0), None, 0.3, 0.5, 0.5);
        let moved = visual.offset(0.3, 0.5, 0.5);
        assert!((moved - (shown + vec2(5.0, 0.0))).length() < 1e-3);
    }

    #[test]
    fn fresh_grab_anchors_at_press_origin() {
        let mut visual = DragVisual::Resting;
        visual.drag_to(pos2(130.0, 210.0), Some(pos2(120.0, 200.0)), 0.0, 1.0, 0.3);
        assert_eq!(visual.offset(0.0, 1.0, 0.3), vec2(10.0, 10.0));
        assert_eq!(visual.last_pointer(), Some(pos2(130.0, 210.0)));
    }

    #[test]
    fn zero_return_time_snaps_home() {
        let mut visual = DragVisual::Returning {
            from: vec2(10.0, 10.0),
            started_at: 1.0,
        };
        assert_eq!(visual.offset(1.0, 1.0, 0.0), Vec2::ZERO);
        visual.settle(1.0, 0.0);
        assert_eq!(visual, DragVisual::Resting);
    }
}
