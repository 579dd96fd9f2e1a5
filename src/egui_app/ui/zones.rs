use eframe::egui::{self, StrokeKind};

use super::{CanvasLayout, EguiApp, style};
use crate::drop_zone::{ZoneGeometry, ZoneId};

impl EguiApp {
    pub(super) fn render_zones(&mut self, ui: &egui::Ui, layout: &CanvasLayout) {
        let now = ui.input(|i| i.time);
        let radius = self.controller.config().canvas.zone_corner_radius;
        let painter = ui.painter();
        for zone in ZoneId::ALL {
            let rect = layout.zone(zone);
            painter.rect_filled(rect, radius, self.controller.zone_fill(zone, now));
            painter.rect_stroke(rect, radius, style::zone_outline(), StrokeKind::Inside);
        }
        // Zones are measured on the first laid-out frame only.
        if self.controller.needs_layout() {
            for zone in ZoneId::ALL {
                self.controller
                    .observe_zone(zone, ZoneGeometry::from_rect(layout.zone(zone)));
            }
            self.controller.finish_layout_frame();
        }
    }
}
