//! egui renderer for the drop zone canvas.

mod drag_visual;
mod layout;
mod sidebar;
pub mod style;
mod zones;

use eframe::egui::{self, Color32, Frame, Vec2};

use crate::config::WidgetConfig;
use crate::egui_app::controller::DropZoneController;

pub use drag_visual::DragVisual;
pub use layout::CanvasLayout;

/// Smallest window the canvas can be shown in.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(640.0, 400.0);

/// Renders the canvas and routes drag gestures into the controller.
pub struct EguiApp {
    controller: DropZoneController,
    drag_visuals: Vec<DragVisual>,
}

impl EguiApp {
    pub fn new(config: WidgetConfig) -> Self {
        let controller = DropZoneController::new(config);
        let drag_visuals = vec![DragVisual::Resting; controller.items().len()];
        Self {
            controller,
            drag_visuals,
        }
    }

    pub fn controller(&self) -> &DropZoneController {
        &self.controller
    }

    fn render_canvas(&mut self, ui: &mut egui::Ui) {
        let canvas = &self.controller.config().canvas;
        let layout = CanvasLayout::compute(
            ui.max_rect().min,
            canvas,
            self.controller.items().len(),
        );
        let painter = ui.painter();
        painter.rect_filled(layout.sidebar, 0.0, canvas.sidebar_color.to_color32());
        painter.rect_filled(layout.container, 0.0, canvas.container_color.to_color32());

        self.render_zones(ui, &layout);
        self.render_sidebar(ui, &layout);
    }
}

impl EguiApp {
    /// Lay out and paint one frame, applying any drag gestures it carries.
    pub fn show(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(Frame::NONE.fill(Color32::from_gray(40)))
            .show(ctx, |ui| self.render_canvas(ui));

        let now = ctx.input(|i| i.time);
        let gliding = self.drag_visuals.iter().any(DragVisual::is_lifted);
        if gliding || self.controller.is_animating(now) {
            ctx.request_repaint();
        }
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drop_zone::{ZoneGeometry, ZoneId};
    use egui::{Event, Modifiers, PointerButton, Pos2, RawInput, Rect, pos2};

    const RED: usize = 0;
    const BLUE: usize = 1;
    const GREEN: usize = 2;

    struct Harness {
        ctx: egui::Context,
        app: EguiApp,
        time: f64,
    }

    impl Harness {
        fn new() -> Self {
            let mut harness = Self {
                ctx: egui::Context::default(),
                app: EguiApp::new(WidgetConfig::default()),
                time: 0.0,
            };
            harness.frame(Vec::new());
            harness
        }

        fn frame(&mut self, events: Vec<Event>) {
            self.time += 1.0 / 60.0;
            let input = RawInput {
                screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(1440.0, 900.0))),
                time: Some(self.time),
                events,
                ..Default::default()
            };
            let _ = self.ctx.run(input, |ctx| self.app.show(ctx));
        }

        fn wait(&mut self, secs: f64) {
            self.time += secs;
            self.frame(Vec::new());
        }

        fn button(pos: Pos2, pressed: bool) -> Event {
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed,
                modifiers: Modifiers::default(),
            }
        }

        fn slot_center(&self, item: usize) -> Pos2 {
            let layout = CanvasLayout::compute(
                Pos2::ZERO,
                &self.app.controller().config().canvas,
                self.app.controller().items().len(),
            );
            layout.item_slots[item].center()
        }

        /// Press on an item, move in two steps to `to`, then hold still.
        fn drag_without_release(&mut self, item: usize, to: Pos2) {
            let from = self.slot_center(item);
            self.frame(vec![Event::PointerMoved(from), Self::button(from, true)]);
            self.frame(vec![Event::PointerMoved(from.lerp(to, 0.5))]);
            self.frame(vec![Event::PointerMoved(to)]);
        }

        fn drag(&mut self, item: usize, to: Pos2) {
            self.drag_without_release(item, to);
            self.frame(vec![Self::button(to, false)]);
        }

        fn occupant(&self, zone: ZoneId) -> Option<String> {
            self.app
                .controller()
                .zone_state(zone)
                .occupant()
                .map(|item| item.label.clone())
        }
    }

    #[test]
    fn first_frame_measures_both_zones() {
        let harness = Harness::new();
        let measured = harness.app.controller().measured_zones().copied().unwrap();
        assert_eq!(measured.zone1, ZoneGeometry::new(448.0, 364.0, 288.0, 172.0));
        assert_eq!(measured.zone2, ZoneGeometry::new(944.0, 364.0, 288.0, 172.0));
    }

    #[test]
    fn dragged_item_is_lifted_then_glides_home() {
        let mut harness = Harness::new();
        harness.drag_without_release(RED, pos2(600.0, 450.0));
        assert!(matches!(
            harness.app.drag_visuals[RED],
            DragVisual::Dragging { .. }
        ));
        assert!(harness.app.drag_visuals[RED].is_lifted());

        harness.frame(vec![Harness::button(pos2(600.0, 450.0), false)]);
        assert!(matches!(
            harness.app.drag_visuals[RED],
            DragVisual::Returning { .. }
        ));

        harness.wait(1.0);
        assert_eq!(harness.app.drag_visuals[RED], DragVisual::Resting);
    }

    #[test]
    fn drags_from_sidebar_fill_the_zone_they_land_in() {
        let mut harness = Harness::new();

        harness.drag(RED, pos2(600.0, 450.0));
        assert_eq!(harness.occupant(ZoneId::Zone1).as_deref(), Some("Red"));
        assert_eq!(harness.occupant(ZoneId::Zone2), None);

        harness.drag(BLUE, pos2(1000.0, 450.0));
        assert_eq!(harness.occupant(ZoneId::Zone1).as_deref(), Some("Red"));
        assert_eq!(harness.occupant(ZoneId::Zone2).as_deref(), Some("Blue"));

        harness.drag(GREEN, pos2(448.0, 450.0));
        assert_eq!(harness.occupant(ZoneId::Zone1).as_deref(), Some("Red"));
        assert_eq!(harness.occupant(ZoneId::Zone2).as_deref(), Some("Blue"));
    }

    #[test]
    fn later_window_moves_do_not_remeasure() {
        let mut harness = Harness::new();
        let before = harness.app.controller().measured_zones().copied();
        harness.time += 0.1;
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0))),
            time: Some(harness.time),
            ..Default::default()
        };
        let _ = harness.ctx.run(input, |ctx| harness.app.show(ctx));
        assert_eq!(harness.app.controller().measured_zones().copied(), before);
    }
}
