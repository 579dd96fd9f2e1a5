use eframe::egui::{self, Align2, FontId, LayerId, Order, Pos2, Rect, Sense};

use super::{CanvasLayout, EguiApp, style};
use crate::drop_zone::{DraggableItem, ItemId, Point};

const ITEM_CORNER_RADIUS: f32 = 8.0;

impl EguiApp {
    pub(super) fn render_sidebar(&mut self, ui: &egui::Ui, layout: &CanvasLayout) {
        let now = ui.input(|i| i.time);
        let motion = self.controller.config().motion.clone();
        let items: Vec<DraggableItem> = self.controller.items().to_vec();
        for (item, slot) in items.iter().zip(layout.item_slots.iter().copied()) {
            let id = ui.id().with(("draggable_item", item.id.0));
            let response = ui.interact(slot, id, Sense::drag());
            let index = item.id.0;

            if response.dragged() {
                let pointer = pointer_pos_for_drag(ui, &response, self.drag_visuals[index].last_pointer());
                if let Some(pointer) = pointer {
                    let press_origin = ui.input(|i| i.pointer.press_origin());
                    self.drag_visuals[index].drag_to(
                        pointer,
                        press_origin,
                        now,
                        motion.drag_elastic,
                        motion.return_secs,
                    );
                }
            } else if response.drag_stopped() {
                let last = self.drag_visuals[index].last_pointer();
                if let Some(pointer) = pointer_pos_for_drag(ui, &response, last) {
                    self.controller
                        .handle_drag_end(Point::from(pointer), ItemId(index), now);
                }
                self.drag_visuals[index].release(now, motion.drag_elastic, motion.return_secs);
            }
            self.drag_visuals[index].settle(now, motion.return_secs);

            let visual = self.drag_visuals[index];
            let rect = slot.translate(visual.offset(now, motion.drag_elastic, motion.return_secs));
            if visual.is_lifted() {
                let layer = LayerId::new(Order::Foreground, id);
                paint_item(&ui.ctx().layer_painter(layer), rect, item, true);
            } else {
                paint_item(ui.painter(), rect, item, false);
            }
        }
    }
}

/// Release position for a drag, preferring what egui reports this frame.
fn pointer_pos_for_drag(
    ui: &egui::Ui,
    response: &egui::Response,
    last_known: Option<Pos2>,
) -> Option<Pos2> {
    response
        .interact_pointer_pos()
        .or_else(|| ui.input(|i| i.pointer.latest_pos()))
        .or(last_known)
}

fn paint_item(painter: &egui::Painter, rect: Rect, item: &DraggableItem, lifted: bool) {
    if lifted {
        painter.add(style::lifted_shadow().as_shape(rect, ITEM_CORNER_RADIUS));
    }
    let fill = item.color.to_color32();
    painter.rect_filled(rect, ITEM_CORNER_RADIUS, fill);
    if !item.label.is_empty() {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            &item.label,
            FontId::proportional(14.0),
            style::label_color_for(fill),
        );
    }
}
