use egui::epaint::Shadow;
use egui::{Color32, Stroke};

/// Outline drawn around zones so an empty white zone stays visible.
pub fn zone_outline() -> Stroke {
    Stroke::new(1.0, Color32::from_rgb(150, 150, 150))
}

/// Shadow under an item while it is lifted.
pub fn lifted_shadow() -> Shadow {
    Shadow {
        offset: [0, 6],
        blur: 16,
        spread: 0,
        color: Color32::from_black_alpha(70),
    }
}

/// Readable label color on top of `fill`.
pub fn label_color_for(fill: Color32) -> Color32 {
    let luma = 0.299 * f32::from(fill.r()) + 0.587 * f32::from(fill.g()) + 0.114 * f32::from(fill.b());
    if luma > 150.0 {
        Color32::from_rgb(20, 20, 20)
    } else {
        Color32::WHITE
    }
}
