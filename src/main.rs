#![deny(missing_docs)]

//! Entry point for the drop zone canvas.
use dropzone::config;
use dropzone::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use dropzone::logging;
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let loaded = config::load_or_default();
    let inner_size = match &loaded {
        Ok(cfg) => egui::vec2(cfg.canvas.width, cfg.canvas.height),
        Err(_) => MIN_VIEWPORT_SIZE,
    };
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(inner_size)
            .with_min_inner_size(MIN_VIEWPORT_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Drop Zones",
        native_options,
        Box::new(move |_cc| match loaded {
            Ok(cfg) => Ok(Box::new(EguiApp::new(cfg))),
            Err(err) => {
                tracing::error!("Failed to load config: {err}");
                Ok(Box::new(LaunchError {
                    message: format!("Failed to load config: {err}"),
                }))
            }
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start");
                ui.label(&self.message);
            });
        });
    }
}
