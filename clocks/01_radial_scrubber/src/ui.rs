//! UI module - egui telemetry panel under the scrubber
//!
//! Shows the drag velocity readout and offers the same actions as the
//! keyboard shortcuts.

use nannou_egui::egui;
use scrubber_core::{DisplayMode, InputMode, RadialScrubber};

/// Result of UI interactions
#[derive(Default)]
pub struct UiResult {
    /// Flip between normal and minimized
    pub toggle_mode: bool,
    /// Write the current state out as SVG
    pub export_svg: bool,
}

/// Draw the telemetry panel
pub fn draw_telemetry_panel(
    ctx: &egui::Context,
    scrubber: &RadialScrubber,
    panel_height: f32,
) -> UiResult {
    let mut result = UiResult::default();

    egui::TopBottomPanel::bottom("telemetry")
        .exact_height(panel_height)
        .show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Velocity").strong());
                ui.monospace(scrubber.velocity_display().to_string());
                ui.separator();
                ui.label(egui::RichText::new("Angle").strong());
                ui.monospace(format!("{:.1}°", scrubber.last_value()));
            });

            ui.horizontal(|ui| {
                let mode = match scrubber.mode() {
                    DisplayMode::Normal => "Normal",
                    DisplayMode::Minimized => "Minimized",
                };
                let input = match scrubber.input_mode() {
                    InputMode::Pointer => "pointer",
                    InputMode::Touch => "touch",
                };
                ui.label(format!("{} · {} input", mode, input));
                ui.weak(format!(
                    "{} {}",
                    scrubber.date_text(),
                    scrubber.time_text()
                ));
            });

            ui.separator();

            ui.horizontal(|ui| {
                let toggle_label = match scrubber.mode() {
                    DisplayMode::Normal => "Minimize (M)",
                    DisplayMode::Minimized => "Maximize (M)",
                };
                if ui.button(toggle_label).clicked() {
                    result.toggle_mode = true;
                }
                if ui.button("Export SVG (E)").clicked() {
                    result.export_svg = true;
                }
            });
        });

    result
}
