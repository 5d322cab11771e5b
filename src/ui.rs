/*
 * UI Module
 *
 * This module builds the egui panel shown over the flock. It only reports
 * statistics and offers two frame-driver controls: pausing and scattering
 * the birds. The simulation constants themselves are not adjustable.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiActions {
    pub scatter: bool,
    pub pause_toggled: bool,
}

// Update the UI and report what the user asked for this frame
pub fn update_ui(egui: &mut Egui, paused: &mut bool, debug_info: &DebugInfo) -> UiActions {
    let mut actions = UiActions::default();
    let was_paused = *paused;

    let ctx = egui.begin_frame();

    egui::Window::new("Flock")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!(
                "Frame time: {:.2} ms",
                debug_info.frame_time.as_secs_f64() * 1000.0
            ));
            ui.label(format!("Tick delta: {:.2}", debug_info.last_delta));
            ui.label(format!("Ticks: {}", debug_info.ticks));

            ui.separator();

            ui.label(format!("Birds: {}", debug_info.birds));
            ui.label(format!(
                "Neighbours per bird: {:.2}",
                debug_info.average_neighbors()
            ));
            ui.label(format!("Isolated birds: {}", debug_info.isolated_birds));

            ui.separator();

            if ui.button("Scatter Birds").clicked() {
                actions.scatter = true;
            }
            ui.checkbox(paused, "Pause Simulation");
        });

    actions.pause_toggled = *paused != was_paused;
    actions
}
