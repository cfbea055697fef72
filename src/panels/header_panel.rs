use crate::config::APP_NAME;
use crate::event::{AppEvent, EventBus};
use crate::state::{AppState, ViewMode};

/// Title bar with the Edit / Preview toggle and the Print button.
pub fn header_panel(ctx: &egui::Context, state: &AppState, bus: &EventBus) {
    egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.heading(APP_NAME);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🖨 Print").clicked() {
                    log::info!("Print requested");
                    bus.emit(AppEvent::PrintRequested);
                }
                // Laid out right to left, so Preview comes before Edit.
                for (mode, icon) in [(ViewMode::Preview, "👁"), (ViewMode::Edit, "✏")] {
                    let label = format!("{icon} {}", mode.label());
                    if ui.selectable_label(state.view_mode == mode, label).clicked() {
                        bus.emit(AppEvent::ViewModeChanged(mode));
                    }
                }
            });
        });
        ui.add_space(6.0);
    });
}
