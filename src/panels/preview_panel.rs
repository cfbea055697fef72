use crate::preview::{render_resume, show_document};
use crate::state::AppState;

/// Scrollable page rendering of the current state at `scale`.
pub fn preview_panel(ui: &mut egui::Ui, state: &AppState, scale: f32) {
    let document = render_resume(
        &state.resume_data,
        state.template,
        &state.background_color,
        &state.font_settings,
    );

    egui::ScrollArea::both()
        .id_salt("preview_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                show_document(ui, &document, scale);
            });
        });
}
