use crate::components::{BackgroundPicker, FontSelector, TemplateSelector};
use crate::event::{AppEvent, EventBus};
use crate::state::AppState;

/// Template, background and font pickers.
pub fn design_panel(ui: &mut egui::Ui, state: &AppState, bus: &EventBus) {
    if let Some(template) = TemplateSelector::new(state.template).show(ui) {
        log::info!("Template selected: {}", template.label());
        bus.emit(AppEvent::TemplateChanged(template));
    }

    ui.add_space(8.0);
    if let Some(color) = BackgroundPicker::new(&state.background_color).show(ui) {
        log::info!("Background selected: {}", color.class_name());
        bus.emit(AppEvent::BackgroundChanged(color));
    }

    ui.add_space(8.0);
    if let Some(settings) = FontSelector::new(state.font_settings).show(ui) {
        log::info!("Font selected: {} / {}", settings.family.label(), settings.size.label());
        bus.emit(AppEvent::FontSettingsChanged(settings));
    }
}
