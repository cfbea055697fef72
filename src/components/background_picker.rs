use super::SwatchButton;
use crate::resume::{BackgroundColor, BACKGROUND_PRESETS};

/// Row of preset swatches. The current class may be one the presets don't
/// know about, in which case nothing is highlighted.
pub struct BackgroundPicker<'a> {
    pub selected: &'a BackgroundColor,
}

impl<'a> BackgroundPicker<'a> {
    pub fn new(selected: &'a BackgroundColor) -> Self {
        Self { selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> Option<BackgroundColor> {
        let mut choice = None;
        ui.label(egui::RichText::new("Background").strong());
        ui.horizontal_wrapped(|ui| {
            for preset in &BACKGROUND_PRESETS {
                let selected = self.selected.class_name() == preset.class;
                if SwatchButton::new(preset, selected).show(ui).clicked() {
                    choice = Some(BackgroundColor::new(preset.class));
                }
            }
        });
        choice
    }
}
