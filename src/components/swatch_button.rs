use crate::resume::BackgroundPreset;

/// A square color chip for one background preset.
pub struct SwatchButton {
    pub preset: &'static BackgroundPreset,
    pub selected: bool,
}

impl SwatchButton {
    pub fn new(preset: &'static BackgroundPreset, selected: bool) -> Self {
        Self { preset, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let size = egui::vec2(32.0, 32.0);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let [r, g, b] = self.preset.rgb;
            ui.painter().rect_filled(rect, 4.0, egui::Color32::from_rgb(r, g, b));

            let border = if self.selected {
                egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243))
            } else if response.hovered() {
                egui::Stroke::new(1.0, egui::Color32::from_gray(120))
            } else {
                egui::Stroke::new(1.0, egui::Color32::from_gray(200))
            };
            ui.painter().rect_stroke(rect, 4.0, border);
        }

        response.on_hover_text(self.preset.label)
    }
}
