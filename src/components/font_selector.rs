use crate::resume::{FontFamily, FontSettings, FontSize};

/// Family drop-down plus size toggle.
pub struct FontSelector {
    pub settings: FontSettings,
}

impl FontSelector {
    pub fn new(settings: FontSettings) -> Self {
        Self { settings }
    }

    /// Returns the full new settings when either half changed.
    pub fn show(&self, ui: &mut egui::Ui) -> Option<FontSettings> {
        let mut next = self.settings;
        ui.label(egui::RichText::new("Font").strong());

        egui::ComboBox::from_id_salt("font_family_combo")
            .selected_text(next.family.label())
            .show_ui(ui, |ui| {
                for family in FontFamily::ALL {
                    ui.selectable_value(&mut next.family, family, family.label());
                }
            });

        ui.horizontal(|ui| {
            ui.label("Size:");
            for size in FontSize::ALL {
                ui.selectable_value(&mut next.size, size, size.label());
            }
        });

        (next != self.settings).then_some(next)
    }
}
