use crate::resume::TemplateType;

/// Lists every template; holds no state of its own.
pub struct TemplateSelector {
    pub selected: TemplateType,
}

impl TemplateSelector {
    pub fn new(selected: TemplateType) -> Self {
        Self { selected }
    }

    /// Returns the newly chosen template, if the user picked one.
    pub fn show(&self, ui: &mut egui::Ui) -> Option<TemplateType> {
        let mut choice = None;
        ui.label(egui::RichText::new("Template").strong());
        egui::Grid::new("template_selector_grid")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                for (index, template) in TemplateType::ALL.into_iter().enumerate() {
                    let response = ui
                        .selectable_label(self.selected == template, template.label())
                        .on_hover_text(template.description());
                    if response.clicked() {
                        choice = Some(template);
                    }
                    if index % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
        choice
    }
}
