use crate::resume::{BackgroundColor, FontSettings, ResumeData, TemplateType};
use crate::state::ViewMode;

/// A replacement value reported by a child component to the app shell.
///
/// Every variant carries the whole new value for its slice of state; the
/// shell swaps it in without inspecting it.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    ResumeDataChanged(ResumeData),
    TemplateChanged(TemplateType),
    BackgroundChanged(BackgroundColor),
    FontSettingsChanged(FontSettings),
    ViewModeChanged(ViewMode),
    PrintRequested,
}

impl AppEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::ResumeDataChanged(_) => "resume_data_changed",
            AppEvent::TemplateChanged(_) => "template_changed",
            AppEvent::BackgroundChanged(_) => "background_changed",
            AppEvent::FontSettingsChanged(_) => "font_settings_changed",
            AppEvent::ViewModeChanged(_) => "view_mode_changed",
            AppEvent::PrintRequested => "print_requested",
        }
    }
}
