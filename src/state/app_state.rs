use crate::event::AppEvent;
use crate::resume::{BackgroundColor, FontSettings, ResumeData, TemplateType};

/// Which half of the UI is showing. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Edit,
    Preview,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Edit => "Edit",
            ViewMode::Preview => "Preview",
        }
    }
}

/// Everything the app shell owns.
///
/// Other components only ever see a shared borrow of this and report
/// replacement values as [`AppEvent`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub resume_data: ResumeData,
    pub template: TemplateType,
    pub background_color: BackgroundColor,
    pub font_settings: FontSettings,
    pub view_mode: ViewMode,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            resume_data: ResumeData::sample(),
            template: TemplateType::default(),
            background_color: BackgroundColor::default(),
            font_settings: FontSettings::default(),
            view_mode: ViewMode::default(),
        }
    }
}

impl AppState {
    pub fn set_resume_data(&mut self, resume_data: ResumeData) {
        self.resume_data = resume_data;
    }

    pub fn set_template(&mut self, template: TemplateType) {
        self.template = template;
    }

    pub fn set_background_color(&mut self, background_color: BackgroundColor) {
        self.background_color = background_color;
    }

    pub fn set_font_settings(&mut self, font_settings: FontSettings) {
        self.font_settings = font_settings;
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        if self.view_mode != view_mode {
            log::info!("View mode: {}", view_mode.label());
        }
        self.view_mode = view_mode;
    }

    /// Swap in the value carried by `event`. Events that carry no state
    /// (print requests) are left to the shell and ignored here.
    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::ResumeDataChanged(data) => self.set_resume_data(data),
            AppEvent::TemplateChanged(template) => self.set_template(template),
            AppEvent::BackgroundChanged(color) => self.set_background_color(color),
            AppEvent::FontSettingsChanged(settings) => self.set_font_settings(settings),
            AppEvent::ViewModeChanged(mode) => self.set_view_mode(mode),
            AppEvent::PrintRequested => {}
        }
    }
}
