mod data;
mod design;
mod sample;

pub use data::{
    move_entry, remove_entry, EducationEntry, Entry, ExperienceEntry, Move, PersonalInfo,
    ResumeData, Skill, SkillLevel,
};
pub use design::{
    BackgroundColor, BackgroundPreset, FontFamily, FontSettings, FontSize, TemplateType,
    BACKGROUND_PRESETS,
};
