mod common;

use common::UiDriver;
use resume_editor::panels::editor_panel;
use resume_editor::resume::{Skill, SkillLevel};
use resume_editor::{AppEvent, EventBus, ResumeData};

/// Drive the editor over `data` with `interact` and return the one edited copy it emitted.
fn edit_once(
    data: &ResumeData,
    interact: impl FnOnce(&mut UiDriver, &mut dyn FnMut(&mut egui::Ui)),
) -> ResumeData {
    let bus = EventBus::new();
    let mut driver = UiDriver::new();
    let mut editor = |ui: &mut egui::Ui| editor_panel(ui, data, &bus);

    driver.settle(&mut editor);
    assert!(bus.is_empty(), "idle frames must not emit");
    interact(&mut driver, &mut editor);

    let mut events = bus.drain();
    assert_eq!(events.len(), 1, "expected one emission, got {events:?}");
    match events.remove(0) {
        AppEvent::ResumeDataChanged(edited) => edited,
        other => panic!("unexpected event {}", other.name()),
    }
}

#[test]
fn test_typing_into_a_field_changes_only_that_field() {
    let data = ResumeData::sample();
    let edited = edit_once(&data, |driver, editor| {
        let field = driver.text_rect("Alex Morgan");
        driver.click(field, editor);
        driver.type_text("!", editor);
    });

    let name = &edited.personal_info.full_name;
    assert_eq!(name.chars().count(), "Alex Morgan".chars().count() + 1);
    assert_eq!(name.replace('!', ""), "Alex Morgan");

    let mut restored = edited.clone();
    restored.personal_info.full_name = data.personal_info.full_name.clone();
    assert_eq!(restored, data);
}

#[test]
fn test_add_button_appends_one_blank_entry() {
    let data = ResumeData::sample();
    let edited = edit_once(&data, |driver, editor| {
        let add = driver.text_rect("➕ Add Skill");
        driver.click(add, editor);
    });

    assert_eq!(edited.skills.len(), data.skills.len() + 1);
    assert_eq!(edited.skills[..data.skills.len()], data.skills[..]);
    let added = &edited.skills[data.skills.len()];
    assert!(added.name.is_empty());
    assert_eq!(added.level, SkillLevel::Intermediate);
    assert!(data.skills.iter().all(|skill: &Skill| skill.id != added.id));

    assert_eq!(edited.personal_info, data.personal_info);
    assert_eq!(edited.experience, data.experience);
    assert_eq!(edited.education, data.education);
}

#[test]
fn test_remove_button_drops_that_entry() {
    let data = ResumeData::sample();
    let edited = edit_once(&data, |driver, editor| {
        // Topmost trash button belongs to the first experience entry.
        let remove = driver.text_rect("🗑");
        driver.click(remove, editor);
    });

    assert_eq!(edited.experience, data.experience[1..]);
    assert_eq!(edited.skills, data.skills);
    assert_eq!(edited.education, data.education);
}

#[test]
fn test_move_down_swaps_with_next_entry() {
    let data = ResumeData::sample();
    let edited = edit_once(&data, |driver, editor| {
        let down = driver.text_rect("⬇");
        driver.click(down, editor);
    });

    assert_eq!(edited.experience, vec![data.experience[1].clone(), data.experience[0].clone()]);

    let mut restored = edited.clone();
    restored.experience = data.experience.clone();
    assert_eq!(restored, data);
}

#[test]
fn test_current_checkbox_toggles_only_that_entry() {
    let data = ResumeData::sample();
    assert!(data.experience[0].current);

    let edited = edit_once(&data, |driver, editor| {
        let current = driver.text_rect("Current");
        driver.click(current, editor);
    });

    assert!(!edited.experience[0].current);
    let mut restored = edited.clone();
    restored.experience[0].current = true;
    assert_eq!(restored, data);
}
