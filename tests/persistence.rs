mod common;

use common::MemoryStorage;
use resume_editor::config::{FONT_SETTINGS_KEY, RESUME_DATA_KEY};
use resume_editor::resume::{FontFamily, FontSize, Skill, SkillLevel};
use resume_editor::{
    AppEvent, BackgroundColor, FontSettings, PersistenceError, ResumeApp, ResumeData, TemplateType,
    ViewMode,
};

fn edited_resume() -> ResumeData {
    let mut data = ResumeData::sample();
    data.personal_info.full_name = "Jordan Reyes".into();
    data.skills.push(Skill { name: "Go".into(), level: SkillLevel::Beginner, ..Skill::blank() });
    data
}

#[test]
fn test_resume_data_round_trips_through_json() {
    for data in [ResumeData::default(), ResumeData::sample(), edited_resume()] {
        let json = serde_json::to_string(&data).unwrap();
        let back: ResumeData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }
}

#[test]
fn test_font_settings_round_trip_through_json() {
    for family in FontFamily::ALL {
        for size in FontSize::ALL {
            let settings = FontSettings { family, size };
            let json = serde_json::to_string(&settings).unwrap();
            assert_eq!(serde_json::from_str::<FontSettings>(&json).unwrap(), settings);
        }
    }
}

#[test]
fn test_stored_json_uses_camel_case_fields() {
    let json = serde_json::to_string(&ResumeData::sample()).unwrap();
    assert!(json.contains("\"personalInfo\""));
    assert!(json.contains("\"fullName\""));
    assert!(json.contains("\"startDate\""));
    assert!(json.contains("\"level\":\"advanced\""));
}

#[test]
fn test_startup_without_stored_keys_uses_defaults() {
    let mut storage = MemoryStorage::default();
    let mut app = ResumeApp::from_storage(Some(&storage)).unwrap();

    let state = app.state();
    assert_eq!(state.resume_data, ResumeData::sample());
    assert_eq!(state.template, TemplateType::Modern);
    assert_eq!(state.background_color.class_name(), "bg-white");
    assert_eq!(
        state.font_settings,
        FontSettings { family: FontFamily::Inter, size: FontSize::Medium }
    );
    assert_eq!(state.view_mode, ViewMode::Edit);

    // An absent key is not written back on its own.
    app.persist(&mut storage);
    assert!(storage.writes.is_empty());
}

#[test]
fn test_startup_adopts_stored_values_but_not_design_choices() {
    let data = edited_resume();
    let resume_json = serde_json::to_string(&data).unwrap();
    let storage = MemoryStorage::with(&[
        (RESUME_DATA_KEY, resume_json.as_str()),
        (FONT_SETTINGS_KEY, r#"{"family":"font-georgia","size":"small"}"#),
    ]);

    let app = ResumeApp::from_storage(Some(&storage)).unwrap();

    assert_eq!(app.state().resume_data, data);
    assert_eq!(
        app.state().font_settings,
        FontSettings { family: FontFamily::Georgia, size: FontSize::Small }
    );
    assert_eq!(app.state().template, TemplateType::Modern);
    assert_eq!(app.state().background_color, BackgroundColor::default());
}

#[test]
fn test_empty_stored_values_are_treated_as_absent() {
    let storage = MemoryStorage::with(&[(RESUME_DATA_KEY, ""), (FONT_SETTINGS_KEY, "")]);

    let app = ResumeApp::from_storage(Some(&storage)).unwrap();

    assert_eq!(app.state().resume_data, ResumeData::sample());
    assert_eq!(app.state().font_settings, FontSettings::default());
}

#[test]
fn test_malformed_stored_value_fails_startup() {
    let unknown_family = r#"{"family":"comic-sans","size":"medium"}"#;
    let storage = MemoryStorage::with(&[(FONT_SETTINGS_KEY, unknown_family)]);
    let err = ResumeApp::from_storage(Some(&storage)).unwrap_err();
    assert!(matches!(err, PersistenceError::Corrupt { key, .. } if key == FONT_SETTINGS_KEY));

    let storage = MemoryStorage::with(&[(RESUME_DATA_KEY, "definitely not json")]);
    assert!(ResumeApp::from_storage(Some(&storage)).is_err());
}

#[test]
fn test_every_change_is_written_through() {
    let mut storage = MemoryStorage::default();
    let mut app = ResumeApp::from_storage(Some(&storage)).unwrap();

    let data = edited_resume();
    app.bus().emit(AppEvent::ResumeDataChanged(data.clone()));
    app.handle_events();
    app.persist(&mut storage);

    let stored: ResumeData = serde_json::from_str(storage.get(RESUME_DATA_KEY).unwrap()).unwrap();
    assert_eq!(stored, data);
    assert_eq!(storage.writes, [RESUME_DATA_KEY]);

    let font = FontSettings { family: FontFamily::Roboto, size: FontSize::Large };
    app.bus().emit(AppEvent::FontSettingsChanged(font));
    app.handle_events();
    app.persist(&mut storage);

    assert_eq!(storage.get(FONT_SETTINGS_KEY), Some(r#"{"family":"font-roboto","size":"large"}"#));
    assert_eq!(storage.writes, [RESUME_DATA_KEY, FONT_SETTINGS_KEY]);
    assert_eq!(storage.flushes, 2);
}

#[test]
fn test_template_and_background_are_never_stored() {
    let mut storage = MemoryStorage::default();
    let mut app = ResumeApp::from_storage(Some(&storage)).unwrap();

    app.bus().emit(AppEvent::TemplateChanged(TemplateType::Creative));
    app.bus().emit(AppEvent::BackgroundChanged(BackgroundColor::new("bg-pink-50")));
    app.handle_events();
    app.persist(&mut storage);
    assert!(storage.writes.is_empty());

    // A reload comes back with the defaults.
    let reloaded = ResumeApp::from_storage(Some(&storage)).unwrap();
    assert_eq!(reloaded.state().template, TemplateType::Modern);
    assert_eq!(reloaded.state().background_color.class_name(), "bg-white");
}

#[test]
fn test_reload_restores_last_written_state() {
    let mut storage = MemoryStorage::default();
    let mut app = ResumeApp::from_storage(Some(&storage)).unwrap();
    let data = edited_resume();
    app.bus().emit(AppEvent::ResumeDataChanged(data.clone()));
    app.handle_events();
    app.persist(&mut storage);

    let reloaded = ResumeApp::from_storage(Some(&storage)).unwrap();
    assert_eq!(reloaded.state().resume_data, data);
}
