use uuid::Uuid;

use crate::event::{AppEvent, EventBus};
use crate::resume::{
    move_entry, remove_entry, EducationEntry, Entry, ExperienceEntry, Move, PersonalInfo,
    ResumeData, Skill, SkillLevel,
};

/// Row-level request collected while iterating a section, applied afterwards.
#[derive(Debug, Clone, Copy)]
enum ListAction {
    Remove(Uuid),
    Move(Uuid, Move),
}

/// Form bound to a copy of `data`; emits the whole edited copy when anything changed.
pub fn editor_panel(ui: &mut egui::Ui, data: &ResumeData, bus: &EventBus) {
    let mut draft = data.clone();
    if edit_resume(ui, &mut draft) {
        bus.emit(AppEvent::ResumeDataChanged(draft));
    }
}

/// Returns true if `draft` was modified.
fn edit_resume(ui: &mut egui::Ui, draft: &mut ResumeData) -> bool {
    let mut changed = false;

    egui::CollapsingHeader::new("Personal Information")
        .default_open(true)
        .show(ui, |ui| changed |= edit_personal_info(ui, &mut draft.personal_info));

    egui::CollapsingHeader::new("Experience")
        .default_open(true)
        .show(ui, |ui| {
            changed |= edit_list(
                ui,
                &mut draft.experience,
                "Add Experience",
                ExperienceEntry::blank,
                edit_experience,
            );
        });

    egui::CollapsingHeader::new("Education")
        .default_open(true)
        .show(ui, |ui| {
            changed |= edit_list(
                ui,
                &mut draft.education,
                "Add Education",
                EducationEntry::blank,
                edit_education,
            );
        });

    egui::CollapsingHeader::new("Skills")
        .default_open(true)
        .show(ui, |ui| {
            changed |= edit_list(ui, &mut draft.skills, "Add Skill", Skill::blank, edit_skill);
        });

    changed
}

fn text_row(ui: &mut egui::Ui, label: &str, value: &mut String) -> bool {
    ui.label(label);
    let changed = ui
        .add(egui::TextEdit::singleline(value).desired_width(f32::INFINITY))
        .changed();
    ui.end_row();
    changed
}

fn multiline_row(ui: &mut egui::Ui, label: &str, value: &mut String) -> bool {
    ui.label(label);
    let changed = ui
        .add(egui::TextEdit::multiline(value).desired_rows(3).desired_width(f32::INFINITY))
        .changed();
    ui.end_row();
    changed
}

fn edit_personal_info(ui: &mut egui::Ui, info: &mut PersonalInfo) -> bool {
    let mut changed = false;
    egui::Grid::new("personal_info_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            changed |= text_row(ui, "Full name", &mut info.full_name);
            changed |= text_row(ui, "Title", &mut info.title);
            changed |= text_row(ui, "Email", &mut info.email);
            changed |= text_row(ui, "Phone", &mut info.phone);
            changed |= text_row(ui, "Location", &mut info.location);
            changed |= text_row(ui, "Website", &mut info.website);
            changed |= multiline_row(ui, "Summary", &mut info.summary);
        });
    changed
}

/// Shared add / remove / reorder handling for one section.
fn edit_list<T: Entry>(
    ui: &mut egui::Ui,
    entries: &mut Vec<T>,
    add_label: &str,
    blank: fn() -> T,
    edit: fn(&mut egui::Ui, &mut T) -> bool,
) -> bool {
    let mut changed = false;
    let mut action = None;
    let count = entries.len();

    for (index, entry) in entries.iter_mut().enumerate() {
        let id = entry.id();
        ui.push_id(id, |ui| {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(format!("#{}", index + 1));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("🗑").on_hover_text("Remove").clicked() {
                            action = Some(ListAction::Remove(id));
                        }
                        let down = egui::Button::new("⬇").small();
                        if ui.add_enabled(index + 1 < count, down).clicked() {
                            action = Some(ListAction::Move(id, Move::Down));
                        }
                        if ui.add_enabled(index > 0, egui::Button::new("⬆").small()).clicked() {
                            action = Some(ListAction::Move(id, Move::Up));
                        }
                    });
                });
                changed |= edit(ui, entry);
            });
        });
    }

    match action {
        Some(ListAction::Remove(id)) => changed |= remove_entry(entries, id),
        Some(ListAction::Move(id, direction)) => changed |= move_entry(entries, id, direction),
        None => {}
    }

    if ui.button(format!("➕ {add_label}")).clicked() {
        entries.push(blank());
        changed = true;
    }
    changed
}

fn edit_experience(ui: &mut egui::Ui, entry: &mut ExperienceEntry) -> bool {
    let mut changed = false;
    egui::Grid::new("experience_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            changed |= text_row(ui, "Position", &mut entry.position);
            changed |= text_row(ui, "Company", &mut entry.company);
            changed |= text_row(ui, "Location", &mut entry.location);
            changed |= text_row(ui, "Start", &mut entry.start_date);

            ui.label("End");
            ui.horizontal(|ui| {
                if !entry.current {
                    changed |= ui.text_edit_singleline(&mut entry.end_date).changed();
                }
                changed |= ui.checkbox(&mut entry.current, "Current").changed();
            });
            ui.end_row();

            changed |= multiline_row(ui, "Description", &mut entry.description);
        });
    changed
}

fn edit_education(ui: &mut egui::Ui, entry: &mut EducationEntry) -> bool {
    let mut changed = false;
    egui::Grid::new("education_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            changed |= text_row(ui, "Institution", &mut entry.institution);
            changed |= text_row(ui, "Degree", &mut entry.degree);
            changed |= text_row(ui, "Field", &mut entry.field);
            changed |= text_row(ui, "Start", &mut entry.start_date);
            changed |= text_row(ui, "End", &mut entry.end_date);
            changed |= text_row(ui, "GPA", &mut entry.gpa);
        });
    changed
}

fn edit_skill(ui: &mut egui::Ui, skill: &mut Skill) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        changed |= ui
            .add(egui::TextEdit::singleline(&mut skill.name).hint_text("Skill"))
            .changed();
        egui::ComboBox::from_id_salt("skill_level")
            .selected_text(skill.level.label())
            .show_ui(ui, |ui| {
                for level in SkillLevel::ALL {
                    changed |= ui
                        .selectable_value(&mut skill.level, level, level.label())
                        .changed();
                }
            });
    });
    changed
}
