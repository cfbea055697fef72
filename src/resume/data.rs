use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The structured content of a resume.
///
/// Edits never mutate the value held by the app shell in place: the editor
/// works on a clone and hands the whole new copy back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

impl ExperienceEntry {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            company: String::new(),
            position: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            description: String::new(),
        }
    }

    /// "start – end", with "Present" standing in for the end of a current role.
    pub fn date_range(&self) -> String {
        let end = if self.current { "Present" } else { self.end_date.as_str() };
        join_dates(&self.start_date, end)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
}

impl EducationEntry {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            institution: String::new(),
            degree: String::new(),
            field: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            gpa: String::new(),
        }
    }

    pub fn date_range(&self) -> String {
        join_dates(&self.start_date, &self.end_date)
    }

    /// "Degree in Field", or whichever half is present.
    pub fn qualification(&self) -> String {
        match (self.degree.trim(), self.field.trim()) {
            ("", field) => field.to_owned(),
            (degree, "") => degree.to_owned(),
            (degree, field) => format!("{degree} in {field}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub level: SkillLevel,
}

impl Skill {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            level: SkillLevel::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

fn join_dates(start: &str, end: &str) -> String {
    match (start.trim(), end.trim()) {
        ("", "") => String::new(),
        (start, "") => start.to_owned(),
        ("", end) => end.to_owned(),
        (start, end) => format!("{start} – {end}"),
    }
}

/// Anything in a resume section that can be addressed by id.
pub trait Entry {
    fn id(&self) -> Uuid;
}

impl Entry for ExperienceEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Entry for EducationEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Entry for Skill {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Direction for reordering an entry within its section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
}

/// Removes the entry with `id`. Returns false if no entry matched.
pub fn remove_entry<T: Entry>(entries: &mut Vec<T>, id: Uuid) -> bool {
    let before = entries.len();
    entries.retain(|entry| entry.id() != id);
    entries.len() != before
}

/// Swaps the entry with `id` with its neighbour. Moving past either end is a no-op.
pub fn move_entry<T: Entry>(entries: &mut [T], id: Uuid, direction: Move) -> bool {
    let Some(index) = entries.iter().position(|entry| entry.id() == id) else {
        return false;
    };
    let target = match direction {
        Move::Up if index > 0 => index - 1,
        Move::Down if index + 1 < entries.len() => index + 1,
        _ => return false,
    };
    entries.swap(index, target);
    true
}
