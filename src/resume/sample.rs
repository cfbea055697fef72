use uuid::Uuid;

use super::data::{EducationEntry, ExperienceEntry, PersonalInfo, ResumeData, Skill, SkillLevel};

impl ResumeData {
    /// The built-in resume shown on first launch.
    ///
    /// Ids are fixed so two calls compare equal.
    pub fn sample() -> Self {
        Self {
            personal_info: PersonalInfo {
                full_name: "Alex Morgan".into(),
                title: "Senior Software Engineer".into(),
                email: "alex.morgan@example.com".into(),
                phone: "(555) 123-4567".into(),
                location: "San Francisco, CA".into(),
                website: "alexmorgan.dev".into(),
                summary: "Software engineer with eight years of experience building \
                          reliable web platforms and developer tools. Enjoys turning \
                          ambiguous problems into simple, well-tested systems."
                    .into(),
            },
            experience: vec![
                ExperienceEntry {
                    id: Uuid::from_u128(0x1001),
                    company: "Northwind Labs".into(),
                    position: "Senior Software Engineer".into(),
                    location: "San Francisco, CA".into(),
                    start_date: "Mar 2021".into(),
                    end_date: String::new(),
                    current: true,
                    description: "Led the rewrite of the billing pipeline, cutting \
                                  invoice latency by 60%. Mentored four engineers."
                        .into(),
                },
                ExperienceEntry {
                    id: Uuid::from_u128(0x1002),
                    company: "Brightline Software".into(),
                    position: "Software Engineer".into(),
                    location: "Oakland, CA".into(),
                    start_date: "Jun 2017".into(),
                    end_date: "Feb 2021".into(),
                    current: false,
                    description: "Built the customer dashboard and its reporting API \
                                  serving 20k daily users."
                        .into(),
                },
            ],
            education: vec![EducationEntry {
                id: Uuid::from_u128(0x2001),
                institution: "University of California, Davis".into(),
                degree: "B.S.".into(),
                field: "Computer Science".into(),
                start_date: "2013".into(),
                end_date: "2017".into(),
                gpa: "3.8".into(),
            }],
            skills: vec![
                skill(0x3001, "Rust", SkillLevel::Advanced),
                skill(0x3002, "TypeScript", SkillLevel::Expert),
                skill(0x3003, "PostgreSQL", SkillLevel::Advanced),
                skill(0x3004, "System Design", SkillLevel::Intermediate),
            ],
        }
    }
}

fn skill(id: u128, name: &str, level: SkillLevel) -> Skill {
    Skill { id: Uuid::from_u128(id), name: name.into(), level }
}
