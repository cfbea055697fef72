use super::document::{Align, Block, EntryBlock, PageStyle, PreviewDocument, Rgb};
use crate::resume::{BackgroundColor, FontSettings, ResumeData, TemplateType};

const BLUE: Rgb = Rgb([37, 99, 235]);
const PURPLE: Rgb = Rgb([124, 58, 237]);

/// Per-template decisions; everything else is shared.
struct TemplateStyle {
    accent: Rgb,
    header_align: Align,
    name_color: Rgb,
    headline_color: Rgb,
    uppercase_titles: bool,
    title_color: Rgb,
    title_rule: bool,
    divider_after_header: bool,
    skills_as_tags: bool,
    skills_first: bool,
}

impl TemplateStyle {
    fn for_template(template: TemplateType) -> Self {
        match template {
            TemplateType::Modern => Self {
                accent: BLUE,
                header_align: Align::Left,
                name_color: Rgb::BLACK,
                headline_color: BLUE,
                uppercase_titles: false,
                title_color: BLUE,
                title_rule: true,
                divider_after_header: false,
                skills_as_tags: true,
                skills_first: false,
            },
            TemplateType::Classic => Self {
                accent: Rgb::BLACK,
                header_align: Align::Center,
                name_color: Rgb::BLACK,
                headline_color: Rgb::MUTED,
                uppercase_titles: true,
                title_color: Rgb::BLACK,
                title_rule: true,
                divider_after_header: true,
                skills_as_tags: false,
                skills_first: false,
            },
            TemplateType::Minimal => Self {
                accent: Rgb::MUTED,
                header_align: Align::Left,
                name_color: Rgb::BLACK,
                headline_color: Rgb::MUTED,
                uppercase_titles: true,
                title_color: Rgb::MUTED,
                title_rule: false,
                divider_after_header: false,
                skills_as_tags: false,
                skills_first: false,
            },
            TemplateType::Creative => Self {
                accent: PURPLE,
                header_align: Align::Left,
                name_color: PURPLE,
                headline_color: Rgb::BLACK,
                uppercase_titles: false,
                title_color: PURPLE,
                title_rule: false,
                divider_after_header: true,
                skills_as_tags: true,
                skills_first: true,
            },
        }
    }

    fn section_title(&self, text: &str) -> Block {
        let text = if self.uppercase_titles { text.to_uppercase() } else { text.to_owned() };
        Block::SectionTitle { text, color: self.title_color, rule: self.title_rule }
    }
}

/// Lay out a resume for the given design choices.
///
/// Pure: no I/O, no clock, no randomness. Equal inputs give equal documents.
pub fn render_resume(
    data: &ResumeData,
    template: TemplateType,
    background: &BackgroundColor,
    font: &FontSettings,
) -> PreviewDocument {
    let style = TemplateStyle::for_template(template);
    let page = PageStyle {
        background: background.clone(),
        background_rgb: Rgb(background.rgb()),
        font_family: font.family,
        base_size: font.size.base_points(),
    };

    let mut blocks = Vec::new();
    push_header(&mut blocks, data, &style);

    push_summary(&mut blocks, data, &style);
    if style.skills_first {
        push_skills(&mut blocks, data, &style);
        push_experience(&mut blocks, data, &style);
        push_education(&mut blocks, data, &style);
    } else {
        push_experience(&mut blocks, data, &style);
        push_education(&mut blocks, data, &style);
        push_skills(&mut blocks, data, &style);
    }

    PreviewDocument { page, blocks }
}

fn push_header(blocks: &mut Vec<Block>, data: &ResumeData, style: &TemplateStyle) {
    let info = &data.personal_info;
    let align = style.header_align;

    if let Some(name) = non_empty(&info.full_name) {
        blocks.push(Block::Name { text: name, align, color: style.name_color });
    }
    if let Some(title) = non_empty(&info.title) {
        blocks.push(Block::Headline { text: title, align, color: style.headline_color });
    }

    let items: Vec<String> = [&info.email, &info.phone, &info.location, &info.website]
        .into_iter()
        .filter_map(|field| non_empty(field))
        .collect();
    if !items.is_empty() {
        blocks.push(Block::Contact { items, align });
    }

    if style.divider_after_header && !blocks.is_empty() {
        blocks.push(Block::Divider);
    }
}

fn push_summary(blocks: &mut Vec<Block>, data: &ResumeData, style: &TemplateStyle) {
    if let Some(summary) = non_empty(&data.personal_info.summary) {
        blocks.push(style.section_title("Summary"));
        blocks.push(Block::Paragraph { text: summary });
    }
}

fn push_experience(blocks: &mut Vec<Block>, data: &ResumeData, style: &TemplateStyle) {
    if data.experience.is_empty() {
        return;
    }
    blocks.push(style.section_title("Experience"));
    for job in &data.experience {
        blocks.push(Block::Entry(EntryBlock {
            title: job.position.trim().to_owned(),
            subtitle: job.company.trim().to_owned(),
            dates: job.date_range(),
            detail: job.location.trim().to_owned(),
            body: job.description.trim().to_owned(),
        }));
    }
}

fn push_education(blocks: &mut Vec<Block>, data: &ResumeData, style: &TemplateStyle) {
    if data.education.is_empty() {
        return;
    }
    blocks.push(style.section_title("Education"));
    for school in &data.education {
        let detail = non_empty(&school.gpa).map(|gpa| format!("GPA: {gpa}")).unwrap_or_default();
        blocks.push(Block::Entry(EntryBlock {
            title: school.qualification(),
            subtitle: school.institution.trim().to_owned(),
            dates: school.date_range(),
            detail,
            body: String::new(),
        }));
    }
}

fn push_skills(blocks: &mut Vec<Block>, data: &ResumeData, style: &TemplateStyle) {
    let named: Vec<_> = data.skills.iter().filter(|skill| !skill.name.trim().is_empty()).collect();
    if named.is_empty() {
        return;
    }
    blocks.push(style.section_title("Skills"));
    if style.skills_as_tags {
        let items = named
            .iter()
            .map(|skill| format!("{} · {}", skill.name.trim(), skill.level.label()))
            .collect();
        blocks.push(Block::Tags { items, color: style.accent });
    } else {
        let text = named.iter().map(|skill| skill.name.trim()).collect::<Vec<_>>().join(", ");
        blocks.push(Block::Paragraph { text });
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}
