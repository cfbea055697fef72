use serde::{Deserialize, Serialize};

/// Visual layout applied to the same [`super::ResumeData`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateType {
    #[default]
    Modern,
    Classic,
    Minimal,
    Creative,
}

impl TemplateType {
    pub const ALL: [TemplateType; 4] = [
        TemplateType::Modern,
        TemplateType::Classic,
        TemplateType::Minimal,
        TemplateType::Creative,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TemplateType::Modern => "Modern",
            TemplateType::Classic => "Classic",
            TemplateType::Minimal => "Minimal",
            TemplateType::Creative => "Creative",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TemplateType::Modern => "Clean layout with blue accents",
            TemplateType::Classic => "Centered, traditional headings",
            TemplateType::Minimal => "Plain text, no decoration",
            TemplateType::Creative => "Bold purple accents, skills first",
        }
    }
}

/// Typography for the preview and the printed page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSettings {
    pub family: FontFamily,
    pub size: FontSize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    #[serde(rename = "font-inter")]
    Inter,
    #[serde(rename = "font-georgia")]
    Georgia,
    #[serde(rename = "font-roboto")]
    Roboto,
    #[serde(rename = "font-opensans")]
    OpenSans,
    #[serde(rename = "font-lato")]
    Lato,
    #[serde(rename = "font-merriweather")]
    Merriweather,
}

impl FontFamily {
    pub const ALL: [FontFamily; 6] = [
        FontFamily::Inter,
        FontFamily::Georgia,
        FontFamily::Roboto,
        FontFamily::OpenSans,
        FontFamily::Lato,
        FontFamily::Merriweather,
    ];

    /// The tag stored in `fontSettings`, also used as the egui family name.
    pub fn class_name(self) -> &'static str {
        match self {
            FontFamily::Inter => "font-inter",
            FontFamily::Georgia => "font-georgia",
            FontFamily::Roboto => "font-roboto",
            FontFamily::OpenSans => "font-opensans",
            FontFamily::Lato => "font-lato",
            FontFamily::Merriweather => "font-merriweather",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FontFamily::Inter => "Inter",
            FontFamily::Georgia => "Georgia",
            FontFamily::Roboto => "Roboto",
            FontFamily::OpenSans => "Open Sans",
            FontFamily::Lato => "Lato",
            FontFamily::Merriweather => "Merriweather",
        }
    }

    /// CSS `font-family` stack used by the HTML export.
    pub fn css_stack(self) -> &'static str {
        match self {
            FontFamily::Inter => "'Inter', sans-serif",
            FontFamily::Georgia => "Georgia, serif",
            FontFamily::Roboto => "'Roboto', sans-serif",
            FontFamily::OpenSans => "'Open Sans', sans-serif",
            FontFamily::Lato => "'Lato', sans-serif",
            FontFamily::Merriweather => "'Merriweather', serif",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Small, FontSize::Medium, FontSize::Large];

    pub fn label(self) -> &'static str {
        match self {
            FontSize::Small => "Small",
            FontSize::Medium => "Medium",
            FontSize::Large => "Large",
        }
    }

    /// Body text size in points.
    pub fn base_points(self) -> f32 {
        match self {
            FontSize::Small => 12.0,
            FontSize::Medium => 14.0,
            FontSize::Large => 16.0,
        }
    }
}

/// Name of a CSS background class, e.g. `bg-white`.
///
/// Free-form: any string is accepted and kept verbatim. Classes outside
/// [`BACKGROUND_PRESETS`] render as white. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BackgroundColor(pub String);

impl BackgroundColor {
    pub fn new(class: impl Into<String>) -> Self {
        Self(class.into())
    }

    pub fn class_name(&self) -> &str {
        &self.0
    }

    pub fn preset(&self) -> Option<&'static BackgroundPreset> {
        BACKGROUND_PRESETS.iter().find(|preset| preset.class == self.0)
    }

    pub fn rgb(&self) -> [u8; 3] {
        self.preset().map_or([255, 255, 255], |preset| preset.rgb)
    }
}

impl Default for BackgroundColor {
    fn default() -> Self {
        Self::new("bg-white")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundPreset {
    pub class: &'static str,
    pub label: &'static str,
    pub rgb: [u8; 3],
}

/// Choices offered by the background picker (Tailwind shade values).
pub static BACKGROUND_PRESETS: [BackgroundPreset; 8] = [
    BackgroundPreset { class: "bg-white", label: "White", rgb: [255, 255, 255] },
    BackgroundPreset { class: "bg-gray-50", label: "Light Gray", rgb: [249, 250, 251] },
    BackgroundPreset { class: "bg-blue-50", label: "Light Blue", rgb: [239, 246, 255] },
    BackgroundPreset { class: "bg-green-50", label: "Light Green", rgb: [240, 253, 244] },
    BackgroundPreset { class: "bg-yellow-50", label: "Cream", rgb: [254, 252, 232] },
    BackgroundPreset { class: "bg-purple-50", label: "Lavender", rgb: [250, 245, 255] },
    BackgroundPreset { class: "bg-pink-50", label: "Blush", rgb: [253, 242, 248] },
    BackgroundPreset { class: "bg-slate-100", label: "Slate", rgb: [241, 245, 249] },
];
