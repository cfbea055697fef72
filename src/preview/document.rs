use crate::resume::{BackgroundColor, FontFamily};

/// An sRGB color, kept free of any UI toolkit type so documents can be compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLACK: Rgb = Rgb([17, 24, 39]);
    pub const TEXT: Rgb = Rgb([55, 65, 81]);
    pub const MUTED: Rgb = Rgb([107, 114, 128]);
    pub const RULE: Rgb = Rgb([209, 213, 219]);

    pub fn hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

impl Align {
    pub fn css(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
        }
    }
}

/// Page-wide styling resolved from the design choices.
#[derive(Debug, Clone, PartialEq)]
pub struct PageStyle {
    pub background: BackgroundColor,
    pub background_rgb: Rgb,
    pub font_family: FontFamily,
    /// Body text size in points at scale 1.0.
    pub base_size: f32,
}

impl PageStyle {
    pub fn name_size(&self) -> f32 {
        self.base_size * 2.0
    }

    pub fn headline_size(&self) -> f32 {
        self.base_size * 1.15
    }

    pub fn section_size(&self) -> f32 {
        self.base_size * 1.2
    }

    pub fn small_size(&self) -> f32 {
        self.base_size * 0.85
    }
}

/// One vertical piece of a rendered resume.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Name { text: String, align: Align, color: Rgb },
    Headline { text: String, align: Align, color: Rgb },
    Contact { items: Vec<String>, align: Align },
    SectionTitle { text: String, color: Rgb, rule: bool },
    Paragraph { text: String },
    Entry(EntryBlock),
    Tags { items: Vec<String>, color: Rgb },
    Divider,
}

/// A dated item (job, degree) with an optional body.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryBlock {
    pub title: String,
    pub subtitle: String,
    pub dates: String,
    pub detail: String,
    pub body: String,
}

/// The output of [`super::render_resume`]: everything needed to paint or
/// export the page, and nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewDocument {
    pub page: PageStyle,
    pub blocks: Vec<Block>,
}
