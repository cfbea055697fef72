//! Compile-time configuration shared by the native and web entry points.

/// Window title, and the directory name eframe persists native storage under.
pub const APP_NAME: &str = "Resume Editor";

/// Storage key holding the serialized [`crate::resume::ResumeData`].
pub const RESUME_DATA_KEY: &str = "resumeData";

/// Storage key holding the serialized [`crate::resume::FontSettings`].
pub const FONT_SETTINGS_KEY: &str = "fontSettings";

pub const WINDOW_INNER_SIZE: [f32; 2] = [1280.0, 860.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [900.0, 600.0];

/// Width of a US Letter page at 96 dpi, in points at scale 1.0.
pub const PAGE_WIDTH: f32 = 816.0;

/// Page padding at scale 1.0 (0.5in).
pub const PAGE_MARGIN: f32 = 48.0;

/// Scale of the preview shown next to the editor.
pub const LIVE_PREVIEW_SCALE: f32 = 0.75;

/// Directory (under the system temp dir) and file the native print export goes to.
pub const EXPORT_DIR: &str = "resume-editor";
pub const EXPORT_FILE_NAME: &str = "resume.html";
