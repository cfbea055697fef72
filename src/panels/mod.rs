mod design_panel;
mod editor_panel;
mod header_panel;
mod preview_panel;

pub use design_panel::design_panel;
pub use editor_panel::editor_panel;
pub use header_panel::header_panel;
pub use preview_panel::preview_panel;
