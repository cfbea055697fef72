mod background_picker;
mod font_selector;
mod swatch_button;
mod template_selector;

pub use background_picker::BackgroundPicker;
pub use font_selector::FontSelector;
pub use swatch_button::SwatchButton;
pub use template_selector::TemplateSelector;
