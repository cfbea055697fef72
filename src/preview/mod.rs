//! Resume preview: a pure layout step ([`render_resume`]) producing a
//! [`PreviewDocument`], painted on screen by [`show_document`] or exported
//! for printing with [`PreviewDocument::to_html`].

mod document;
mod html;
mod layout;
mod paint;

pub use document::{Align, Block, EntryBlock, PageStyle, PreviewDocument, Rgb};
pub use layout::render_resume;
pub use paint::show_document;
