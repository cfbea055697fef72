use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::document::{Block, EntryBlock, PageStyle, PreviewDocument};
use crate::config::APP_NAME;

const WEB_FONTS: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700\
    &family=Roboto:wght@300;400;500;700&family=Open+Sans:wght@300;400;600;700\
    &family=Lato:wght@300;400;700&family=Merriweather:wght@300;400;700&display=swap";

impl PreviewDocument {
    /// A standalone, print-ready HTML page for this document.
    ///
    /// Output depends only on the document, so equal documents export to
    /// identical bytes. All resume text is escaped by `maud`.
    pub fn to_html(&self) -> String {
        let page = &self.page;
        let background = css_class(page.background.class_name());
        let font_class = page.font_family.class_name();

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    title { (APP_NAME) }
                    link rel="stylesheet" href=(WEB_FONTS);
                    style { (PreEscaped(stylesheet(page, &background))) }
                }
                body {
                    div class={ "print-content " (background) " " (font_class) } {
                        @for block in &self.blocks {
                            (block_markup(block))
                        }
                    }
                }
            }
        };
        markup.into_string()
    }
}

/// `background` must already be reduced to a valid class name.
fn stylesheet(page: &PageStyle, background: &str) -> String {
    format!(
        "@page {{ margin: 0.5in; }}\n\
         body {{ margin: 0; font-family: {family}; font-size: {base}px; color: #374151; }}\n\
         .{background} {{ background: {fill}; max-width: 8.5in; margin: 0 auto; \
         padding: 0.5in; box-sizing: border-box; }}\n\
         h1 {{ font-size: {name}px; margin: 0; }}\n\
         h2 {{ font-size: {section}px; margin: 1.2em 0 0.4em; }}\n\
         .headline {{ margin: 0.2em 0; }}\n\
         .contact, .detail {{ font-size: {small}px; color: #6b7280; }}\n\
         .entry {{ margin-bottom: 0.8em; }}\n\
         .entry-head {{ display: flex; justify-content: space-between; }}\n\
         .tag {{ display: inline-block; padding: 2px 8px; margin: 2px; border-radius: 4px; }}\n\
         hr {{ border: 0; border-top: 1px solid #d1d5db; }}\n",
        family = page.font_family.css_stack(),
        base = page.base_size,
        fill = page.background_rgb.hex(),
        name = page.name_size(),
        section = page.section_size(),
        small = page.small_size(),
    )
}

fn block_markup(block: &Block) -> Markup {
    match block {
        Block::Name { text, align, color } => html! {
            h1 style={ "text-align: " (align.css()) "; color: " (color.hex()) } { (text) }
        },
        Block::Headline { text, align, color } => html! {
            p.headline style={ "text-align: " (align.css()) "; color: " (color.hex()) } { (text) }
        },
        Block::Contact { items, align } => html! {
            p.contact style={ "text-align: " (align.css()) } { (items.join(" | ")) }
        },
        Block::SectionTitle { text, color, rule } => {
            let style = if *rule {
                format!("color: {0}; border-bottom: 2px solid {0}", color.hex())
            } else {
                format!("color: {}", color.hex())
            };
            html! { h2 style=(style) { (text) } }
        }
        Block::Paragraph { text } => html! { p { (text) } },
        Block::Entry(entry) => entry_markup(entry),
        Block::Tags { items, color } => {
            let style = format!("border: 1px solid {0}; color: {0}", color.hex());
            html! {
                div.tags {
                    @for item in items {
                        span.tag style=(style) { (item) }
                    }
                }
            }
        }
        Block::Divider => html! { hr; },
    }
}

fn entry_markup(entry: &EntryBlock) -> Markup {
    let meta: Vec<&str> = [entry.subtitle.as_str(), entry.detail.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();

    html! {
        div.entry {
            div.entry-head {
                strong { (entry.title) }
                @if !entry.dates.is_empty() {
                    span.detail { (entry.dates) }
                }
            }
            @if !meta.is_empty() {
                div.detail { (meta.join(" · ")) }
            }
            @if !entry.body.is_empty() {
                p { (entry.body) }
            }
        }
    }
}

/// Background classes are free-form and also land in the stylesheet, which
/// is not escaped; keep only characters valid in a CSS class.
fn css_class(class: &str) -> String {
    class
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}
