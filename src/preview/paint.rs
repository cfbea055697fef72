use egui::{Color32, Layout, RichText, Stroke};

use super::document::{Align, Block, EntryBlock, PreviewDocument, Rgb};
use crate::config::{PAGE_MARGIN, PAGE_WIDTH};
use crate::fonts;

fn color32(rgb: Rgb) -> Color32 {
    let [r, g, b] = rgb.0;
    Color32::from_rgb(r, g, b)
}

/// Per-paint settings shared by every block.
struct Painter {
    family: egui::FontFamily,
    scale: f32,
    base: f32,
    small: f32,
    name: f32,
    headline: f32,
    section: f32,
}

impl Painter {
    fn text(&self, text: &str, size: f32, color: Rgb) -> RichText {
        RichText::new(text)
            .size(size * self.scale)
            .color(color32(color))
            .family(self.family.clone())
    }
}

/// Paint `doc` as a page at `scale` (1.0 = full size).
pub fn show_document(ui: &mut egui::Ui, doc: &PreviewDocument, scale: f32) -> egui::Response {
    let page = &doc.page;
    let painter = Painter {
        family: fonts::resolve_family(ui.ctx(), page.font_family),
        scale,
        base: page.base_size,
        small: page.small_size(),
        name: page.name_size(),
        headline: page.headline_size(),
        section: page.section_size(),
    };

    egui::Frame::none()
        .fill(color32(page.background_rgb))
        .stroke(Stroke::new(1.0, Color32::from_gray(210)))
        .inner_margin(egui::Margin::same(PAGE_MARGIN * scale))
        .show(ui, |ui| {
            ui.set_width((PAGE_WIDTH - 2.0 * PAGE_MARGIN) * scale);
            ui.with_layout(Layout::top_down(egui::Align::Min), |ui| {
                ui.spacing_mut().item_spacing.y = 4.0 * scale;
                for block in &doc.blocks {
                    paint_block(ui, block, &painter);
                }
            });
        })
        .response
}

fn aligned(ui: &mut egui::Ui, align: Align, add: impl FnOnce(&mut egui::Ui)) {
    match align {
        Align::Left => add(ui),
        Align::Center => {
            ui.vertical_centered(add);
        }
    }
}

fn paint_block(ui: &mut egui::Ui, block: &Block, p: &Painter) {
    match block {
        Block::Name { text, align, color } => aligned(ui, *align, |ui| {
            ui.label(p.text(text, p.name, *color));
        }),
        Block::Headline { text, align, color } => aligned(ui, *align, |ui| {
            ui.label(p.text(text, p.headline, *color));
        }),
        Block::Contact { items, align } => aligned(ui, *align, |ui| {
            ui.label(p.text(&items.join("  |  "), p.small, Rgb::MUTED));
        }),
        Block::SectionTitle { text, color, rule } => {
            ui.add_space(10.0 * p.scale);
            let response = ui.label(p.text(text, p.section, *color));
            if *rule {
                let y = response.rect.bottom() + 2.0 * p.scale;
                let stroke = Stroke::new(2.0 * p.scale, color32(*color));
                ui.painter().hline(ui.max_rect().x_range(), y, stroke);
                ui.add_space(4.0 * p.scale);
            }
        }
        Block::Paragraph { text } => {
            ui.label(p.text(text, p.base, Rgb::TEXT));
        }
        Block::Entry(entry) => paint_entry(ui, entry, p),
        Block::Tags { items, color } => {
            ui.horizontal_wrapped(|ui| {
                for item in items {
                    egui::Frame::none()
                        .stroke(Stroke::new(1.0, color32(*color)))
                        .rounding(4.0 * p.scale)
                        .inner_margin(egui::Margin::symmetric(6.0 * p.scale, 2.0 * p.scale))
                        .show(ui, |ui| {
                            ui.label(p.text(item, p.small, *color));
                        });
                }
            });
        }
        Block::Divider => {
            let size = egui::vec2(ui.available_width(), 10.0 * p.scale);
            let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
            let stroke = Stroke::new(1.0, color32(Rgb::RULE));
            ui.painter().hline(rect.x_range(), rect.center().y, stroke);
        }
    }
}

fn paint_entry(ui: &mut egui::Ui, entry: &EntryBlock, p: &Painter) {
    ui.add_space(2.0 * p.scale);
    ui.horizontal(|ui| {
        ui.label(p.text(&entry.title, p.base * 1.05, Rgb::BLACK));
        if !entry.dates.is_empty() {
            ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(p.text(&entry.dates, p.small, Rgb::MUTED));
            });
        }
    });

    let meta: Vec<&str> = [entry.subtitle.as_str(), entry.detail.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
    if !meta.is_empty() {
        ui.label(p.text(&meta.join(" · "), p.small, Rgb::MUTED));
    }
    if !entry.body.is_empty() {
        ui.label(p.text(&entry.body, p.base, Rgb::TEXT));
    }
}
