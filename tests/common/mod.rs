#![allow(dead_code)]

use std::collections::HashMap;

/// In-memory stand-in for eframe's storage (localStorage on the web).
#[derive(Debug, Default)]
pub struct MemoryStorage {
    pub values: HashMap<String, String>,
    pub writes: Vec<String>,
    pub flushes: usize,
}

impl MemoryStorage {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        let mut storage = Self::default();
        for (key, value) in entries {
            storage.values.insert((*key).to_owned(), (*value).to_owned());
        }
        storage
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl eframe::Storage for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.writes.push(key.to_owned());
        self.values.insert(key.to_owned(), value);
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}

/// Drives a piece of UI headlessly with real pointer and keyboard input.
///
/// Widgets are located by the text they paint, so tests click what a user
/// would see.
pub struct UiDriver {
    ctx: egui::Context,
    shapes: Vec<egui::epaint::ClippedShape>,
    time: f64,
}

impl UiDriver {
    pub fn new() -> Self {
        Self { ctx: egui::Context::default(), shapes: Vec::new(), time: 0.0 }
    }

    /// Run one frame with `events`, keeping the painted shapes for lookups.
    pub fn frame(&mut self, events: Vec<egui::Event>, add: &mut dyn FnMut(&mut egui::Ui)) {
        self.time += 1.0 / 60.0;
        let input = egui::RawInput { events, time: Some(self.time), ..Default::default() };
        let output = self.ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| add(ui));
        });
        self.shapes = output.shapes;
    }

    /// A few idle frames so grids and collapsing headers settle their layout.
    pub fn settle(&mut self, add: &mut dyn FnMut(&mut egui::Ui)) {
        for _ in 0..3 {
            self.frame(Vec::new(), add);
        }
    }

    /// Screen rects of every text run equal to `text`, top to bottom.
    pub fn text_rects(&self, text: &str) -> Vec<egui::Rect> {
        let mut rects = Vec::new();
        for clipped in &self.shapes {
            collect_text_rects(&clipped.shape, text, &mut rects);
        }
        rects.sort_by(|a, b| a.top().total_cmp(&b.top()));
        rects
    }

    /// The topmost rect painted with `text`; panics if none is on screen.
    pub fn text_rect(&self, text: &str) -> egui::Rect {
        match self.text_rects(text).first() {
            Some(rect) => *rect,
            None => panic!("no `{text}` painted in the last frame"),
        }
    }

    /// Press and release the primary button over the centre of `rect`.
    pub fn click(&mut self, rect: egui::Rect, add: &mut dyn FnMut(&mut egui::Ui)) {
        let pos = rect.center();
        let button = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        };
        self.frame(vec![egui::Event::PointerMoved(pos), button(true)], add);
        self.frame(vec![button(false)], add);
    }

    /// Send `text` to whichever widget holds keyboard focus.
    pub fn type_text(&mut self, text: &str, add: &mut dyn FnMut(&mut egui::Ui)) {
        self.frame(vec![egui::Event::Text(text.to_owned())], add);
    }
}

fn collect_text_rects(shape: &egui::Shape, text: &str, rects: &mut Vec<egui::Rect>) {
    match shape {
        egui::Shape::Text(text_shape) if text_shape.galley.text() == text => {
            rects.push(text_shape.galley.rect.translate(text_shape.pos.to_vec2()));
        }
        egui::Shape::Vec(shapes) => {
            for shape in shapes {
                collect_text_rects(shape, text, rects);
            }
        }
        _ => {}
    }
}
