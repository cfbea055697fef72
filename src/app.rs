use crate::config::LIVE_PREVIEW_SCALE;
use crate::event::{AppEvent, EventBus};
use crate::fonts;
use crate::panels::{design_panel, editor_panel, header_panel, preview_panel};
use crate::preview::render_resume;
use crate::print::{HostPrinter, Printer};
use crate::state::{AppState, PersistenceBridge, PersistenceResult, ViewMode};

/// The app shell: sole owner of the state, composes the panels, and keeps
/// storage in step after each frame.
pub struct ResumeApp {
    state: AppState,
    persistence: PersistenceBridge,
    bus: EventBus,
    printer: Box<dyn Printer>,
}

impl std::fmt::Debug for ResumeApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResumeApp")
            .field("state", &self.state)
            .field("bus", &self.bus)
            .finish_non_exhaustive()
    }
}

impl ResumeApp {
    /// Called once before the first frame.
    ///
    /// Fails if a stored value can't be read back; eframe reports that
    /// instead of starting with silently reset data.
    pub fn new(cc: &eframe::CreationContext<'_>) -> PersistenceResult<Self> {
        fonts::install_font_families(&cc.egui_ctx);
        Self::from_storage(cc.storage)
    }

    pub fn from_storage(storage: Option<&dyn eframe::Storage>) -> PersistenceResult<Self> {
        let (state, persistence) = PersistenceBridge::hydrate(storage)?;
        Ok(Self {
            state,
            persistence,
            bus: EventBus::new(),
            printer: Box::new(HostPrinter),
        })
    }

    pub fn with_printer(mut self, printer: impl Printer + 'static) -> Self {
        self.printer = Box::new(printer);
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Apply everything emitted this frame, in order.
    pub fn handle_events(&mut self) {
        for event in self.bus.drain() {
            match event {
                AppEvent::PrintRequested => self.print(),
                event => self.state.apply(event),
            }
        }
    }

    /// Write through any persisted slice that changed since the last write.
    pub fn persist(&mut self, storage: &mut dyn eframe::Storage) {
        if let Err(err) = self.persistence.sync(storage, &self.state) {
            log::error!("Failed to persist state: {err}");
        }
    }

    fn print(&mut self) {
        let document = render_resume(
            &self.state.resume_data,
            self.state.template,
            &self.state.background_color,
            &self.state.font_settings,
        );
        if let Err(err) = self.printer.print(&document) {
            log::error!("Print failed: {err}");
        }
    }

    fn edit_view(&self, ctx: &egui::Context) {
        egui::SidePanel::left("editor_side_panel")
            .resizable(true)
            .default_width(460.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.heading("Design Options");
                    ui.separator();
                    design_panel(ui, &self.state, &self.bus);

                    ui.add_space(12.0);
                    ui.heading("Edit Resume");
                    ui.separator();
                    editor_panel(ui, &self.state.resume_data, &self.bus);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Live Preview");
            ui.separator();
            preview_panel(ui, &self.state, LIVE_PREVIEW_SCALE);
        });
    }

    fn preview_view(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            preview_panel(ui, &self.state, 1.0);
        });
    }
}

impl eframe::App for ResumeApp {
    /// Called by the framework on its save interval and at shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.persist(storage);
    }

    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        header_panel(ctx, &self.state, &self.bus);

        match self.state.view_mode {
            ViewMode::Edit => self.edit_view(ctx),
            ViewMode::Preview => self.preview_view(ctx),
        }

        let had_events = !self.bus.is_empty();
        self.handle_events();
        if let Some(storage) = frame.storage_mut() {
            self.persist(storage);
        }
        if had_events {
            ctx.request_repaint();
        }
    }
}
