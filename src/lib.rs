#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod event;
pub mod fonts;
pub mod panels;
pub mod preview;
pub mod print;
pub mod resume;
pub mod state;

pub use app::ResumeApp;
pub use event::{AppEvent, EventBus};
pub use preview::{render_resume, PreviewDocument};
pub use print::{HostPrinter, PrintError, Printer};
pub use resume::{BackgroundColor, FontSettings, ResumeData, TemplateType};
pub use state::{AppState, PersistenceBridge, PersistenceError, ViewMode};
