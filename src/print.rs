//! Handing the finished resume to the host's print mechanism.

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::preview::PreviewDocument;

#[derive(Debug, Error)]
pub enum PrintError {
    #[error("Failed to write print export: {0}")]
    Io(#[from] std::io::Error),

    #[error("No browser window to print from")]
    NoWindow,

    #[error("Host print failed: {0}")]
    Host(String),
}

/// Something that can put a rendered resume in front of a print dialog.
///
/// Fire-and-forget: success only means the request was handed over.
pub trait Printer {
    fn print(&mut self, document: &PreviewDocument) -> Result<(), PrintError>;
}

/// The platform's own print path.
///
/// On the web this is `window.print()`. Natively the page is written out as
/// HTML and opened with the system handler, whose print dialog takes over.
#[derive(Debug, Default)]
pub struct HostPrinter;

impl Printer for HostPrinter {
    #[cfg(target_arch = "wasm32")]
    fn print(&mut self, _document: &PreviewDocument) -> Result<(), PrintError> {
        let window = web_sys::window().ok_or(PrintError::NoWindow)?;
        window.print().map_err(|err| PrintError::Host(format!("{err:?}")))?;
        log::info!("Opened browser print dialog");
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn print(&mut self, document: &PreviewDocument) -> Result<(), PrintError> {
        let dir = std::env::temp_dir().join(crate::config::EXPORT_DIR);
        let path = export_html(document, &dir)?;
        open::that(&path)?;
        log::info!("Opened {} for printing", path.display());
        Ok(())
    }
}

/// Write `document` as HTML into `dir`, creating it if needed. Returns the file path.
#[cfg(not(target_arch = "wasm32"))]
pub fn export_html(document: &PreviewDocument, dir: &Path) -> Result<PathBuf, PrintError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(crate::config::EXPORT_FILE_NAME);
    std::fs::write(&path, document.to_html())?;
    Ok(path)
}
