mod app_state;
mod persistence;

pub use app_state::{AppState, ViewMode};
pub use persistence::{PersistenceBridge, PersistenceError, PersistenceResult};
