use std::path::PathBuf;

/// Shared application state, injected into route handlers via Axum state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Directory holding the built single-page UI.
    pub static_dir: PathBuf,
}
