use axum::extract::State;
use axum::response::Html;

use crate::error::ApiError;
use crate::state::AppState;

/// Serve the single-page application.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let path = state.static_dir.join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Ok(Html(html)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ApiError::NotFound(
            "User interface has not been built.".to_string(),
        )),
        Err(e) => Err(e.into()),
    }
}
