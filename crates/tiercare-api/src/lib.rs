//! tiercare-api
//!
//! HTTP front for the scoring engine. Handlers translate JSON payloads into
//! engine calls and engine errors into status codes; no scoring happens here.

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/", get(routes::ui::index))
        .route(
            "/api/questionnaires",
            get(routes::questionnaires::list_questionnaires),
        )
        .route(
            "/api/questionnaires/{name}",
            get(routes::questionnaires::get_questionnaire),
        )
        .route("/api/assessments/phq4", post(routes::assessments::assess_phq4))
        .route("/api/assessments/phq9", post(routes::assessments::assess_phq9))
        .route("/api/assessments/gad7", post(routes::assessments::assess_gad7))
        .route(
            "/api/assessments/cssrs",
            post(routes::assessments::assess_cssrs),
        )
        .route(
            "/api/assessments/tier",
            post(routes::assessments::determine_tier),
        )
        .route(
            "/api/assessments/summary",
            post(routes::assessments::summarize),
        )
        .nest_service("/static", static_files)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
