use eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use tiercare_api::config::{Config, LogFormat};
use tiercare_api::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = Config::from_env()?;

    let subscriber = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());
    match config.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
    }

    if !config.static_dir.join("index.html").exists() {
        tracing::warn!(
            static_dir = %config.static_dir.display(),
            "no index.html found; the UI route will return 404"
        );
    }

    let state = AppState {
        static_dir: config.static_dir.clone(),
    };
    let app = tiercare_api::app(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .wrap_err_with(|| format!("failed to bind {}", config.bind))?;
    tracing::info!(addr = %config.bind, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
}
