use dsfr_ssr::config::DsfrConfig;
use dsfr_ssr::{routes, state};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();
    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) => tracing::debug!(error = %e, "no .env loaded"),
    }

    let config = DsfrConfig::from_env().expect("invalid configuration");
    let port = config.port;
    tracing::info!(
        mode = ?config.mode,
        preload_fonts = config.params.preload_fonts.len(),
        assets_base = %config.assets_base,
        "dsfr configuration loaded"
    );

    let app = routes::app(state::AppState::new(&config));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "dsfr-ssr listening");
    axum::serve(listener, app).await.expect("server failed");
}
