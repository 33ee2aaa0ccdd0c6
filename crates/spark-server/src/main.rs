mod config;

use std::sync::Arc;

use axum::{Router, response::Html, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use spark_api::auth::{AppState, AppStateInner};
use spark_api::routes::build_router;

use crate::config::ServerConfig;

const CHAT_PAGE: &str = include_str!("../static/chat.html");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spark=debug,spark_api=debug,spark_db=info,tower_http=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.addr()?;

    let db = spark_db::Database::open(&config.db_path)?;
    let state: AppState = Arc::new(AppStateInner { db });

    let app = Router::new()
        .merge(build_router(state))
        .route("/ui/chat", get(chat_page))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    info!("Spark server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn chat_page() -> Html<&'static str> {
    Html(CHAT_PAGE)
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(sigterm) => sigterm,
                Err(e) => {
                    tracing::warn!("SIGTERM handler unavailable: {}", e);
                    ctrl_c.await.ok();
                    info!("Received Ctrl+C, shutting down...");
                    return;
                }
            };
        tokio::select! {
            _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
