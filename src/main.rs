// src/main.rs
mod config;
mod handlers;
mod middleware;
mod models;
mod routes;
mod templates;

use crate::config::Config;
use crate::middleware::cache::CacheService;
use crate::routes::create_router;
use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub cache: CacheService,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env first so RUST_LOG can come from it
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .with_level(true)
        .with_line_number(true)
        .init();

    tracing::info!("🚀 Starting portfolio server...");

    let config = Config::from_env().context("failed to load configuration")?;
    let addr = config.server_addr()?;

    if !config.static_dir.is_dir() {
        tracing::warn!(
            "Static directory {} not found; stylesheet and images will 404",
            config.static_dir.display()
        );
    }

    let state = Arc::new(AppState {
        cache: CacheService::new(config.page_cache_ttl),
        config: config.clone(),
    });

    let app = create_router(state);

    tracing::info!("✅ Portfolio listening on {}", addr);
    tracing::info!("🌐 Single page: http://{}/", addr);
    tracing::info!("📁 Static assets: {}", config.static_dir.display());
    tracing::info!("🗄  Page cache TTL: {}s", config.page_cache_ttl.as_secs());
    if config.enable_hsts {
        tracing::info!("🔒 HSTS enabled");
    }

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
