// src/routes.rs
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::handlers::{api, web};
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        // ==================
        // SINGLE-PAGE VIEW
        // ==================
        .route("/", get(web::portfolio))
        // ==================
        // SECTION ROUTES
        // ==================
        .route("/about", get(web::about))
        .route("/tech", get(web::tech))
        .route("/arts", get(web::arts))
        .route("/volunteering", get(web::volunteering))
        .route("/contact", get(web::contact))
        // ==================
        // API ROUTES
        // ==================
        .route("/api/health", get(api::health_check))
        .route("/api/sections", get(api::list_sections))
        // Static files
        .nest_service("/static", ServeDir::new(&static_dir))
        .nest_service("/images", ServeDir::new(static_dir.join("images")))
        .fallback(web::not_found)
        // Rejections from attack_prevention still pass through security_headers
        .layer(axum::middleware::from_fn(
            crate::middleware::security::attack_prevention,
        ))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::security::security_headers,
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
