// src/handlers/api.rs
use axum::Json;

use crate::models::{HealthCheckResponse, Section, SectionInfo};

pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Navigation model, in display order.
pub async fn list_sections() -> Json<Vec<SectionInfo>> {
    Json(Section::ALL.into_iter().map(SectionInfo::from).collect())
}
