// src/handlers/web.rs
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{StatusCode, Uri},
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::models::{Section, SectionSelector};
use crate::templates;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PortfolioQuery {
    pub section: Option<String>,
}

/// Single-page portfolio. `?section=<id>` picks the visible block.
pub async fn portfolio(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PortfolioQuery>, QueryRejection>,
) -> Html<String> {
    let mut selector = SectionSelector::new();

    // A malformed query string (e.g. a repeated key) leaves the default selected
    let requested = match query {
        Ok(Query(query)) => query.section,
        Err(rejection) => {
            tracing::debug!("Ignoring section query: {}", rejection);
            None
        }
    };

    if let Some(requested) = requested.as_deref() {
        match requested.parse::<Section>() {
            Ok(section) => {
                selector.select(section);
            }
            Err(e) => tracing::debug!("Ignoring section selection: {}", e),
        }
    }

    let key = format!("portfolio:{}", selector.active());
    let page = state
        .cache
        .page_or_render(key, || templates::portfolio::render(&selector))
        .await;

    Html(page)
}

async fn section_page(state: &AppState, section: Section) -> Html<String> {
    let key = format!("route:{}", section.path());
    let page = state
        .cache
        .page_or_render(key, || templates::render_section(section))
        .await;

    Html(page)
}

pub async fn about(State(state): State<Arc<AppState>>) -> Html<String> {
    section_page(&state, Section::About).await
}

pub async fn tech(State(state): State<Arc<AppState>>) -> Html<String> {
    section_page(&state, Section::Tech).await
}

pub async fn arts(State(state): State<Arc<AppState>>) -> Html<String> {
    section_page(&state, Section::Arts).await
}

pub async fn volunteering(State(state): State<Arc<AppState>>) -> Html<String> {
    section_page(&state, Section::Volunteering).await
}

pub async fn contact(State(state): State<Arc<AppState>>) -> Html<String> {
    section_page(&state, Section::Contact).await
}

pub async fn not_found(uri: Uri) -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(templates::not_found::render(uri.path())),
    )
}
