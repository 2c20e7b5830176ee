//! Debug endpoints
//!
//! Inspection endpoints for diagnosing CMS wiring: whether credentials are
//! present, what a raw query returns, and how post slugs resolve. They never
//! expose secret values, only their presence.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::app::slugify;
use crate::AppState;

#[derive(Serialize)]
pub struct NotionDebugResponse {
    pub configured: bool,
    pub token_present: bool,
    pub posts_database_present: bool,
    pub gallery_database_present: bool,
    pub portfolio_database_present: bool,
    pub query_ok: bool,
    pub page_count: usize,
    pub property_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /api/debug/notion
pub async fn notion_status(State(state): State<AppState>) -> Json<NotionDebugResponse> {
    let config = &state.config;

    let (query_ok, page_count, property_names, error) = if state.content.configured() {
        match state.content.raw_posts().await {
            Ok(pages) => {
                let names = pages
                    .first()
                    .map(|page| page.property_names())
                    .unwrap_or_default();
                (true, pages.len(), names, None)
            }
            Err(err) => (false, 0, Vec::new(), Some(err.to_string())),
        }
    } else {
        (false, 0, Vec::new(), None)
    };

    Json(NotionDebugResponse {
        configured: state.content.configured(),
        token_present: config.notion_token.is_some(),
        posts_database_present: config.notion_posts_database_id.is_some(),
        gallery_database_present: config.notion_gallery_database_id.is_some(),
        portfolio_database_present: config.notion_portfolio_database_id.is_some(),
        query_ok,
        page_count,
        property_names,
        error,
    })
}

#[derive(Serialize)]
pub struct SlugEntry {
    pub title: String,
    pub stored_slug: String,
    pub computed_slug: String,
    pub matches: bool,
}

#[derive(Serialize)]
pub struct SlugReportResponse {
    pub success: bool,
    pub total: usize,
    pub slugs: Vec<SlugEntry>,
}

/// GET /api/debug/slugs
///
/// Compares each post's stored slug against the one derived from its title,
/// which is what the slug-based lookup falls back to.
pub async fn slug_report(State(state): State<AppState>) -> Json<SlugReportResponse> {
    let posts = state.content.all_posts().await;

    let slugs: Vec<SlugEntry> = posts
        .iter()
        .map(|post| {
            let computed = slugify(&post.title);
            SlugEntry {
                title: post.title.clone(),
                matches: computed == post.slug,
                stored_slug: post.slug.clone(),
                computed_slug: computed,
            }
        })
        .collect();

    Json(SlugReportResponse {
        success: true,
        total: slugs.len(),
        slugs,
    })
}
