//! Gallery API handler

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::GalleryImage;
use crate::AppState;

#[derive(Deserialize, Default)]
pub struct GalleryQuery {
    pub limit: Option<usize>,
    pub featured: Option<String>,
}

#[derive(Serialize)]
pub struct GalleryResponse {
    pub success: bool,
    pub total: usize,
    pub images: Vec<GalleryImage>,
}

/// Loose boolean parsing for query parameters ("1", "true", "yes", "on").
fn parse_boolean(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Applies the featured filter, then the limit. A featured filter that
/// matches nothing falls back to the full set, so a site section asking
/// for highlights always has images to show.
fn select_images(all: Vec<GalleryImage>, query: &GalleryQuery) -> Vec<GalleryImage> {
    let mut images = if query.featured.as_deref().map(parse_boolean).unwrap_or(false) {
        let featured: Vec<GalleryImage> = all.iter().filter(|i| i.featured).cloned().collect();
        if featured.is_empty() {
            all
        } else {
            featured
        }
    } else {
        all
    };

    if let Some(limit) = query.limit {
        images.truncate(limit);
    }

    images
}

/// GET /api/gallery?limit=N&featured=true
pub async fn get_gallery(
    State(state): State<AppState>,
    Query(query): Query<GalleryQuery>,
) -> Json<GalleryResponse> {
    let all = state.content.gallery_images().await;
    let images = select_images(all, &query);

    Json(GalleryResponse {
        success: true,
        total: images.len(),
        images,
    })
}
