//! Blog API handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::domain::entities::Post;
use crate::AppState;

#[derive(Serialize)]
pub struct BlogsResponse {
    pub success: bool,
    pub total: usize,
    pub posts: Vec<Post>,
}

/// GET /api/blogs
///
/// All posts, newest first. Serves mock content when the CMS is not
/// configured or unreachable, so the shape is always the same.
pub async fn get_blogs(State(state): State<AppState>) -> Json<BlogsResponse> {
    let posts = state.content.all_posts().await;

    Json(BlogsResponse {
        success: true,
        total: posts.len(),
        posts,
    })
}
