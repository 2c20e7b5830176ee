//! HTML page handlers
//!
//! Each handler fetches whatever content its page needs and hands it to the
//! matching renderer. Content fetches never fail outward; the service falls
//! back to the bundled mock content, so these handlers are infallible.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};

use crate::render::{
    render_about, render_blog_archive, render_blog_index, render_blog_post, render_contact,
    render_gallery, render_home, render_not_found, render_portfolio, render_portfolio_item,
    render_resume,
};
use crate::AppState;

/// GET /
pub async fn home(State(state): State<AppState>) -> Html<String> {
    let posts = state.content.all_posts().await;
    let gallery = state.content.gallery_images().await;
    Html(render_home(&posts, &gallery))
}

/// GET /about
pub async fn about() -> Html<String> {
    Html(render_about())
}

/// GET /resume
pub async fn resume() -> Html<String> {
    Html(render_resume())
}

/// GET /contact
pub async fn contact_page() -> Html<String> {
    Html(render_contact())
}

/// GET /blog
pub async fn blog_index(State(state): State<AppState>) -> Html<String> {
    let posts = state.content.all_posts().await;
    Html(render_blog_index(&posts))
}

/// GET /blog/archive
pub async fn blog_archive(State(state): State<AppState>) -> Html<String> {
    let posts = state.content.all_posts().await;
    Html(render_blog_archive(&posts))
}

/// GET /blog/:slug
pub async fn blog_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> (StatusCode, Html<String>) {
    match state.content.post_by_slug(&slug).await {
        Some(post) => (StatusCode::OK, Html(render_blog_post(&post))),
        None => (StatusCode::NOT_FOUND, Html(render_not_found())),
    }
}

/// GET /gallery
pub async fn gallery_page(State(state): State<AppState>) -> Html<String> {
    let images = state.content.gallery_images().await;
    Html(render_gallery(&images))
}

/// GET /portfolio
pub async fn portfolio_page(State(state): State<AppState>) -> Html<String> {
    let items = state.content.portfolio_items().await;
    Html(render_portfolio(&items))
}

/// GET /portfolio/:id
pub async fn portfolio_item_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> (StatusCode, Html<String>) {
    match state.content.portfolio_item(&id).await {
        Some(item) => (StatusCode::OK, Html(render_portfolio_item(&item))),
        None => (StatusCode::NOT_FOUND, Html(render_not_found())),
    }
}

/// Fallback for unknown routes
pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(render_not_found()))
}
