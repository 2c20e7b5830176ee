//! RSS and sitemap handlers

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::render::{render_rss, render_sitemap};
use crate::AppState;

/// GET /feed.xml
pub async fn rss_feed(State(state): State<AppState>) -> Response {
    let posts = state.content.all_posts().await;
    let feed = render_rss(&state.config.site_url, &posts);

    (
        [
            (header::CONTENT_TYPE, "application/rss+xml; charset=utf-8"),
            (
                header::CACHE_CONTROL,
                "s-maxage=3600, stale-while-revalidate",
            ),
        ],
        feed,
    )
        .into_response()
}

/// GET /sitemap.xml
pub async fn sitemap(State(state): State<AppState>) -> Response {
    let posts = state.content.all_posts().await;
    let sitemap = render_sitemap(&state.config.site_url, &posts);

    ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], sitemap).into_response()
}
