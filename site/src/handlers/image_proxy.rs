//! Image proxy
//!
//! CMS-hosted images live behind expiring signed URLs; this endpoint fetches
//! them server-side so pages can embed a stable same-origin URL.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::warn;

use crate::error::AppError;
use crate::AppState;

const USER_AGENT: &str = "framelight-site/0.1 (image proxy)";
const DEFAULT_CACHE_CONTROL: &str = "public, max-age=3600";

#[derive(Deserialize)]
pub struct ImageProxyQuery {
    pub url: Option<String>,
}

/// GET /api/image-proxy?url=...
///
/// 400 for a missing or non-http(s) URL, 502 when the upstream fetch fails.
pub async fn image_proxy(
    State(state): State<AppState>,
    Query(query): Query<ImageProxyQuery>,
) -> Result<Response, AppError> {
    let url = query
        .url
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("missing url parameter".to_string()))?;

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(AppError::BadRequest(
            "url must be http or https".to_string(),
        ));
    }

    let upstream = state
        .http
        .get(url)
        .header(header::USER_AGENT, USER_AGENT)
        .send()
        .await
        .map_err(|err| {
            warn!(error = %err, "image fetch failed");
            AppError::BadGateway("failed to fetch image".to_string())
        })?;

    if !upstream.status().is_success() {
        warn!(status = %upstream.status(), "upstream returned an error for proxied image");
        return Err(AppError::BadGateway(format!(
            "upstream returned {}",
            upstream.status()
        )));
    }

    let mut headers = HeaderMap::new();
    if let Some(content_type) = upstream.headers().get(header::CONTENT_TYPE) {
        headers.insert(header::CONTENT_TYPE, content_type.clone());
    }
    let cache_control = upstream
        .headers()
        .get(header::CACHE_CONTROL)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CACHE_CONTROL));
    headers.insert(header::CACHE_CONTROL, cache_control);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );

    let body = upstream.bytes().await.map_err(|err| {
        warn!(error = %err, "image body read failed");
        AppError::BadGateway("failed to read image body".to_string())
    })?;

    Ok((StatusCode::OK, headers, body).into_response())
}
