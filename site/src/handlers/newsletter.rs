//! Newsletter handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::AppState;

#[derive(Deserialize)]
pub struct SubscribeRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Serialize)]
pub struct SubscribeResponse {
    pub success: bool,
    pub message: String,
}

/// POST /api/newsletter
///
/// 400 on an invalid address, 409 when the address is already subscribed.
pub async fn subscribe(
    State(state): State<AppState>,
    Json(body): Json<SubscribeRequest>,
) -> Result<Json<SubscribeResponse>, AppError> {
    let message = state.newsletter.subscribe(&body.email).await?;

    Ok(Json(SubscribeResponse {
        success: true,
        message,
    }))
}

#[derive(Serialize)]
pub struct SubscriberCountResponse {
    pub count: usize,
    pub message: String,
}

/// GET /api/newsletter
pub async fn subscriber_count(State(state): State<AppState>) -> Json<SubscriberCountResponse> {
    let count = state.newsletter.subscriber_count();

    Json(SubscriberCountResponse {
        count,
        message: format!("{} subscribers", count),
    })
}
