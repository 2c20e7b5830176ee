//! Contact form handler

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::AppState;

#[derive(Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

/// POST /api/contact
pub async fn send_message(
    State(state): State<AppState>,
    Json(body): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    let message = state
        .contact
        .send(&body.name, &body.email, &body.message)
        .await?;

    Ok(Json(ContactResponse {
        success: true,
        message,
    }))
}
