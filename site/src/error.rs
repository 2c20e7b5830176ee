//! Unified error types for the Framelight site
//!
//! This module defines error types for each layer:
//! - `NotionError`: Notion CMS client errors
//! - `MailerError`: Resend email-provider client errors
//! - `SpotifyError`: Spotify API client errors
//! - `AppError`: Application layer errors (wraps the above for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Notion API client errors
#[derive(Debug, Error)]
pub enum NotionError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Unauthorized - invalid integration token")]
    Unauthorized,

    #[error("Rate limited")]
    RateLimited,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Email-provider (Resend) client errors
#[derive(Debug, Error)]
pub enum MailerError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The provider reported the contact as already present in the audience.
    #[error("Contact already subscribed")]
    AlreadySubscribed,
}

/// Spotify API client errors
#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Token exchange failed: {0}")]
    TokenExchange(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Notion error: {0}")]
    Notion(#[from] NotionError),

    #[error("Mailer error: {0}")]
    Mailer(#[from] MailerError),

    #[error("Spotify error: {0}")]
    Spotify(#[from] SpotifyError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream error: {0}")]
    BadGateway(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Notion(e) => {
                tracing::error!("Notion error: {}", e);
                match e {
                    NotionError::Unauthorized => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "Content service error", None)
                    }
                    NotionError::RateLimited => {
                        (StatusCode::TOO_MANY_REQUESTS, "Rate limited", None)
                    }
                    NotionError::Api { message, .. } => {
                        (StatusCode::BAD_GATEWAY, "Content service error", Some(message.clone()))
                    }
                    _ => (StatusCode::BAD_GATEWAY, "Content service error", None),
                }
            }
            AppError::Mailer(e) => {
                tracing::error!("Mailer error: {}", e);
                match e {
                    MailerError::AlreadySubscribed => (
                        StatusCode::CONFLICT,
                        "Already subscribed",
                        Some("This email is already subscribed".to_string()),
                    ),
                    _ => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Something went wrong. Please try again later.",
                        None,
                    ),
                }
            }
            AppError::Spotify(e) => {
                tracing::error!("Spotify error: {}", e);
                (StatusCode::BAD_GATEWAY, "Music service error", None)
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "Conflict", Some(msg.clone())),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
            AppError::BadGateway(msg) => {
                tracing::error!("Upstream error: {}", msg);
                (StatusCode::BAD_GATEWAY, "Upstream error", Some(msg.clone()))
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
