//! Framelight site server
//!
//! A photography portfolio and blog backed by a Notion CMS, with newsletter
//! and contact delivery over Resend and a Spotify now-playing widget. Uses
//! hexagonal (ports & adapters) architecture: every external service sits
//! behind a port trait, and every content fetch degrades to bundled mock
//! data so the site renders even with no credentials at all.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod render;

#[cfg(test)]
mod test_utils;


use adapters::{NotionHttpClient, ResendClient, SpotifyClient};
use app::{ContactService, ContentService, ContentSources, NewsletterService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentService<NotionHttpClient>>,
    pub newsletter: Arc<NewsletterService<ResendClient>>,
    pub contact: Arc<ContactService<ResendClient>>,
    pub music: Option<Arc<SpotifyClient>>,
    pub http: reqwest::Client,
    pub config: Config,
}

/// Wire adapters and services from a config. Unset credentials leave the
/// matching service in its degraded mode (mock content, demo subscriptions,
/// "not playing"), never a startup failure.
pub fn build_state(config: Config) -> AppState {
    let notion = Arc::new(NotionHttpClient::new(
        config.notion_token.clone().unwrap_or_default(),
    ));
    let content = Arc::new(ContentService::new(
        notion,
        ContentSources {
            posts: config.notion_posts_database_id.clone(),
            gallery: config.notion_gallery_database_id.clone(),
            portfolio: config.notion_portfolio_database_id.clone(),
        },
        config.notion_configured(),
    ));

    let mailer = Arc::new(ResendClient::new(
        config.resend_api_key.clone().unwrap_or_default(),
        config.resend_from.clone(),
    ));
    let newsletter = Arc::new(NewsletterService::new(
        mailer.clone(),
        config
            .resend_configured()
            .then(|| config.resend_audience_id.clone())
            .flatten(),
    ));
    let contact = Arc::new(ContactService::new(
        mailer,
        config
            .resend_api_key
            .is_some()
            .then(|| config.contact_recipient.clone())
            .flatten(),
    ));

    let music = config.spotify_configured().then(|| {
        Arc::new(SpotifyClient::new(
            config.spotify_client_id.clone().unwrap_or_default(),
            config.spotify_client_secret.clone().unwrap_or_default(),
            config.spotify_refresh_token.clone().unwrap_or_default(),
        ))
    });

    AppState {
        content,
        newsletter,
        contact,
        music,
        http: reqwest::Client::new(),
        config,
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Everything except the rate-limited form endpoints. Split out so tests can
/// mount it without the governor layer, which needs peer socket info.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health))
        // HTML pages
        .route("/", get(handlers::home))
        .route("/about", get(handlers::about))
        .route("/resume", get(handlers::resume))
        .route("/contact", get(handlers::contact_page))
        .route("/blog", get(handlers::blog_index))
        .route("/blog/archive", get(handlers::blog_archive))
        .route("/blog/:slug", get(handlers::blog_post))
        .route("/gallery", get(handlers::gallery_page))
        .route("/portfolio", get(handlers::portfolio_page))
        .route("/portfolio/:id", get(handlers::portfolio_item_page))
        // Feeds
        .route("/feed.xml", get(handlers::rss_feed))
        .route("/sitemap.xml", get(handlers::sitemap))
        // JSON API
        .route("/api/blogs", get(handlers::get_blogs))
        .route("/api/gallery", get(handlers::get_gallery))
        .route("/api/newsletter", get(handlers::subscriber_count))
        .route("/api/spotify/now-playing", get(handlers::now_playing))
        .route("/api/image-proxy", get(handlers::image_proxy))
        // Debug endpoints
        .route("/api/debug/notion", get(handlers::notion_status))
        .route("/api/debug/slugs", get(handlers::slug_report))
        .fallback(handlers::not_found)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,framelight_site=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Framelight site...");

    let config = Config::from_env();
    if !config.notion_configured() {
        tracing::warn!("Notion credentials missing, serving mock content");
    }

    let port = config.port;
    let state = build_state(config);

    // Rate limiting for the form endpoints: 2 req/sec sustained, burst of 5.
    // Uses PeerIpKeyExtractor to get the client IP from the socket connection
    // (SmartIpKeyExtractor requires X-Forwarded-For headers from a proxy).
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .expect("Failed to build governor config"),
    );

    let rate_limited_routes = Router::new()
        .route("/api/newsletter", post(handlers::subscribe))
        .route("/api/contact", post(handlers::send_message))
        .layer(GovernorLayer {
            config: governor_config,
        });

    let app = public_routes()
        .merge(rate_limited_routes)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Server error");
}
