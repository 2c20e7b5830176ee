use std::env;

/// Placeholder values shipped in the example env file. Treated as unset.
const NOTION_PLACEHOLDERS: &[&str] = &["your_notion_token_here", "your_notion_database_id_here"];

#[derive(Clone, Default)]
pub struct Config {
    pub notion_token: Option<String>,
    pub notion_posts_database_id: Option<String>,
    pub notion_gallery_database_id: Option<String>,
    pub notion_portfolio_database_id: Option<String>,
    pub resend_api_key: Option<String>,
    pub resend_audience_id: Option<String>,
    /// From address for outgoing mail
    pub resend_from: String,
    /// Address the contact form delivers to
    pub contact_recipient: Option<String>,
    pub spotify_client_id: Option<String>,
    pub spotify_client_secret: Option<String>,
    pub spotify_refresh_token: Option<String>,
    /// Canonical site URL (used in the RSS feed and sitemap)
    pub site_url: String,
    pub port: u16,
}

fn non_placeholder(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && !NOTION_PLACEHOLDERS.contains(&v.as_str()))
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            notion_token: non_placeholder("NOTION_TOKEN"),
            notion_posts_database_id: non_placeholder("NOTION_POSTS_DATABASE_ID"),
            notion_gallery_database_id: non_placeholder("NOTION_GALLERY_DATABASE_ID"),
            notion_portfolio_database_id: non_placeholder("NOTION_PORTFOLIO_DATABASE_ID"),
            resend_api_key: env::var("RESEND_API_KEY").ok(),
            resend_audience_id: env::var("RESEND_AUDIENCE_ID").ok(),
            resend_from: env::var("RESEND_FROM")
                .unwrap_or_else(|_| "Framelight <onboarding@resend.dev>".to_string()),
            contact_recipient: env::var("CONTACT_RECIPIENT").ok(),
            spotify_client_id: env::var("SPOTIFY_CLIENT_ID").ok(),
            spotify_client_secret: env::var("SPOTIFY_CLIENT_SECRET").ok(),
            spotify_refresh_token: env::var("SPOTIFY_REFRESH_TOKEN").ok(),
            site_url: env::var("SITE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Check if the Notion CMS is usable (token + posts database present)
    pub fn notion_configured(&self) -> bool {
        self.notion_token.is_some() && self.notion_posts_database_id.is_some()
    }

    /// Check if newsletter signups can be forwarded to Resend
    pub fn resend_configured(&self) -> bool {
        self.resend_api_key.is_some() && self.resend_audience_id.is_some()
    }

    /// Check if Spotify credentials are configured
    pub fn spotify_configured(&self) -> bool {
        self.spotify_client_id.is_some()
            && self.spotify_client_secret.is_some()
            && self.spotify_refresh_token.is_some()
    }
}
