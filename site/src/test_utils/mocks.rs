//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured per test. They record
//! calls so tests can verify behavior without any network.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{Mailer, MusicApi, NotionApi, NotionPage, TrackInfo};
use crate::error::{MailerError, NotionError, SpotifyError};

// ============================================================================
// In-Memory Notion API
// ============================================================================

/// CMS mock serving canned pages per database id. When `fail` is set every
/// query returns an API error, for exercising the mock-content fallback.
#[derive(Default)]
pub struct MockNotionApi {
    databases: HashMap<String, Vec<NotionPage>>,
    fail: bool,
}

impl MockNotionApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a database with pages
    pub fn with_database(mut self, database_id: &str, pages: Vec<NotionPage>) -> Self {
        self.databases.insert(database_id.to_string(), pages);
        self
    }

    /// Make every query fail
    pub fn failing() -> Self {
        Self {
            databases: HashMap::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl NotionApi for MockNotionApi {
    async fn query_database(
        &self,
        database_id: &str,
        _sort_by_date_desc: bool,
    ) -> Result<Vec<NotionPage>, NotionError> {
        if self.fail {
            return Err(NotionError::Api {
                status: 500,
                message: "mock failure".to_string(),
            });
        }
        Ok(self.databases.get(database_id).cloned().unwrap_or_default())
    }
}

// ============================================================================
// Recording Mailer
// ============================================================================

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
}

/// Mailer mock that records contacts and emails instead of sending them.
#[derive(Default)]
pub struct MockMailer {
    pub contacts: RwLock<Vec<(String, String)>>,
    pub emails: RwLock<Vec<SentEmail>>,
    duplicate: bool,
    fail: bool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report every contact as already subscribed
    pub fn already_subscribed() -> Self {
        Self {
            duplicate: true,
            ..Self::default()
        }
    }

    /// Fail every call with a provider error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn add_audience_contact(
        &self,
        audience_id: &str,
        email: &str,
    ) -> Result<(), MailerError> {
        if self.fail {
            return Err(MailerError::Api {
                status: 500,
                message: "mock failure".to_string(),
            });
        }
        if self.duplicate {
            return Err(MailerError::AlreadySubscribed);
        }
        self.contacts
            .write()
            .unwrap()
            .push((audience_id.to_string(), email.to_string()));
        Ok(())
    }

    async fn send_message(
        &self,
        to: &str,
        reply_to: &str,
        subject: &str,
        html: &str,
    ) -> Result<(), MailerError> {
        if self.fail {
            return Err(MailerError::Api {
                status: 500,
                message: "mock failure".to_string(),
            });
        }
        self.emails.write().unwrap().push(SentEmail {
            to: to.to_string(),
            reply_to: reply_to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }
}

// ============================================================================
// Canned Music API
// ============================================================================

/// Music mock returning a fixed answer.
pub enum MockMusicApi {
    Playing(TrackInfo),
    NotPlaying,
    Failing,
}

#[async_trait]
impl MusicApi for MockMusicApi {
    async fn now_playing(&self) -> Result<Option<TrackInfo>, SpotifyError> {
        match self {
            MockMusicApi::Playing(track) => Ok(Some(track.clone())),
            MockMusicApi::NotPlaying => Ok(None),
            MockMusicApi::Failing => Err(SpotifyError::TokenExchange("mock failure".to_string())),
        }
    }
}

/// A test track with default values
pub fn test_track() -> TrackInfo {
    TrackInfo {
        title: "Holocene".to_string(),
        artist: "Bon Iver".to_string(),
        album: "Bon Iver, Bon Iver".to_string(),
        album_image_url: Some("https://i.scdn.co/image/abc".to_string()),
        song_url: Some("https://open.spotify.com/track/xyz".to_string()),
        progress_ms: Some(61_000),
        duration_ms: Some(337_000),
    }
}
