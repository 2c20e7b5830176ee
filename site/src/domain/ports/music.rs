//! Music-streaming port trait

use async_trait::async_trait;

use crate::error::SpotifyError;

/// A track currently playing on the owner's account
#[derive(Debug, Clone)]
pub struct TrackInfo {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub album_image_url: Option<String>,
    pub song_url: Option<String>,
    pub progress_ms: Option<i64>,
    pub duration_ms: Option<i64>,
}

/// Port trait for the music-streaming "currently playing" lookup
#[async_trait]
pub trait MusicApi: Send + Sync {
    /// `Ok(None)` when nothing is playing or the playing content is not a
    /// track (podcasts etc.).
    async fn now_playing(&self) -> Result<Option<TrackInfo>, SpotifyError>;
}
