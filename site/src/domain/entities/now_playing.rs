//! "Now playing" response shape for the Spotify proxy endpoint

use serde::{Deserialize, Serialize};

use crate::domain::ports::TrackInfo;

/// Normalized payload for `GET /api/spotify/now-playing`.
///
/// Any failure along the way (missing credentials, token exchange, nothing
/// playing, non-track content) collapses to `{ "isPlaying": false }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPlaying {
    pub is_playing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub song_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
}

impl NowPlaying {
    pub fn not_playing() -> Self {
        Self {
            is_playing: false,
            title: None,
            artist: None,
            album: None,
            album_image_url: None,
            song_url: None,
            progress: None,
            duration: None,
        }
    }

    pub fn from_track(track: TrackInfo) -> Self {
        Self {
            is_playing: true,
            title: Some(track.title),
            artist: Some(track.artist),
            album: Some(track.album),
            album_image_url: track.album_image_url,
            song_url: track.song_url,
            progress: track.progress_ms,
            duration: track.duration_ms,
        }
    }
}
