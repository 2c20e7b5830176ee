//! Spotify API client implementation
//!
//! Exchanges the stored refresh token for a short-lived access token on every
//! call, then queries the currently-playing endpoint. Anything that is not a
//! playing track normalizes to `None`.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::ports::{MusicApi, TrackInfo};
use crate::error::SpotifyError;

const TOKEN_ENDPOINT: &str = "https://accounts.spotify.com/api/token";
const NOW_PLAYING_ENDPOINT: &str = "https://api.spotify.com/v1/me/player/currently-playing";

/// Implementation of the music-streaming port backed by Spotify
pub struct SpotifyClient {
    http: Client,
    client_id: String,
    client_secret: String,
    refresh_token: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct CurrentlyPlayingResponse {
    #[serde(default)]
    is_playing: bool,
    currently_playing_type: Option<String>,
    progress_ms: Option<i64>,
    item: Option<TrackItem>,
}

#[derive(Deserialize)]
struct TrackItem {
    name: String,
    #[serde(default)]
    artists: Vec<ArtistItem>,
    album: Option<AlbumItem>,
    external_urls: Option<ExternalUrls>,
    duration_ms: Option<i64>,
}

#[derive(Deserialize)]
struct ArtistItem {
    name: String,
}

#[derive(Deserialize)]
struct AlbumItem {
    #[serde(default)]
    name: String,
    #[serde(default)]
    images: Vec<ImageItem>,
}

#[derive(Deserialize)]
struct ImageItem {
    url: String,
}

#[derive(Deserialize)]
struct ExternalUrls {
    spotify: Option<String>,
}

impl SpotifyClient {
    pub fn new(client_id: String, client_secret: String, refresh_token: String) -> Self {
        Self {
            http: Client::new(),
            client_id,
            client_secret,
            refresh_token,
        }
    }

    async fn access_token(&self) -> Result<String, SpotifyError> {
        let basic = BASE64.encode(format!("{}:{}", self.client_id, self.client_secret));

        let response = self
            .http
            .post(TOKEN_ENDPOINT)
            .header("Authorization", format!("Basic {}", basic))
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", self.refresh_token.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(SpotifyError::TokenExchange(format!(
                "{}: {}",
                status, message
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| SpotifyError::Deserialization(e.to_string()))?;
        Ok(token.access_token)
    }
}

/// Normalize the raw currently-playing payload to a track, dropping paused
/// playback and non-track content (podcasts, ads).
fn normalize(response: CurrentlyPlayingResponse) -> Option<TrackInfo> {
    if !response.is_playing {
        return None;
    }
    if response.currently_playing_type.as_deref() != Some("track") {
        return None;
    }
    let item = response.item?;

    let artist = item
        .artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    Some(TrackInfo {
        title: item.name,
        artist,
        album: item
            .album
            .as_ref()
            .map(|a| a.name.clone())
            .unwrap_or_default(),
        album_image_url: item
            .album
            .as_ref()
            .and_then(|a| a.images.first())
            .map(|i| i.url.clone()),
        song_url: item.external_urls.and_then(|u| u.spotify),
        progress_ms: response.progress_ms,
        duration_ms: item.duration_ms,
    })
}

#[async_trait]
impl MusicApi for SpotifyClient {
    async fn now_playing(&self) -> Result<Option<TrackInfo>, SpotifyError> {
        let token = self.access_token().await?;

        let response = self
            .http
            .get(NOW_PLAYING_ENDPOINT)
            .bearer_auth(token)
            .send()
            .await?;

        // 204 means nothing is playing; other non-success statuses are also
        // treated as "not playing" rather than surfaced to the visitor.
        let status = response.status();
        if status.as_u16() == 204 || !status.is_success() {
            return Ok(None);
        }

        let playing: CurrentlyPlayingResponse = response
            .json()
            .await
            .map_err(|e| SpotifyError::Deserialization(e.to_string()))?;

        Ok(normalize(playing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_track_json() -> serde_json::Value {
        serde_json::json!({
            "is_playing": true,
            "currently_playing_type": "track",
            "progress_ms": 61000,
            "item": {
                "name": "Holocene",
                "artists": [{ "name": "Bon Iver" }, { "name": "Sean Carey" }],
                "album": {
                    "name": "Bon Iver, Bon Iver",
                    "images": [
                        { "url": "https://i.scdn.co/image/large" },
                        { "url": "https://i.scdn.co/image/small" }
                    ]
                },
                "external_urls": { "spotify": "https://open.spotify.com/track/xyz" },
                "duration_ms": 337000
            }
        })
    }

    #[test]
    fn normalize_maps_a_playing_track() {
        let response: CurrentlyPlayingResponse =
            serde_json::from_value(playing_track_json()).unwrap();

        let track = normalize(response).unwrap();

        assert_eq!(track.title, "Holocene");
        assert_eq!(track.artist, "Bon Iver, Sean Carey");
        assert_eq!(track.album, "Bon Iver, Bon Iver");
        assert_eq!(
            track.album_image_url.as_deref(),
            Some("https://i.scdn.co/image/large")
        );
        assert_eq!(
            track.song_url.as_deref(),
            Some("https://open.spotify.com/track/xyz")
        );
        assert_eq!(track.progress_ms, Some(61000));
        assert_eq!(track.duration_ms, Some(337000));
    }

    #[test]
    fn normalize_drops_paused_playback() {
        let mut json = playing_track_json();
        json["is_playing"] = serde_json::json!(false);
        let response: CurrentlyPlayingResponse = serde_json::from_value(json).unwrap();

        assert!(normalize(response).is_none());
    }

    #[test]
    fn normalize_drops_podcast_episodes() {
        let mut json = playing_track_json();
        json["currently_playing_type"] = serde_json::json!("episode");
        json["item"] = serde_json::json!(null);
        let response: CurrentlyPlayingResponse = serde_json::from_value(json).unwrap();

        assert!(normalize(response).is_none());
    }

    #[test]
    fn normalize_survives_a_sparse_item() {
        let json = serde_json::json!({
            "is_playing": true,
            "currently_playing_type": "track",
            "item": { "name": "Untitled Demo" }
        });
        let response: CurrentlyPlayingResponse = serde_json::from_value(json).unwrap();

        let track = normalize(response).unwrap();

        assert_eq!(track.title, "Untitled Demo");
        assert_eq!(track.artist, "");
        assert_eq!(track.album, "");
        assert!(track.album_image_url.is_none());
        assert!(track.song_url.is_none());
    }
}
