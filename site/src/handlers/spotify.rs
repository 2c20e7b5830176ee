//! Now-playing handler

use axum::{extract::State, Json};
use tracing::warn;

use crate::domain::entities::NowPlaying;
use crate::domain::ports::MusicApi;
use crate::AppState;

/// GET /api/spotify/now-playing
///
/// Always 200. Missing credentials, upstream failures, and "nothing
/// playing" all collapse to `{"isPlaying": false}` so the widget on the
/// front end never breaks.
pub async fn now_playing(State(state): State<AppState>) -> Json<NowPlaying> {
    let Some(music) = &state.music else {
        return Json(NowPlaying::not_playing());
    };

    match music.now_playing().await {
        Ok(Some(track)) => Json(NowPlaying::from_track(track)),
        Ok(None) => Json(NowPlaying::not_playing()),
        Err(err) => {
            warn!(error = %err, "now-playing lookup failed");
            Json(NowPlaying::not_playing())
        }
    }
}
