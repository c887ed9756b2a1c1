/// Search and download API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tunebridge_core::Song;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub status: bool,
    pub data: Vec<Song>,
}

/// GET /search?query= - Search the provider and replace the playlist
///
/// A missing or blank query falls back to the configured default search.
/// When the provider has no results the playlist is left as it was.
pub async fn search(
    State(app_state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    let query = match params.query {
        Some(query) if !query.trim().is_empty() => query,
        _ => app_state.default_search.to_string(),
    };

    let outcome = app_state
        .provider
        .search(&query)
        .await
        .map_err(|e| ServerError::Upstream(format!("Error fetching search results: {}", e)))?;

    if !outcome.status {
        tracing::info!(query = %query, "Search returned no results");
        return Ok(Json(SearchResponse {
            status: false,
            data: Vec::new(),
        }));
    }

    app_state
        .player
        .write()
        .await
        .load_playlist(outcome.songs.clone());

    tracing::info!(query = %query, songs = outcome.songs.len(), "Playlist replaced");

    Ok(Json(SearchResponse {
        status: true,
        data: outcome.songs,
    }))
}

#[derive(Debug, Deserialize)]
pub struct DownloadParams {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct DownloadMp3Response {
    pub status: bool,
    pub data: Option<Value>,
}

/// GET /download_mp3?url= - Pass a video URL through to the provider
pub async fn download_mp3(
    State(app_state): State<AppState>,
    Query(params): Query<DownloadParams>,
) -> Result<Json<DownloadMp3Response>> {
    let payload = app_state
        .provider
        .download(&params.url)
        .await
        .map_err(download_error)?;

    Ok(Json(DownloadMp3Response {
        status: true,
        data: payload.data,
    }))
}

#[derive(Debug, Serialize)]
pub struct DownloadLinkResponse {
    pub download_url: String,
}

/// GET /download/:index - Resolve the download link of a playlist song
pub async fn download_song(
    State(app_state): State<AppState>,
    Path(index): Path<i64>,
) -> Result<Json<DownloadLinkResponse>> {
    let index = playlist_index(index)?;
    let song = app_state.player.read().await.song_at(index)?.clone();

    let download_url = resolve_link(&app_state, &song, "Failed to get download URL").await?;

    Ok(Json(DownloadLinkResponse { download_url }))
}

/// Resolve a song's direct link, failing with `Resolution` when there is none
pub(crate) async fn resolve_link(
    app_state: &AppState,
    song: &Song,
    missing_message: &str,
) -> Result<String> {
    let payload = app_state
        .provider
        .download(&song.video_url)
        .await
        .map_err(download_error)?;

    payload.link().ok_or_else(|| {
        tracing::debug!(song_id = %song.id, "Provider payload has no download link");
        ServerError::Resolution(missing_message.to_string())
    })
}

/// Path indices arrive signed so that negative values read as "not found"
pub(crate) fn playlist_index(index: i64) -> Result<usize> {
    usize::try_from(index).map_err(|_| ServerError::NotFound("Song not found".to_string()))
}

fn download_error(e: tunebridge_provider::ProviderError) -> ServerError {
    ServerError::Upstream(format!("Error getting MP3 download URL: {}", e))
}
