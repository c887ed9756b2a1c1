/// Player API routes
use crate::{
    api::songs::{playlist_index, resolve_link},
    error::Result,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tunebridge_core::{format_time, Song};
use tunebridge_playback::PlaybackSnapshot;

#[derive(Debug, Serialize)]
pub struct PlayResponse {
    pub status: bool,
    pub song: Song,
    pub download_url: String,
}

/// Resolve and start the selected song
///
/// The player lock is released while the provider resolves the link; the
/// commit then re-checks that the playlist still holds the same song.
async fn play_selected(
    app_state: &AppState,
    index: usize,
    song: Song,
) -> Result<Json<PlayResponse>> {
    let download_url = resolve_link(app_state, &song, "Failed to get audio URL").await?;

    let song = app_state
        .player
        .write()
        .await
        .commit_play(index, &song.id)?;

    tracing::info!(
        index,
        title = %song.title,
        duration = %format_time(song.duration_secs as f64),
        "Playing"
    );

    Ok(Json(PlayResponse {
        status: true,
        song,
        download_url,
    }))
}

/// GET /play/:index - Play a song from the playlist
pub async fn play(
    State(app_state): State<AppState>,
    Path(index): Path<i64>,
) -> Result<Json<PlayResponse>> {
    let index = playlist_index(index)?;
    let song = app_state.player.write().await.select(index)?;
    play_selected(&app_state, index, song).await
}

/// GET /next - Play the next song (random when shuffle is on)
pub async fn next(State(app_state): State<AppState>) -> Result<Json<PlayResponse>> {
    let (index, song) = {
        let mut player = app_state.player.write().await;
        let mut rng = rand::thread_rng();
        let index = player.next_index(&mut rng)?;
        (index, player.select(index)?)
    };
    play_selected(&app_state, index, song).await
}

/// GET /previous - Play the previous song
pub async fn previous(State(app_state): State<AppState>) -> Result<Json<PlayResponse>> {
    let (index, song) = {
        let mut player = app_state.player.write().await;
        let index = player.previous_index()?;
        (index, player.select(index)?)
    };
    play_selected(&app_state, index, song).await
}

/// GET /ended - The current song finished; replay it on repeat, else play next
pub async fn ended(State(app_state): State<AppState>) -> Result<Json<PlayResponse>> {
    let (index, song) = {
        let mut player = app_state.player.write().await;
        let mut rng = rand::thread_rng();
        let index = player.advance_index(&mut rng)?;
        (index, player.select(index)?)
    };
    play_selected(&app_state, index, song).await
}

#[derive(Debug, Serialize)]
pub struct ShuffleResponse {
    pub shuffle: bool,
}

/// GET /toggle_shuffle
pub async fn toggle_shuffle(State(app_state): State<AppState>) -> Json<ShuffleResponse> {
    let shuffle = app_state.player.write().await.toggle_shuffle();
    Json(ShuffleResponse { shuffle })
}

#[derive(Debug, Serialize)]
pub struct RepeatResponse {
    pub repeat: bool,
}

/// GET /toggle_repeat
pub async fn toggle_repeat(State(app_state): State<AppState>) -> Json<RepeatResponse> {
    let repeat = app_state.player.write().await.toggle_repeat();
    Json(RepeatResponse { repeat })
}

#[derive(Debug, Serialize)]
pub struct PlayingResponse {
    pub playing: bool,
}

/// GET /toggle_play - Pause or resume
pub async fn toggle_play(State(app_state): State<AppState>) -> Json<PlayingResponse> {
    let playing = app_state.player.write().await.toggle_playing();
    Json(PlayingResponse { playing })
}

#[derive(Debug, Serialize)]
pub struct RecentlyPlayedResponse {
    pub recently_played: Vec<Song>,
}

/// GET /recently_played - Most recent first
pub async fn recently_played(State(app_state): State<AppState>) -> Json<RecentlyPlayedResponse> {
    let player = app_state.player.read().await;
    Json(RecentlyPlayedResponse {
        recently_played: player.recently_played().into_iter().cloned().collect(),
    })
}

#[derive(Debug, Serialize)]
pub struct QueueResponse {
    pub queue: Vec<Song>,
}

/// GET /queue - Upcoming songs after the current one
pub async fn queue(State(app_state): State<AppState>) -> Json<QueueResponse> {
    let player = app_state.player.read().await;
    Json(QueueResponse {
        queue: player.queue().into_iter().cloned().collect(),
    })
}

/// GET /state - Current index, flags and song
pub async fn state(State(app_state): State<AppState>) -> Json<PlaybackSnapshot> {
    Json(app_state.player.read().await.snapshot())
}
