/// Health check API routes
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub songs_loaded: usize,
}

/// GET /health - Liveness plus the size of the loaded playlist
pub async fn health(State(app_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        songs_loaded: app_state.player.read().await.len(),
    })
}
