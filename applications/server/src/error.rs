/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tunebridge_playback::PlaybackError;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Provider call failed; the message is shown to the client
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Provider answered but without a usable download link
    #[error("Resolution failed: {0}")]
    Resolution(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<PlaybackError> for ServerError {
    fn from(err: PlaybackError) -> Self {
        match err {
            PlaybackError::IndexOutOfBounds { .. } => {
                ServerError::NotFound("Song not found".to_string())
            }
            PlaybackError::PlaylistEmpty => ServerError::NotFound(err.to_string()),
            PlaybackError::PlaylistChanged(_) => ServerError::Conflict(err.to_string()),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ServerError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ServerError::Upstream(msg) => {
                tracing::warn!("Upstream error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ServerError::Resolution(msg) => {
                tracing::warn!("Resolution failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
            ServerError::Io(ref e) => {
                tracing::error!("IO error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "IO error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
