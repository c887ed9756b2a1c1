//! Error types for player state operations

use thiserror::Error;

/// Player state errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    /// No search has loaded any songs yet
    #[error("Playlist is empty")]
    PlaylistEmpty,

    /// Index out of bounds
    #[error("Song not found at index {index} (playlist has {len} songs)")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The playlist was replaced while a play request was resolving its link
    #[error("Playlist changed while resolving song at index {0}")]
    PlaylistChanged(usize),
}

/// Result type for player state operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
