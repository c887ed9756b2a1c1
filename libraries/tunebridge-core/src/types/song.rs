/// Song domain type
use serde::{Deserialize, Serialize};

/// A playable song as served to clients
///
/// Built once from a provider search record and never mutated afterwards.
/// Serializes as `{id, title, artist, thumbnail, videoUrl, timestamp}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// External video identifier
    pub id: String,

    /// Song title
    pub title: String,

    /// Artist or channel name
    pub artist: String,

    /// Thumbnail image URL
    pub thumbnail: String,

    /// Source video URL, handed to the download endpoint
    pub video_url: String,

    /// Display duration such as `3:45`
    pub timestamp: Option<String>,

    /// Duration in whole seconds (not part of the JSON contract)
    #[serde(skip)]
    pub duration_secs: u64,
}

impl Song {
    /// Create a song with the required fields; no timestamp, zero duration
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        thumbnail: impl Into<String>,
        video_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            thumbnail: thumbnail.into(),
            video_url: video_url.into(),
            timestamp: None,
            duration_secs: 0,
        }
    }

    /// Set the display timestamp
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Set the duration in seconds
    pub fn with_duration_secs(mut self, duration_secs: u64) -> Self {
        self.duration_secs = duration_secs;
        self
    }
}
