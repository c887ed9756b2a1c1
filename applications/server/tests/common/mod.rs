/// Common test utilities and fixtures
use async_trait::async_trait;
use serde_json::json;
use std::collections::HashSet;
use std::sync::Mutex;
use tunebridge_core::Song;
use tunebridge_provider::{DownloadPayload, MusicProvider, ProviderError, SearchOutcome};

/// Query the stub answers with "no results"
pub const EMPTY_QUERY: &str = "nothing matches this";

/// In-process provider with canned songs
///
/// Download links are `{videoUrl}.mp3`; URLs listed in `missing_links`
/// resolve to a payload without `dl`.
#[derive(Default)]
pub struct StubProvider {
    pub songs: Vec<Song>,
    pub fail_search: bool,
    pub fail_download: bool,
    pub missing_links: HashSet<String>,
    pub queries: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn with_songs(ids: &[&str]) -> Self {
        Self {
            songs: ids.iter().map(|id| fixtures::song(id)).collect(),
            ..Default::default()
        }
    }

    pub fn seen_queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl MusicProvider for StubProvider {
    async fn search(&self, query: &str) -> tunebridge_provider::Result<SearchOutcome> {
        self.queries.lock().unwrap().push(query.to_string());

        if self.fail_search {
            return Err(ProviderError::Upstream {
                status: 503,
                message: "provider down".to_string(),
            });
        }
        if query == EMPTY_QUERY {
            return Ok(SearchOutcome::empty());
        }
        Ok(SearchOutcome::found(self.songs.clone()))
    }

    async fn download(&self, url: &str) -> tunebridge_provider::Result<DownloadPayload> {
        if self.fail_download {
            return Err(ProviderError::Upstream {
                status: 500,
                message: "converter crashed".to_string(),
            });
        }
        if self.missing_links.contains(url) {
            return Ok(DownloadPayload {
                data: Some(json!({ "title": "no link here" })),
            });
        }
        Ok(DownloadPayload {
            data: Some(json!({ "dl": format!("{}.mp3", url), "title": url })),
        })
    }
}

pub mod fixtures {
    use tunebridge_core::Song;

    pub fn video_url(id: &str) -> String {
        format!("https://yt.test/{}", id)
    }

    pub fn song(id: &str) -> Song {
        Song::new(
            id,
            format!("Song {}", id),
            "Test Artist",
            format!("https://img.test/{}.jpg", id),
            video_url(id),
        )
        .with_timestamp("3:00")
        .with_duration_secs(180)
    }
}
