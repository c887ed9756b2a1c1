//! Provider abstraction
//!
//! The server depends on this trait rather than on [`crate::ProviderClient`]
//! so that handlers can run against an in-process stub.

use crate::error::Result;
use crate::types::{DownloadPayload, SearchOutcome};
use async_trait::async_trait;

/// Upstream music source: free-text search and stream-link resolution
#[async_trait]
pub trait MusicProvider: Send + Sync {
    /// Search for songs; results come back normalized.
    ///
    /// A provider-side "no results" is `Ok` with `status == false`, not an error.
    async fn search(&self, query: &str) -> Result<SearchOutcome>;

    /// Resolve a source video URL to the provider's download payload.
    ///
    /// A payload without a link is still `Ok`; callers decide whether that
    /// is a failure.
    async fn download(&self, url: &str) -> Result<DownloadPayload>;
}
