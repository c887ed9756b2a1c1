//! Upstream music API client.

use crate::error::{ProviderError, Result};
use crate::provider::MusicProvider;
use crate::types::{DownloadEnvelope, DownloadPayload, ProviderConfig, SearchEnvelope, SearchOutcome};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};
use tunebridge_core::format_search_results;
use url::Url;

/// HTTP client for the upstream search and download endpoints.
///
/// Requests are single-shot: no caching and no retries. Queries and URLs
/// are forwarded unchanged as query parameters.
///
/// # Example
///
/// ```ignore
/// use tunebridge_provider::{MusicProvider, ProviderClient, ProviderConfig};
///
/// let client = ProviderClient::new(ProviderConfig::default())?;
/// let outcome = client.search("lofi beats").await?;
/// println!("Found {} songs", outcome.songs.len());
/// ```
#[derive(Debug, Clone)]
pub struct ProviderClient {
    http: Client,
    config: ProviderConfig,
}

impl ProviderClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        validate_endpoint("search", &config.search_url)?;
        validate_endpoint("download", &config.download_url)?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Tunebridge/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, config })
    }

    /// The active configuration.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Decode a JSON body, turning non-success statuses into `Upstream`.
    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Provider returned error status");
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl MusicProvider for ProviderClient {
    async fn search(&self, query: &str) -> Result<SearchOutcome> {
        debug!(url = %self.config.search_url, query = %query, "Searching provider");

        let response = self
            .http
            .get(&self.config.search_url)
            .query(&[("query", query)])
            .send()
            .await?;

        let envelope: SearchEnvelope = Self::read_json(response).await?;

        if !envelope.status {
            debug!(query = %query, "Provider reported unsuccessful search");
            return Ok(SearchOutcome::empty());
        }

        let songs = envelope
            .data
            .as_ref()
            .map(format_search_results)
            .unwrap_or_default();

        info!(query = %query, results = songs.len(), "Search complete");

        Ok(SearchOutcome::found(songs))
    }

    async fn download(&self, url: &str) -> Result<DownloadPayload> {
        debug!(url = %self.config.download_url, source = %url, "Resolving download link");

        let response = self
            .http
            .get(&self.config.download_url)
            .query(&[("url", url)])
            .send()
            .await?;

        let envelope: DownloadEnvelope = Self::read_json(response).await?;
        let payload = DownloadPayload {
            data: envelope.data,
        };

        debug!(source = %url, has_link = payload.link().is_some(), "Download resolved");

        Ok(payload)
    }
}

fn validate_endpoint(name: &str, endpoint: &str) -> Result<()> {
    if endpoint.is_empty() {
        return Err(ProviderError::InvalidUrl(format!(
            "{} URL cannot be empty",
            name
        )));
    }

    let parsed = Url::parse(endpoint)
        .map_err(|e| ProviderError::InvalidUrl(format!("{} URL {}: {}", name, endpoint, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ProviderError::InvalidUrl(format!(
            "{} URL must start with http:// or https:// (got {}://)",
            name, other
        ))),
    }
}
