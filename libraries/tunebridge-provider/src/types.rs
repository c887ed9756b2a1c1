//! Types for upstream API requests and responses.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::time::Duration;
use tunebridge_core::{defaults, get_download_url, Song};

/// Configuration for the upstream music API.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Search endpoint, called as `GET {search_url}?query=...`
    pub search_url: String,
    /// Download endpoint, called as `GET {download_url}?url=...`
    pub download_url: String,
    /// Overall request timeout
    pub timeout: Duration,
}

impl ProviderConfig {
    /// Create a config for the given endpoints with the default timeout.
    pub fn new(search_url: impl Into<String>, download_url: impl Into<String>) -> Self {
        Self {
            search_url: search_url.into(),
            download_url: download_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new(defaults::SEARCH_URL, defaults::DOWNLOAD_MP3_URL)
    }
}

// =============================================================================
// Wire types
// =============================================================================

/// Raw search response. `data` is left untyped and normalized separately.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope {
    #[serde(default, deserialize_with = "truthy")]
    pub status: bool,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Read any JSON value as a flag: `null`, `false`, `0`, empty strings and
/// empty collections are false, as are the strings `"false"` and `"0"`.
fn truthy<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => {
            let s = s.trim();
            !(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false"))
        }
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    })
}

/// Raw download response.
#[derive(Debug, Deserialize)]
pub(crate) struct DownloadEnvelope {
    #[serde(default)]
    pub data: Option<Value>,
}

// =============================================================================
// Results
// =============================================================================

/// Result of a search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// False when the provider reported failure or returned no results
    pub status: bool,
    /// Normalized songs in provider order (empty when `status` is false)
    pub songs: Vec<Song>,
}

impl SearchOutcome {
    /// An unsuccessful search with no songs.
    pub fn empty() -> Self {
        Self {
            status: false,
            songs: Vec::new(),
        }
    }

    /// A successful search with the given songs.
    pub fn found(songs: Vec<Song>) -> Self {
        Self {
            status: !songs.is_empty(),
            songs,
        }
    }
}

/// Provider download payload, passed through to clients as-is.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DownloadPayload {
    /// Provider `data` object; expected to contain a `dl` link
    pub data: Option<Value>,
}

impl DownloadPayload {
    /// The direct download link, if the payload carries a non-empty one.
    pub fn link(&self) -> Option<String> {
        self.data.as_ref().and_then(get_download_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn status_of(body: Value) -> bool {
        serde_json::from_value::<SearchEnvelope>(body).unwrap().status
    }

    #[test]
    fn status_accepts_truthy_values() {
        assert!(status_of(json!({ "status": true })));
        assert!(status_of(json!({ "status": 1 })));
        assert!(status_of(json!({ "status": "true" })));
        assert!(status_of(json!({ "status": "ok" })));
    }

    #[test]
    fn status_rejects_falsy_values() {
        assert!(!status_of(json!({ "status": false })));
        assert!(!status_of(json!({ "status": 0 })));
        assert!(!status_of(json!({ "status": "" })));
        assert!(!status_of(json!({ "status": "false" })));
        assert!(!status_of(json!({ "status": null })));
        assert!(!status_of(json!({})));
    }
}
