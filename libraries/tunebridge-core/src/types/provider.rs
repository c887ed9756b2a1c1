//! Provider search records
//!
//! The upstream search API returns loosely shaped JSON: fields go missing,
//! nested alternates appear instead of top-level ones, and occasionally a
//! field carries the wrong JSON type. Every field here is optional and a
//! value of the wrong type deserializes as `None` instead of failing the
//! whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One raw entry of the provider's search `data` array
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawSearchItem {
    /// Video identifier
    #[serde(rename = "videoId", default, deserialize_with = "lenient")]
    pub video_id: Option<String>,

    /// Video title
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,

    /// Channel information
    #[serde(default, deserialize_with = "lenient")]
    pub author: Option<RawAuthor>,

    /// Primary thumbnail URL
    #[serde(default, deserialize_with = "lenient")]
    pub thumbnail: Option<String>,

    /// Alternate thumbnail URL
    #[serde(default, deserialize_with = "lenient")]
    pub image: Option<String>,

    /// Top-level duration in seconds
    #[serde(default, deserialize_with = "lenient")]
    pub seconds: Option<f64>,

    /// Nested duration block
    #[serde(default, deserialize_with = "lenient")]
    pub duration: Option<RawDuration>,

    /// Top-level display duration
    #[serde(default, deserialize_with = "lenient")]
    pub timestamp: Option<String>,

    /// Video URL
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
}

/// Nested `author` object
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawAuthor {
    /// Channel name
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

/// Nested `duration` object
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawDuration {
    /// Duration in seconds
    #[serde(default, deserialize_with = "lenient")]
    pub seconds: Option<f64>,

    /// Display duration
    #[serde(default, deserialize_with = "lenient")]
    pub timestamp: Option<String>,
}

impl RawSearchItem {
    /// Read a record from an arbitrary JSON value
    ///
    /// Anything that is not an object yields an all-empty record.
    pub fn from_value(value: &Value) -> Self {
        Self::deserialize(value).unwrap_or_default()
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
