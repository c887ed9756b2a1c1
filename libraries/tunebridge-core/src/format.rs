//! Normalization of provider records and display helpers
//!
//! Every fallback chain follows the same order: the primary field, then the
//! nested alternate, then a fixed default from [`crate::defaults`].

use crate::defaults::{
    PLACEHOLDER_THUMBNAIL, UNKNOWN_ARTIST, UNKNOWN_TITLE, ZERO_TIMESTAMP,
};
use crate::types::{RawSearchItem, Song};
use serde_json::Value;

/// Normalize one provider record into a [`Song`]
pub fn format_song(item: RawSearchItem) -> Song {
    let (nested_seconds, nested_timestamp) = item
        .duration
        .map(|d| (d.seconds, d.timestamp))
        .unwrap_or_default();

    let seconds = item.seconds.or(nested_seconds).unwrap_or(0.0);

    Song {
        id: item.video_id.unwrap_or_default(),
        title: item.title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        artist: item
            .author
            .and_then(|author| author.name)
            .unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
        thumbnail: item
            .thumbnail
            .or(item.image)
            .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string()),
        video_url: item.url.unwrap_or_default(),
        timestamp: Some(
            item.timestamp
                .or(nested_timestamp)
                .unwrap_or_else(|| ZERO_TIMESTAMP.to_string()),
        ),
        duration_secs: whole_seconds(seconds),
    }
}

/// Normalize the provider's search `data` payload
///
/// Anything other than a JSON array yields an empty list.
pub fn format_search_results(items: &Value) -> Vec<Song> {
    match items {
        Value::Array(items) => items
            .iter()
            .map(|item| format_song(RawSearchItem::from_value(item)))
            .collect(),
        _ => Vec::new(),
    }
}

/// Extract the direct link (`dl`) from a download payload
///
/// Empty strings count as missing.
pub fn get_download_url(data: &Value) -> Option<String> {
    data.get("dl")
        .and_then(Value::as_str)
        .filter(|link| !link.is_empty())
        .map(str::to_string)
}

/// Format seconds as `m:ss`
pub fn format_time(seconds: f64) -> String {
    let total = whole_seconds(seconds);
    format!("{}:{:02}", total / 60, total % 60)
}

/// Whether `text` is longer than `max_length` characters
pub fn needs_scrolling(text: &str, max_length: usize) -> bool {
    text.chars().count() > max_length
}

fn whole_seconds(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds.trunc() as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::SCROLL_THRESHOLD;
    use serde_json::json;

    #[test]
    fn primary_fields_win() {
        let song = format_song(RawSearchItem::from_value(&json!({
            "videoId": "v1",
            "title": "Primary",
            "author": { "name": "Band" },
            "thumbnail": "thumb.jpg",
            "image": "image.jpg",
            "seconds": 125,
            "timestamp": "2:05",
            "duration": { "seconds": 999, "timestamp": "16:39" },
            "url": "https://youtube.com/watch?v=v1",
        })));

        assert_eq!(song.id, "v1");
        assert_eq!(song.title, "Primary");
        assert_eq!(song.artist, "Band");
        assert_eq!(song.thumbnail, "thumb.jpg");
        assert_eq!(song.timestamp.as_deref(), Some("2:05"));
        assert_eq!(song.duration_secs, 125);
        assert_eq!(song.video_url, "https://youtube.com/watch?v=v1");
    }

    #[test]
    fn nested_alternates_used_when_primary_missing() {
        let song = format_song(RawSearchItem::from_value(&json!({
            "image": "image.jpg",
            "duration": { "seconds": 61.9, "timestamp": "1:01" },
        })));

        assert_eq!(song.thumbnail, "image.jpg");
        assert_eq!(song.duration_secs, 61);
        assert_eq!(song.timestamp.as_deref(), Some("1:01"));
    }

    #[test]
    fn defaults_when_everything_missing() {
        let song = format_song(RawSearchItem::default());

        assert_eq!(song.id, "");
        assert_eq!(song.title, UNKNOWN_TITLE);
        assert_eq!(song.artist, UNKNOWN_ARTIST);
        assert_eq!(song.thumbnail, PLACEHOLDER_THUMBNAIL);
        assert_eq!(song.video_url, "");
        assert_eq!(song.timestamp.as_deref(), Some(ZERO_TIMESTAMP));
        assert_eq!(song.duration_secs, 0);
    }

    #[test]
    fn search_results_keep_order() {
        let songs = format_search_results(&json!([
            { "videoId": "a" },
            { "videoId": "b" },
            "garbage",
            { "videoId": "c" },
        ]));

        let ids: Vec<&str> = songs.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "", "c"]);
    }

    #[test]
    fn search_results_non_array_is_empty() {
        assert!(format_search_results(&json!({ "videoId": "a" })).is_empty());
        assert!(format_search_results(&json!(null)).is_empty());
    }

    #[test]
    fn download_url_extraction() {
        assert_eq!(
            get_download_url(&json!({ "dl": "https://cdn/x.mp3", "title": "x" })),
            Some("https://cdn/x.mp3".to_string())
        );
        assert_eq!(get_download_url(&json!({ "dl": "" })), None);
        assert_eq!(get_download_url(&json!({ "dl": 3 })), None);
        assert_eq!(get_download_url(&json!({})), None);
        assert_eq!(get_download_url(&json!(null)), None);
    }

    #[test]
    fn time_formatting() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(5.7), "0:05");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(3600.0), "60:00");
        assert_eq!(format_time(-3.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
    }

    #[test]
    fn scrolling_threshold() {
        assert!(!needs_scrolling("short title", SCROLL_THRESHOLD));
        assert!(!needs_scrolling(&"x".repeat(20), SCROLL_THRESHOLD));
        assert!(needs_scrolling(&"x".repeat(21), SCROLL_THRESHOLD));
        // counted in characters, not bytes
        assert!(!needs_scrolling(&"é".repeat(20), SCROLL_THRESHOLD));
    }
}
