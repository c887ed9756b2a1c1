//! Tunebridge Core
//!
//! Shared types and pure helpers used by every Tunebridge crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, the canonical track shape served to clients
//! - **Provider Records**: `RawSearchItem`, a lenient view of the upstream search payload
//! - **Formatting**: normalization of provider records and small display helpers
//! - **Defaults**: upstream endpoints and player limits
//!
//! # Example
//!
//! ```rust
//! use tunebridge_core::format::format_search_results;
//!
//! let payload = serde_json::json!([
//!     { "videoId": "abc123", "title": "Song", "author": { "name": "Band" }, "url": "https://youtu.be/abc123" }
//! ]);
//!
//! let songs = format_search_results(&payload);
//! assert_eq!(songs[0].artist, "Band");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod defaults;
pub mod format;
pub mod types;

pub use format::{
    format_search_results, format_song, format_time, get_download_url, needs_scrolling,
};
pub use types::{RawAuthor, RawDuration, RawSearchItem, Song};
