//! Upstream endpoints and player defaults

/// Search endpoint of the upstream music API (`?query=`)
pub const SEARCH_URL: &str = "https://api.siputzx.my.id/api/s/youtube";

/// MP3 resolution endpoint of the upstream music API (`?url=`)
pub const DOWNLOAD_MP3_URL: &str = "https://api.siputzx.my.id/api/d/ytmp3";

/// Query used when a search request omits one
pub const DEFAULT_SEARCH: &str = "popular songs 2025";

/// Recently-played history cap
pub const MAX_RECENT_ITEMS: usize = 10;

/// Number of upcoming songs in the queue preview
pub const MAX_QUEUE_ITEMS: usize = 5;

/// Title length after which clients should scroll the text
pub const SCROLL_THRESHOLD: usize = 20;

/// Fallbacks for provider records with missing fields
pub const UNKNOWN_TITLE: &str = "Unknown Title";
/// See [`UNKNOWN_TITLE`]
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
/// See [`UNKNOWN_TITLE`]
pub const PLACEHOLDER_THUMBNAIL: &str = "/api/placeholder/300/300";
/// See [`UNKNOWN_TITLE`]
pub const ZERO_TIMESTAMP: &str = "0:00";
