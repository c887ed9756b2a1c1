//! Recently-played tracking
//!
//! Bounded, most-recent-first list of played songs, unique by song id.

use std::collections::VecDeque;
use tunebridge_core::Song;

/// Recently-played history with bounded size
#[derive(Debug, Clone)]
pub struct RecentlyPlayed {
    /// History buffer (most recent = front)
    songs: VecDeque<Song>,

    /// Maximum history size
    max_size: usize,
}

impl RecentlyPlayed {
    /// Create new history with specified maximum size
    pub fn new(max_size: usize) -> Self {
        Self {
            songs: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    /// Record a played song
    ///
    /// An existing entry with the same id is moved to the front instead of
    /// duplicated. Entries past `max_size` are discarded from the back.
    pub fn push(&mut self, song: Song) {
        self.songs.retain(|s| s.id != song.id);
        self.songs.push_front(song);
        self.songs.truncate(self.max_size);
    }

    /// Get all songs (most recent first)
    pub fn get_all(&self) -> Vec<&Song> {
        self.songs.iter().collect()
    }

    /// Most recently played song
    pub fn latest(&self) -> Option<&Song> {
        self.songs.front()
    }

    /// Whether a song with this id is in the history
    pub fn contains(&self, id: &str) -> bool {
        self.songs.iter().any(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn clear(&mut self) {
        self.songs.clear();
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

impl Default for RecentlyPlayed {
    fn default() -> Self {
        Self::new(tunebridge_core::defaults::MAX_RECENT_ITEMS)
    }
}
