//! Player state
//!
//! Owns the playlist loaded by the last search together with the play index,
//! the playing/shuffle/repeat flags and the recently-played history. All
//! navigation is index arithmetic over the playlist; resolving a stream link
//! for a song happens outside, between [`PlayerState::select`] and
//! [`PlayerState::commit_play`].

use crate::error::{PlaybackError, Result};
use crate::history::RecentlyPlayed;
use crate::shuffle::pick_random_index;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tunebridge_core::defaults::{MAX_QUEUE_ITEMS, MAX_RECENT_ITEMS};
use tunebridge_core::Song;

/// Player limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Recently-played cap
    pub max_recent_items: usize,

    /// Queue preview length
    pub max_queue_items: usize,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_recent_items: MAX_RECENT_ITEMS,
            max_queue_items: MAX_QUEUE_ITEMS,
        }
    }
}

/// Point-in-time view of the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaybackSnapshot {
    pub current_index: usize,
    pub is_playing: bool,
    pub shuffle: bool,
    pub repeat: bool,
    pub playlist_len: usize,
    pub current_song: Option<Song>,
}

/// In-memory player state
///
/// Invariant: `current_index < playlist.len()` whenever the playlist is
/// non-empty. The index is only moved by [`PlayerState::select`] (which
/// bounds-checks) and reset by [`PlayerState::load_playlist`].
#[derive(Debug, Clone)]
pub struct PlayerState {
    playlist: Vec<Song>,
    current_index: usize,
    is_playing: bool,
    shuffle: bool,
    repeat: bool,
    recently_played: RecentlyPlayed,
    config: PlayerConfig,
}

impl PlayerState {
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            playlist: Vec::new(),
            current_index: 0,
            is_playing: false,
            shuffle: false,
            repeat: false,
            recently_played: RecentlyPlayed::new(config.max_recent_items),
            config,
        }
    }

    // ===== Playlist =====

    /// Replace the playlist with fresh search results
    ///
    /// Rewinds to the first song and stops playback. Shuffle/repeat flags and
    /// the recently-played history are kept.
    pub fn load_playlist(&mut self, songs: Vec<Song>) {
        self.playlist = songs;
        self.current_index = 0;
        self.is_playing = false;
    }

    pub fn playlist(&self) -> &[Song] {
        &self.playlist
    }

    pub fn len(&self) -> usize {
        self.playlist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlist.is_empty()
    }

    /// Song at `index`, or `IndexOutOfBounds`
    pub fn song_at(&self, index: usize) -> Result<&Song> {
        self.playlist
            .get(index)
            .ok_or(PlaybackError::IndexOutOfBounds {
                index,
                len: self.playlist.len(),
            })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_song(&self) -> Option<&Song> {
        self.playlist.get(self.current_index)
    }

    // ===== Navigation =====

    /// Index that "next" should play
    ///
    /// Shuffle picks uniformly among every index except the current one;
    /// otherwise it advances by one and wraps.
    pub fn next_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize> {
        let len = self.non_empty_len()?;

        if self.shuffle {
            pick_random_index(len, self.current_index, rng).ok_or(PlaybackError::PlaylistEmpty)
        } else {
            Ok((self.current_index + 1) % len)
        }
    }

    /// Index that "previous" should play (steps back one and wraps)
    pub fn previous_index(&self) -> Result<usize> {
        let len = self.non_empty_len()?;
        Ok((self.current_index % len + len - 1) % len)
    }

    /// Index to play once the current song has finished
    ///
    /// Repeat replays the current song; otherwise this is [`Self::next_index`].
    pub fn advance_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize> {
        let len = self.non_empty_len()?;

        if self.repeat {
            Ok(self.current_index.min(len - 1))
        } else {
            self.next_index(rng)
        }
    }

    /// Upcoming songs after the current one
    ///
    /// Walks forward circularly and stops before wrapping back onto the
    /// current song, so at most `min(max_queue_items, len - 1)` entries.
    pub fn queue(&self) -> Vec<&Song> {
        let len = self.playlist.len();
        if len == 0 {
            return Vec::new();
        }

        let count = self.config.max_queue_items.min(len - 1);
        (1..=count)
            .map(|offset| &self.playlist[(self.current_index + offset) % len])
            .collect()
    }

    // ===== Playing =====

    /// Make `index` the current song
    ///
    /// Moves the index before any stream link is resolved, so a song whose
    /// link later fails still becomes the base for next/previous.
    pub fn select(&mut self, index: usize) -> Result<Song> {
        let song = self.song_at(index)?.clone();
        self.current_index = index;
        Ok(song)
    }

    /// Record that the selected song at `index` started playing
    ///
    /// `song_id` is the id returned by [`Self::select`]; if the playlist was
    /// replaced in the meantime and the slot now holds another song, nothing
    /// changes and `PlaylistChanged` is returned.
    pub fn commit_play(&mut self, index: usize, song_id: &str) -> Result<Song> {
        let song = self.song_at(index)?.clone();
        if song.id != song_id {
            return Err(PlaybackError::PlaylistChanged(index));
        }

        self.is_playing = true;
        self.recently_played.push(song.clone());

        Ok(song)
    }

    pub fn recently_played(&self) -> Vec<&Song> {
        self.recently_played.get_all()
    }

    // ===== Flags =====

    /// Flip shuffle, returning the new value
    pub fn toggle_shuffle(&mut self) -> bool {
        self.shuffle = !self.shuffle;
        self.shuffle
    }

    /// Flip repeat, returning the new value
    pub fn toggle_repeat(&mut self) -> bool {
        self.repeat = !self.repeat;
        self.repeat
    }

    /// Flip play/pause, returning the new value
    pub fn toggle_playing(&mut self) -> bool {
        self.is_playing = !self.is_playing;
        self.is_playing
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn is_repeat(&self) -> bool {
        self.repeat
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            current_index: self.current_index,
            is_playing: self.is_playing,
            shuffle: self.shuffle,
            repeat: self.repeat,
            playlist_len: self.playlist.len(),
            current_song: self.current_song().cloned(),
        }
    }

    fn non_empty_len(&self) -> Result<usize> {
        match self.playlist.len() {
            0 => Err(PlaybackError::PlaylistEmpty),
            len => Ok(len),
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn song(id: &str) -> Song {
        Song::new(id, format!("Song {}", id), "Artist", "thumb.jpg", format!("https://yt/{}", id))
    }

    fn player_with(ids: &[&str]) -> PlayerState {
        let mut player = PlayerState::default();
        player.load_playlist(ids.iter().map(|id| song(id)).collect());
        player
    }

    fn play(player: &mut PlayerState, index: usize) -> Song {
        let song = player.select(index).unwrap();
        player.commit_play(index, &song.id).unwrap()
    }

    fn queue_ids(player: &PlayerState) -> Vec<&str> {
        player.queue().iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn new_player_is_idle() {
        let player = PlayerState::default();
        assert!(player.is_empty());
        assert_eq!(player.current_index(), 0);
        assert!(!player.is_playing());
        assert!(!player.is_shuffle());
        assert!(!player.is_repeat());
        assert!(player.current_song().is_none());
    }

    #[test]
    fn play_updates_index_and_history() {
        let mut player = player_with(&["a", "b", "c"]);

        let played = play(&mut player, 2);

        assert_eq!(played.id, "c");
        assert_eq!(player.current_index(), 2);
        assert!(player.is_playing());
        assert_eq!(player.recently_played()[0].id, "c");
    }

    #[test]
    fn select_out_of_bounds() {
        let mut player = player_with(&["a"]);
        assert_eq!(
            player.select(1),
            Err(PlaybackError::IndexOutOfBounds { index: 1, len: 1 })
        );
        assert_eq!(player.current_index(), 0);
        assert!(!player.is_playing());
    }

    #[test]
    fn select_moves_index_without_playing() {
        let mut player = player_with(&["a", "b", "c"]);

        let selected = player.select(1).unwrap();

        assert_eq!(selected.id, "b");
        assert_eq!(player.current_index(), 1);
        assert!(!player.is_playing());
        assert!(player.recently_played().is_empty());
        assert_eq!(queue_ids(&player), vec!["c", "a"]);
    }

    #[test]
    fn commit_play_detects_replaced_playlist() {
        let mut player = player_with(&["a", "b"]);
        let chosen = player.select(1).unwrap().id;

        player.load_playlist(vec![song("x"), song("y")]);

        assert_eq!(
            player.commit_play(1, &chosen),
            Err(PlaybackError::PlaylistChanged(1))
        );
        assert!(player.recently_played().is_empty());
    }

    #[test]
    fn next_then_previous_round_trip() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut player = player_with(&["a", "b", "c"]);

        let next = player.next_index(&mut rng).unwrap();
        assert_eq!(next, 1);
        play(&mut player, next);

        let prev = player.previous_index().unwrap();
        assert_eq!(prev, 0);
    }

    #[test]
    fn navigation_wraps() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut player = player_with(&["a", "b", "c"]);

        assert_eq!(player.previous_index().unwrap(), 2);

        play(&mut player, 2);
        assert_eq!(player.next_index(&mut rng).unwrap(), 0);
    }

    #[test]
    fn navigation_on_empty_playlist_fails() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut player = PlayerState::default();
        player.toggle_shuffle();

        assert_eq!(player.next_index(&mut rng), Err(PlaybackError::PlaylistEmpty));
        assert_eq!(player.previous_index(), Err(PlaybackError::PlaylistEmpty));
        assert_eq!(player.advance_index(&mut rng), Err(PlaybackError::PlaylistEmpty));
        assert!(player.queue().is_empty());
    }

    #[test]
    fn shuffle_next_avoids_current() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut player = player_with(&["a", "b", "c"]);
        assert!(player.toggle_shuffle());

        for _ in 0..100 {
            let next = player.next_index(&mut rng).unwrap();
            assert!(next == 1 || next == 2);
        }
    }

    #[test]
    fn advance_respects_repeat() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut player = player_with(&["a", "b", "c"]);
        play(&mut player, 1);

        assert_eq!(player.advance_index(&mut rng).unwrap(), 2);

        assert!(player.toggle_repeat());
        assert_eq!(player.advance_index(&mut rng).unwrap(), 1);
        // next/previous ignore repeat
        assert_eq!(player.next_index(&mut rng).unwrap(), 2);
        assert_eq!(player.previous_index().unwrap(), 0);
    }

    #[test]
    fn queue_skips_current_and_wraps() {
        let mut player = player_with(&["a", "b", "c"]);
        play(&mut player, 1);

        assert_eq!(queue_ids(&player), vec!["c", "a"]);
    }

    #[test]
    fn queue_is_capped() {
        let mut player = player_with(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        play(&mut player, 5);

        assert_eq!(queue_ids(&player), vec!["g", "h", "a", "b", "c"]);
    }

    #[test]
    fn queue_of_single_song_is_empty() {
        let player = player_with(&["a"]);
        assert!(player.queue().is_empty());
    }

    #[test]
    fn load_playlist_rewinds_but_keeps_flags_and_history() {
        let mut player = player_with(&["a", "b", "c"]);
        play(&mut player, 2);
        player.toggle_shuffle();

        player.load_playlist(vec![song("x")]);

        assert_eq!(player.current_index(), 0);
        assert!(!player.is_playing());
        assert!(player.is_shuffle());
        assert_eq!(player.recently_played()[0].id, "c");
    }

    #[test]
    fn toggles_flip_back() {
        let mut player = PlayerState::default();
        assert!(player.toggle_shuffle());
        assert!(!player.toggle_shuffle());
        assert!(player.toggle_repeat());
        assert!(!player.toggle_repeat());
        assert!(player.toggle_playing());
        assert!(!player.toggle_playing());
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut player = player_with(&["a", "b"]);
        play(&mut player, 1);
        player.toggle_repeat();

        let snapshot = player.snapshot();

        assert_eq!(snapshot.current_index, 1);
        assert!(snapshot.is_playing);
        assert!(!snapshot.shuffle);
        assert!(snapshot.repeat);
        assert_eq!(snapshot.playlist_len, 2);
        assert_eq!(snapshot.current_song.unwrap().id, "b");
    }
}
