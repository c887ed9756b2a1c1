//! Tunebridge - Player State
//!
//! In-memory playback state for the Tunebridge server.
//!
//! This crate provides:
//! - Playlist replacement on each search
//! - Next/previous navigation with wrap-around
//! - Shuffle (uniform pick that never repeats the current song)
//! - Repeat flag (consulted when a song finishes, not by next/previous)
//! - Recently-played history (bounded, most recent first, unique by id)
//! - Queue preview
//!
//! It performs no I/O. Resolving a stream link is left to the caller, which
//! selects an index with [`PlayerState::select`], resolves the link, then
//! calls [`PlayerState::commit_play`].
//!
//! # Example
//!
//! ```rust
//! use tunebridge_core::Song;
//! use tunebridge_playback::PlayerState;
//!
//! let mut player = PlayerState::default();
//! player.load_playlist(vec![
//!     Song::new("a", "First", "Artist", "a.jpg", "https://youtu.be/a"),
//!     Song::new("b", "Second", "Artist", "b.jpg", "https://youtu.be/b"),
//! ]);
//!
//! let next = player.next_index(&mut rand::thread_rng()).unwrap();
//! let id = player.select(next).unwrap().id;
//! let song = player.commit_play(next, &id).unwrap();
//!
//! assert_eq!(song.id, "b");
//! assert_eq!(player.recently_played()[0].id, "b");
//! ```

mod error;
mod history;
mod player;
mod shuffle;

pub use error::{PlaybackError, Result};
pub use history::RecentlyPlayed;
pub use player::{PlaybackSnapshot, PlayerConfig, PlayerState};
pub use shuffle::pick_random_index;
