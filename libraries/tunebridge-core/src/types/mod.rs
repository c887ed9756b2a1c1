//! Domain and provider types

mod provider;
mod song;

pub use provider::{RawAuthor, RawDuration, RawSearchItem};
pub use song::Song;
