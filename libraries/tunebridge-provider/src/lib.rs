//! Tunebridge Provider Client
//!
//! HTTP client for the upstream music API that Tunebridge proxies.
//!
//! # Features
//!
//! - **Search**: free-text search, results normalized into [`tunebridge_core::Song`]
//! - **Download**: resolve a video URL to a direct MP3 link
//!
//! # Example
//!
//! ```ignore
//! use tunebridge_provider::{MusicProvider, ProviderClient, ProviderConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ProviderClient::new(ProviderConfig::default())?;
//!
//!     let outcome = client.search("popular songs 2025").await?;
//!     let first = &outcome.songs[0];
//!
//!     let payload = client.download(&first.video_url).await?;
//!     println!("{} -> {:?}", first.title, payload.link());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod provider;
mod types;

pub use client::ProviderClient;
pub use error::{ProviderError, Result};
pub use provider::MusicProvider;
pub use types::{DownloadPayload, ProviderConfig, SearchOutcome};
