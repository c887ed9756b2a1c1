//! Tunebridge Server Library
//!
//! HTTP front for an upstream music API: proxies search and download calls
//! and keeps a single in-memory player (playlist, index, shuffle/repeat,
//! recently played).
//!
//! This library exposes the router and its parts for the binary and for tests.

pub mod api;
pub mod config;
pub mod error;
pub mod router;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use state::AppState;
