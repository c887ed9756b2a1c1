/// Shared application state
use std::sync::Arc;
use tokio::sync::RwLock;
use tunebridge_playback::{PlayerConfig, PlayerState};
use tunebridge_provider::MusicProvider;

/// Application state shared across all handlers
///
/// Handlers take the player lock only for in-memory reads and writes and
/// release it before calling the provider.
#[derive(Clone)]
pub struct AppState {
    pub player: Arc<RwLock<PlayerState>>,
    pub provider: Arc<dyn MusicProvider>,
    pub default_search: Arc<str>,
}

impl AppState {
    pub fn new(
        provider: Arc<dyn MusicProvider>,
        player_config: PlayerConfig,
        default_search: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            player: Arc::new(RwLock::new(PlayerState::new(player_config))),
            provider,
            default_search: default_search.into(),
        }
    }
}
