/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tunebridge_core::defaults;
use tunebridge_playback::PlayerConfig;
use tunebridge_provider::ProviderConfig;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_provider")]
    pub provider: ProviderSettings,

    #[serde(default = "default_player")]
    pub player: PlayerSettings,

    #[serde(default = "default_web")]
    pub web: WebSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderSettings {
    #[serde(default = "default_search_url")]
    pub search_url: String,

    #[serde(default = "default_download_url")]
    pub download_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerSettings {
    #[serde(default = "default_max_recent_items")]
    pub max_recent_items: usize,

    #[serde(default = "default_max_queue_items")]
    pub max_queue_items: usize,

    /// Query used by `/search` when the request has none
    #[serde(default = "default_search")]
    pub default_search: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebSettings {
    /// HTML document served at `/`
    #[serde(default = "default_index_path")]
    pub index_path: PathBuf,

    /// Directory served under `/static`
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from `config.toml` and environment
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file (or `config.toml`) and environment
    ///
    /// Environment variables use the `TUNEBRIDGE_` prefix and `__` between
    /// nested keys, e.g. `TUNEBRIDGE_SERVER__PORT=9000`.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            // An explicitly requested file must exist
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("TUNEBRIDGE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.parse::<std::net::IpAddr>().is_err() {
            return Err(ServerError::Config(format!(
                "Invalid listen host {:?} (expected an IP address)",
                self.server.host
            )));
        }

        for (name, url) in [
            ("provider.search_url", &self.provider.search_url),
            ("provider.download_url", &self.provider.download_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ServerError::Config(format!(
                    "{} must be an http(s) URL (got {:?})",
                    name, url
                )));
            }
        }

        if self.provider.timeout_secs == 0 {
            return Err(ServerError::Config(
                "provider.timeout_secs must be greater than zero".to_string(),
            ));
        }

        if self.player.max_recent_items == 0 || self.player.max_queue_items == 0 {
            return Err(ServerError::Config(
                "player.max_recent_items and player.max_queue_items must be greater than zero"
                    .to_string(),
            ));
        }

        Ok(())
    }

    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig::new(&self.provider.search_url, &self.provider.download_url)
            .with_timeout(Duration::from_secs(self.provider.timeout_secs))
    }

    pub fn player_config(&self) -> PlayerConfig {
        PlayerConfig {
            max_recent_items: self.player.max_recent_items,
            max_queue_items: self.player.max_queue_items,
        }
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_provider() -> ProviderSettings {
    ProviderSettings {
        search_url: default_search_url(),
        download_url: default_download_url(),
        timeout_secs: default_timeout_secs(),
    }
}

fn default_search_url() -> String {
    defaults::SEARCH_URL.to_string()
}

fn default_download_url() -> String {
    defaults::DOWNLOAD_MP3_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_player() -> PlayerSettings {
    PlayerSettings {
        max_recent_items: default_max_recent_items(),
        max_queue_items: default_max_queue_items(),
        default_search: default_search(),
    }
}

fn default_max_recent_items() -> usize {
    defaults::MAX_RECENT_ITEMS
}

fn default_max_queue_items() -> usize {
    defaults::MAX_QUEUE_ITEMS
}

fn default_search() -> String {
    defaults::DEFAULT_SEARCH.to_string()
}

fn default_web() -> WebSettings {
    WebSettings {
        index_path: default_index_path(),
        static_dir: default_static_dir(),
    }
}

fn default_index_path() -> PathBuf {
    PathBuf::from("index.html")
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            provider: default_provider(),
            player: default_player(),
            web: default_web(),
        }
    }
}
