/// Tunebridge - music search/playback proxy server
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tunebridge_core::{defaults::SCROLL_THRESHOLD, needs_scrolling};
use tunebridge_provider::{MusicProvider, ProviderClient};
use tunebridge_server::{config::ServerConfig, create_router, state::AppState};

#[derive(Parser)]
#[command(name = "tunebridge")]
#[command(about = "Music search and playback proxy server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "TUNEBRIDGE_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Run a single search against the provider and print the results
    Search {
        /// Search query
        query: String,
        /// Configuration file path
        #[arg(short, long, env = "TUNEBRIDGE_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "tunebridge_server=info,tunebridge_provider=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::Search { query, config } => {
            search(&query, config).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<ServerConfig> {
    let config = ServerConfig::load_from(path.as_deref())?;
    config.validate()?;
    Ok(config)
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    tracing::info!("Starting Tunebridge");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);
    tracing::info!("Provider search: {}", config.provider.search_url);
    tracing::info!("Provider download: {}", config.provider.download_url);

    let provider: Arc<dyn MusicProvider> = Arc::new(ProviderClient::new(config.provider_config())?);

    let app_state = AppState::new(
        provider,
        config.player_config(),
        config.player.default_search.clone(),
    );

    let app = create_router(app_state, &config.web);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn search(query: &str, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let client = ProviderClient::new(config.provider_config())?;

    let outcome = client.search(query).await?;
    if !outcome.status {
        println!("No results for {:?}", query);
        return Ok(());
    }

    println!("Results for {:?}:", query);
    for (index, song) in outcome.songs.iter().enumerate() {
        let title = if needs_scrolling(&song.title, SCROLL_THRESHOLD) {
            let short: String = song.title.chars().take(SCROLL_THRESHOLD).collect();
            format!("{}...", short)
        } else {
            song.title.clone()
        };
        println!(
            "{:>3}  {} - {} [{}]",
            index,
            title,
            song.artist,
            song.timestamp.as_deref().unwrap_or("?:??")
        );
    }

    Ok(())
}
