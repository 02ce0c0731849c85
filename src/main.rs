use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use strofa_server::config::{AppConfig, CliConfig, FileConfig};
use strofa_server::generation::{MusicBackendClient, SongGenerator};
use strofa_server::server::{metrics, run_server, RequestsLoggingLevel, ServerConfig};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Base URL of the music generation backend.
    #[clap(long)]
    pub backend_url: Option<String>,

    /// API key for the music generation backend.
    #[clap(long)]
    pub api_key: Option<String>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// Timeout in seconds for backend generation requests.
    #[clap(long, default_value_t = 300)]
    pub backend_timeout_sec: u64,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Path to a TOML config file; its values override CLI arguments.
    #[clap(long)]
    pub config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };

    let cli_config = CliConfig {
        backend_url: cli_args.backend_url,
        api_key: cli_args.api_key,
        port: cli_args.port,
        backend_timeout_sec: cli_args.backend_timeout_sec,
        logging_level: cli_args.logging_level,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    info!("Initializing metrics...");
    metrics::init_metrics();

    let backend = Arc::new(MusicBackendClient::new(
        config.backend_url.clone(),
        config.api_key.clone(),
        config.backend_timeout_sec,
    ));
    info!("Music backend configured at {}", backend.base_url());
    if config.api_key.is_none() {
        warn!("No API key configured; the backend will refuse generation requests");
    }
    if let Err(err) = backend.health_check().await {
        warn!("Music backend health check failed: {}", err);
    }

    let generator = Arc::new(SongGenerator::new(backend));

    let server_config = ServerConfig {
        port: config.port,
        requests_logging_level: config.logging_level.clone(),
    };

    info!("Ready to serve at port {}!", config.port);
    run_server(server_config, generator).await
}
