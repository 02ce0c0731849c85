mod file_config;

pub use file_config::FileConfig;

use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub backend_url: Option<String>,
    pub api_key: Option<String>,
    pub port: u16,
    pub backend_timeout_sec: u64,
    pub logging_level: RequestsLoggingLevel,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend_url: String,
    pub api_key: Option<String>,
    pub port: u16,
    pub backend_timeout_sec: u64,
    pub logging_level: RequestsLoggingLevel,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let backend_url = file
            .backend_url
            .or_else(|| cli.backend_url.clone())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "backend_url must be specified via --backend-url or in the config file"
                )
            })?;
        if backend_url.trim().is_empty() {
            bail!("backend_url must not be empty");
        }

        let api_key = file.api_key.or_else(|| cli.api_key.clone());
        let port = file.port.unwrap_or(cli.port);
        let backend_timeout_sec = file.backend_timeout_sec.unwrap_or(cli.backend_timeout_sec);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        Ok(Self {
            backend_url,
            api_key,
            port,
            backend_timeout_sec,
            logging_level,
        })
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
