use super::RequestsLoggingLevel;

/// Runtime settings the HTTP layer needs.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub requests_logging_level: RequestsLoggingLevel,
}
