//! HTTP client for the external music generation backend.

use super::error::GenerationError;
use super::models::{
    BackendErrorBody, GeneratedAudio, GenerationRequest, CODE_CONNECTION_ERROR,
    CODE_INVALID_API_KEY, CODE_MISSING_API_KEY,
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

const CONNECTIVITY_HINT: &str =
    "check that the music backend is running and that --backend-url points at it";

/// Boundary to the text-to-music service. The server only ever issues one
/// request per generation through this trait; tests substitute their own
/// implementation.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedAudio, GenerationError>;
}

/// reqwest-backed implementation of [`GenerationBackend`].
pub struct MusicBackendClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl MusicBackendClient {
    /// Create a new backend client.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the generation service (e.g., "http://localhost:8100")
    /// * `api_key` - Optional API key; without one the backend answers MISSING_API_KEY
    /// * `timeout_sec` - Request timeout in seconds
    pub fn new(base_url: String, api_key: Option<String>, timeout_sec: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()
            .expect("Failed to create HTTP client");

        // Ensure base_url doesn't have trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        Self {
            client,
            base_url,
            api_key,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if the generation service is reachable.
    pub async fn health_check(&self) -> Result<(), GenerationError> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await.map_err(|err| {
            GenerationError::Connectivity {
                message: err.to_string(),
                hint: CONNECTIVITY_HINT.to_string(),
            }
        })?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(GenerationError::Api {
                status: response.status().as_u16(),
                message: "health check failed".to_string(),
            })
        }
    }

    /// Map a non-success response body onto the error taxonomy. Credential
    /// codes win over everything; a `suggestion` marks a prompt rejection no
    /// matter what unknown `code` accompanies it.
    fn classify_error(status: u16, body: BackendErrorBody) -> GenerationError {
        let message = body
            .error
            .unwrap_or_else(|| format!("backend returned status {}", status));

        match body.code.as_deref() {
            Some(CODE_INVALID_API_KEY) | Some(CODE_MISSING_API_KEY) => {
                GenerationError::Credential {
                    message,
                    hint: body.hint,
                }
            }
            Some(CODE_CONNECTION_ERROR) => GenerationError::BackendUnavailable { message },
            _ => match body.suggestion {
                Some(suggestion) => GenerationError::PromptRejected {
                    message,
                    suggestion,
                },
                None => GenerationError::Api { status, message },
            },
        }
    }
}

#[async_trait]
impl GenerationBackend for MusicBackendClient {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedAudio, GenerationError> {
        let url = format!("{}/v1/music/generate", self.base_url);

        debug!(
            prompt_chars = request.prompt.chars().count(),
            duration_seconds = request.duration_seconds,
            instrumental = request.instrumental,
            "Submitting generation request"
        );

        let mut builder = self.client.post(&url).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.header("x-api-key", key);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| GenerationError::Connectivity {
                message: err.to_string(),
                hint: CONNECTIVITY_HINT.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .json::<BackendErrorBody>()
                .await
                .unwrap_or_default();
            warn!(status = status.as_u16(), "Music backend returned an error");
            return Err(Self::classify_error(status.as_u16(), body));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("audio/mpeg")
            .to_string();

        let data = response
            .bytes()
            .await
            .map_err(|err| GenerationError::Connectivity {
                message: err.to_string(),
                hint: CONNECTIVITY_HINT.to_string(),
            })?
            .to_vec();

        debug!(bytes = data.len(), "Received generated audio");

        Ok(GeneratedAudio { data, content_type })
    }
}
