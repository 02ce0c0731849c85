//! Submission pipeline: compile the parameters, then hand the prompt to the
//! backend exactly once.

use super::client::GenerationBackend;
use super::error::GenerationError;
use super::models::{GeneratedAudio, GenerationRequest, DEFAULT_DURATION_SECONDS, OUTPUT_FORMAT};
use crate::prompt::{compile, CreateSongParams};
use std::sync::Arc;
use tracing::info;

pub struct SongGenerator {
    backend: Arc<dyn GenerationBackend>,
}

impl SongGenerator {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self { backend }
    }

    /// Compile the parameters and submit one generation request.
    ///
    /// Fails fast with [`GenerationError::EmptyPrompt`] when the compiled
    /// string is empty or whitespace, before any network call. No retries, no
    /// fan-out: at most one in-flight request per invocation, cancelled by
    /// dropping the returned future.
    pub async fn generate(
        &self,
        params: &CreateSongParams,
    ) -> Result<GeneratedAudio, GenerationError> {
        let request = build_request(params)?;

        info!(
            duration_seconds = request.duration_seconds,
            instrumental = request.instrumental,
            "Submitting compiled prompt to the music backend"
        );

        self.backend.generate(&request).await
    }
}

/// Compile and wrap the parameters, refusing an empty prompt.
fn build_request(params: &CreateSongParams) -> Result<GenerationRequest, GenerationError> {
    let prompt = compile(params);
    if prompt.trim().is_empty() {
        return Err(GenerationError::EmptyPrompt);
    }

    Ok(GenerationRequest {
        prompt,
        duration_seconds: params.duration_seconds.unwrap_or(DEFAULT_DURATION_SECONDS),
        instrumental: params.is_instrumental,
        output_format: OUTPUT_FORMAT,
    })
}

/// Rough wall-clock estimate, in seconds, for generating `duration_seconds`
/// of audio: ceil(duration x 1.5) + 10. Display-only pacing hint for progress
/// UIs; nothing depends on it for correctness.
pub fn estimate_generation_secs(duration_seconds: u32) -> u32 {
    (duration_seconds * 3).div_ceil(2) + 10
}
