//! Generation request orchestration and the music backend client.
//!
//! The one place in the core where execution can block: a single outbound
//! HTTP call per generation, with the outcome mapped into a typed error
//! taxonomy. Compilation and policy checks stay synchronous and pure.

mod client;
mod error;
mod models;
mod orchestrator;

pub use client::{GenerationBackend, MusicBackendClient};
pub use error::GenerationError;
pub use models::{
    BackendErrorBody, GeneratedAudio, GenerationRequest, CODE_CONNECTION_ERROR,
    CODE_INVALID_API_KEY, CODE_MISSING_API_KEY, DEFAULT_DURATION_SECONDS, OUTPUT_FORMAT,
};
pub use orchestrator::{estimate_generation_secs, SongGenerator};

#[cfg(feature = "mock")]
pub use client::MockGenerationBackend;
