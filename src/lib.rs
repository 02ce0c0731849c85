//! Strofa Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod config;
pub mod generation;
pub mod moderation;
pub mod prompt;
pub mod server;

// Re-export commonly used types for convenience
pub use generation::{
    estimate_generation_secs, GenerationBackend, GenerationError, MusicBackendClient, SongGenerator,
};
pub use moderation::{classify, feedback, PromptFeedback, ValidationResult, WarningLevel};
pub use prompt::{compile, CreateSongParams};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
