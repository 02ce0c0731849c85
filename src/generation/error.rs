//! Error taxonomy for music generation requests.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    /// The compiled prompt came out empty; nothing was sent to the backend.
    #[error("the assembled prompt is empty; add a style description, lyrics or a title")]
    EmptyPrompt,

    /// The backend could not be reached at the transport level.
    #[error("could not reach the music backend: {message}")]
    Connectivity { message: String, hint: String },

    /// The backend refused the configured API credentials.
    #[error("the music backend rejected the API credentials: {message}")]
    Credential {
        message: String,
        /// Server-supplied remediation hint, propagated verbatim.
        hint: Option<String>,
    },

    /// The backend reported its own upstream connection failure.
    #[error("the music backend is currently unavailable: {message}")]
    BackendUnavailable { message: String },

    /// The backend refused the prompt and proposed a replacement.
    #[error("the music backend rejected the prompt: {message}")]
    PromptRejected { message: String, suggestion: String },

    /// Any other non-success response.
    #[error("generation failed with status {status}: {message}")]
    Api { status: u16, message: String },
}

impl GenerationError {
    /// Remediation hint to surface alongside the message, when one exists.
    pub fn hint(&self) -> Option<&str> {
        match self {
            GenerationError::Connectivity { hint, .. } => Some(hint),
            GenerationError::Credential { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }

    /// Replacement prompt proposed by the backend, when one exists.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            GenerationError::PromptRejected { suggestion, .. } => Some(suggestion),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_surface_only_where_defined() {
        let err = GenerationError::Connectivity {
            message: "connection refused".to_string(),
            hint: "is the backend running?".to_string(),
        };
        assert_eq!(err.hint(), Some("is the backend running?"));
        assert!(err.suggestion().is_none());

        let err = GenerationError::PromptRejected {
            message: "flagged".to_string(),
            suggestion: "try a mood description".to_string(),
        };
        assert!(err.hint().is_none());
        assert_eq!(err.suggestion(), Some("try a mood description"));

        assert!(GenerationError::EmptyPrompt.hint().is_none());
    }
}
