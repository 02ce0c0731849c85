//! Wire models for the music generation backend.

use serde::{Deserialize, Serialize};

/// Output encoding requested from the backend for every generation.
pub const OUTPUT_FORMAT: &str = "mp3_44100_128";

/// Track length used when the caller does not specify one.
pub const DEFAULT_DURATION_SECONDS: u32 = 60;

/// Error codes the backend is known to emit.
pub const CODE_INVALID_API_KEY: &str = "INVALID_API_KEY";
pub const CODE_MISSING_API_KEY: &str = "MISSING_API_KEY";
pub const CODE_CONNECTION_ERROR: &str = "CONNECTION_ERROR";

/// The single outbound request body per generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub duration_seconds: u32,
    pub instrumental: bool,
    pub output_format: &'static str,
}

/// Structured error body returned by the backend on non-success responses.
/// Every field is optional; unknown shapes deserialize to all-`None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub suggestion: Option<String>,
}

/// Raw audio as returned by the backend. No decoding happens on this side.
#[derive(Debug, Clone)]
pub struct GeneratedAudio {
    pub data: Vec<u8>,
    pub content_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_fixed_output_format() {
        let request = GenerationRequest {
            prompt: "warm jazz".to_string(),
            duration_seconds: 60,
            instrumental: false,
            output_format: OUTPUT_FORMAT,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["prompt"], "warm jazz");
        assert_eq!(json["duration_seconds"], 60);
        assert_eq!(json["instrumental"], false);
        assert_eq!(json["output_format"], "mp3_44100_128");
    }

    #[test]
    fn error_body_tolerates_unknown_shapes() {
        let body: BackendErrorBody = serde_json::from_str(r#"{"unexpected": 1}"#).unwrap();
        assert!(body.error.is_none());
        assert!(body.code.is_none());

        let body: BackendErrorBody =
            serde_json::from_str(r#"{"error": "nope", "code": "INVALID_API_KEY", "hint": "rotate it"}"#)
                .unwrap();
        assert_eq!(body.code.as_deref(), Some(CODE_INVALID_API_KEY));
        assert_eq!(body.hint.as_deref(), Some("rotate it"));
    }
}
