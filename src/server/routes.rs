//! HTTP handlers for the generation API.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::generation::{estimate_generation_secs, GenerationError, DEFAULT_DURATION_SECONDS};
use crate::moderation;
use crate::prompt::{compile, CreateSongParams};

use super::metrics::{self, record_generation, record_validation};
use super::state::{GuardedGenerator, ServerState};

#[derive(Deserialize, Debug)]
pub(super) struct PromptTextBody {
    pub text: String,
}

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub version: String,
}

#[derive(Serialize)]
pub(super) struct PromptPreview {
    pub prompt: String,
    pub estimated_seconds: u32,
}

#[derive(Serialize)]
pub(super) struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

pub(super) async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    Json(stats)
}

pub(super) async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub(super) async fn validate_prompt(Json(body): Json<PromptTextBody>) -> impl IntoResponse {
    let result = moderation::classify(&body.text);
    record_validation(if !result.is_valid {
        "blocked"
    } else if result.warning_level == moderation::WarningLevel::Warning {
        "warned"
    } else {
        "allowed"
    });
    Json(result)
}

pub(super) async fn prompt_feedback(Json(body): Json<PromptTextBody>) -> impl IntoResponse {
    Json(moderation::feedback(&body.text))
}

/// Compile-only preview so the UI can show the final prompt and a pacing
/// estimate without spending a generation.
pub(super) async fn preview_prompt(Json(params): Json<CreateSongParams>) -> impl IntoResponse {
    let preview = PromptPreview {
        prompt: compile(&params),
        estimated_seconds: estimate_generation_secs(
            params.duration_seconds.unwrap_or(DEFAULT_DURATION_SECONDS),
        ),
    };
    Json(preview)
}

pub(super) async fn generate_song(
    State(generator): State<GuardedGenerator>,
    Json(params): Json<CreateSongParams>,
) -> Response {
    // The gate runs client-side before submission too, but the server is the
    // enforcement point for both free-text fields.
    for text in [params.prompt.as_deref(), params.custom_lyrics.as_deref()]
        .into_iter()
        .flatten()
    {
        let verdict = moderation::classify(text);
        if !verdict.is_valid {
            record_validation("blocked");
            let body = ErrorResponse {
                error: verdict
                    .error
                    .unwrap_or_else(|| "prompt rejected by the content gate".to_string()),
                hint: None,
                suggestion: verdict.suggestion,
            };
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response();
        }
    }

    match generator.generate(&params).await {
        Ok(audio) => {
            record_generation("ok");
            ([(header::CONTENT_TYPE, audio.content_type)], audio.data).into_response()
        }
        Err(err) => {
            record_generation("failed");
            generation_error_response(err)
        }
    }
}

pub(super) async fn metrics_text() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        metrics::render(),
    )
}

/// Map the generation taxonomy onto HTTP statuses, keeping the original
/// message plus any hint or suggestion.
fn generation_error_response(err: GenerationError) -> Response {
    let status = match &err {
        GenerationError::EmptyPrompt | GenerationError::PromptRejected { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        GenerationError::BackendUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        GenerationError::Connectivity { .. }
        | GenerationError::Credential { .. }
        | GenerationError::Api { .. } => StatusCode::BAD_GATEWAY,
    };

    let body = ErrorResponse {
        hint: err.hint().map(str::to_string),
        suggestion: err.suggestion().map(str::to_string),
        error: err.to_string(),
    };

    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_formatting() {
        assert_eq!(format_uptime(Duration::from_secs(0)), "0d 00:00:00");
        assert_eq!(format_uptime(Duration::from_secs(3661)), "0d 01:01:01");
        assert_eq!(format_uptime(Duration::from_secs(90_000)), "1d 01:00:00");
    }

    #[test]
    fn error_statuses_follow_the_taxonomy() {
        let cases = [
            (GenerationError::EmptyPrompt, StatusCode::UNPROCESSABLE_ENTITY),
            (
                GenerationError::PromptRejected {
                    message: "no".to_string(),
                    suggestion: "try this".to_string(),
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                GenerationError::BackendUnavailable {
                    message: "down".to_string(),
                },
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                GenerationError::Connectivity {
                    message: "refused".to_string(),
                    hint: "start it".to_string(),
                },
                StatusCode::BAD_GATEWAY,
            ),
            (
                GenerationError::Credential {
                    message: "bad key".to_string(),
                    hint: None,
                },
                StatusCode::BAD_GATEWAY,
            ),
            (
                GenerationError::Api {
                    status: 500,
                    message: "boom".to_string(),
                },
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (err, expected) in cases {
            let response = generation_error_response(err);
            assert_eq!(response.status(), expected);
        }
    }
}
