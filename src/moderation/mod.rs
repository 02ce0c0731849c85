//! Content policy gate for free-text generation prompts.
//!
//! A stateless, heuristic classifier: it decides whether a prompt is allowed,
//! allowed-with-warning or blocked before anything is sent to the music
//! backend. It is an ordered, short-circuiting rule chain over static tables,
//! not an ML model. It will never catch every profanity or copyrighted lyric,
//! and the evaluation order is part of the observable contract.

mod rules;

pub use rules::{BlockedCategory, MAX_CONSECUTIVE_LINES};

use rules::{BLOCKED_PATTERNS, CLASSICAL_ALLOWLIST, MUSICAL_TERMS, NAME_SHAPE_PATTERNS};
use serde::{Deserialize, Serialize};

/// Fraction of musical-vocabulary tokens above which a prompt is considered a
/// plain style description.
const MUSICAL_TERM_RATIO_THRESHOLD: f64 = 0.3;

/// Below this many characters (and without a newline) a prompt is too short to
/// be a pasted lyric.
const SHORT_PROMPT_CHARS: usize = 200;

/// Above this many characters the prompt is allowed but flagged as diluted.
const LONG_PROMPT_CHARS: usize = 500;

const EXPLICIT_LANGUAGE_ERROR: &str =
    "Your prompt contains explicit language that can't be used for generation. \
     Please rephrase it without profanity.";

const COPYRIGHTED_LYRICS_ERROR: &str =
    "Your prompt looks like copyrighted lyrics, which can't be used for generation.";

const LONG_PROMPT_SUGGESTION: &str =
    "Long prompts tend to dilute the result. Try condensing your description to the \
     most important mood, genre and instrumentation cues.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningLevel {
    None,
    Info,
    Warning,
    Error,
}

/// Outcome of classifying one prompt. Produced fresh per call, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    pub warning_level: WarningLevel,
}

impl ValidationResult {
    fn allowed() -> Self {
        Self {
            is_valid: true,
            error: None,
            suggestion: None,
            warning_level: WarningLevel::None,
        }
    }

    fn blocked(error: &str, suggestion: String) -> Self {
        Self {
            is_valid: false,
            error: Some(error.to_string()),
            suggestion: Some(suggestion),
            warning_level: WarningLevel::Error,
        }
    }

    fn warned(suggestion: &str) -> Self {
        Self {
            is_valid: true,
            error: None,
            suggestion: Some(suggestion.to_string()),
            warning_level: WarningLevel::Warning,
        }
    }
}

/// Status carried by [`feedback`], shaped for direct UI consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    Valid,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptFeedback {
    pub status: FeedbackStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Classify a free-text prompt. Total and pure: never panics for any string
/// input, and identical input always yields the same result.
///
/// The rule chain short-circuits on the first match:
/// 1. empty text is allowed;
/// 2. blocked patterns (profanity, lyric paste heuristics) refuse the prompt;
/// 3. classical vocabulary allows it;
/// 4. a high ratio of musical terminology allows it;
/// 5. common band/song name shapes allow it;
/// 6. short single-line prompts are allowed;
/// 7. very long prompts are allowed with an advisory warning.
pub fn classify(text: &str) -> ValidationResult {
    if text.trim().is_empty() {
        return ValidationResult::allowed();
    }

    for blocked in BLOCKED_PATTERNS.iter() {
        if blocked.pattern.is_match(text) {
            let error = match blocked.category {
                BlockedCategory::ExplicitLanguage => EXPLICIT_LANGUAGE_ERROR,
                BlockedCategory::CopyrightedLyrics => COPYRIGHTED_LYRICS_ERROR,
            };
            return ValidationResult::blocked(error, generate_suggestion(text));
        }
    }

    if max_consecutive_lines(text) > MAX_CONSECUTIVE_LINES {
        return ValidationResult::blocked(COPYRIGHTED_LYRICS_ERROR, generate_suggestion(text));
    }

    let lowered = text.to_lowercase();
    if CLASSICAL_ALLOWLIST.iter().any(|work| lowered.contains(work)) {
        return ValidationResult::allowed();
    }

    if musical_term_ratio(&lowered) > MUSICAL_TERM_RATIO_THRESHOLD {
        return ValidationResult::allowed();
    }

    let trimmed = text.trim();
    if NAME_SHAPE_PATTERNS.iter().any(|shape| shape.is_match(trimmed)) {
        return ValidationResult::allowed();
    }

    let chars = trimmed.chars().count();
    if chars < SHORT_PROMPT_CHARS && !trimmed.contains('\n') {
        return ValidationResult::allowed();
    }

    if chars > LONG_PROMPT_CHARS {
        return ValidationResult::warned(LONG_PROMPT_SUGGESTION);
    }

    ValidationResult::allowed()
}

/// Derive field-level feedback from [`classify`], collapsing the result into a
/// status plus one optional message.
pub fn feedback(text: &str) -> PromptFeedback {
    let result = classify(text);
    if !result.is_valid {
        PromptFeedback {
            status: FeedbackStatus::Error,
            message: result.error,
        }
    } else if result.warning_level == WarningLevel::Warning {
        PromptFeedback {
            status: FeedbackStatus::Warning,
            message: result.suggestion,
        }
    } else {
        PromptFeedback {
            status: FeedbackStatus::Valid,
            message: None,
        }
    }
}

/// Pick one canned rewrite suggestion for a refused prompt. First match wins.
pub fn generate_suggestion(text: &str) -> String {
    if text.lines().count() > 5 {
        return "Instead of pasting lyrics, describe the feeling and story you want, \
                e.g. 'a bittersweet indie ballad about leaving home'."
            .to_string();
    }

    let lowered = text.to_lowercase();
    if lowered.contains("song") || lowered.contains("track") || lowered.contains("single") {
        return "Describe the mood and style you're after, e.g. 'a dreamy synth-pop \
                track with warm analog pads and a steady beat'."
            .to_string();
    }

    "Describe genre, mood, instruments and tempo, e.g. 'upbeat funk with slap bass \
     and punchy horns'."
        .to_string()
}

/// Longest run of consecutive non-blank lines.
fn max_consecutive_lines(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for line in text.lines() {
        if line.trim().is_empty() {
            current = 0;
        } else {
            current += 1;
            longest = longest.max(current);
        }
    }
    longest
}

/// Fraction of tokens (longer than two characters) that match the musical
/// vocabulary in either substring direction. Expects lower-cased input.
fn musical_term_ratio(lowered: &str) -> f64 {
    let tokens: Vec<&str> = lowered
        .split_whitespace()
        .filter(|token| token.chars().count() > 2)
        .collect();
    if tokens.is_empty() {
        return 0.0;
    }

    let matching = tokens
        .iter()
        .filter(|token| {
            MUSICAL_TERMS
                .iter()
                .any(|term| token.contains(term) || term.contains(*token))
        })
        .count();

    matching as f64 / tokens.len() as f64
}
