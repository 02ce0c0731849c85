//! Deterministic prompt compiler.
//!
//! Turns structured generation parameters into the single natural-language
//! instruction the music backend consumes. The backend weighs earlier cues
//! more heavily, so the segment order here is a contract: title first, style,
//! slider descriptors, vocal cue, tempo and key, arrangement or lyrics, and
//! the exclusion clause always last.

mod descriptors;
mod lyrics;

pub use descriptors::{InstrumentalPreset, SectionType, StructureSection, VocalStyle};

use descriptors::{
    creativity_descriptor, energy_descriptor, preset_descriptor, section_descriptor,
    vocal_descriptor,
};
use lyrics::format_lyrics;
use serde::{Deserialize, Serialize};

/// Everything the UI collects for one song. Deserialized with defaults so
/// partial request bodies work.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateSongParams {
    pub prompt: Option<String>,
    pub custom_style: Option<String>,
    pub custom_title: Option<String>,
    pub custom_lyrics: Option<String>,
    pub is_instrumental: bool,
    pub vocal_style: VocalStyle,
    /// 0..=100 slider; the middle band compiles to nothing.
    pub creativity: u8,
    /// 0..=100 slider; the middle band compiles to nothing.
    pub energy: u8,
    pub bpm: Option<u16>,
    pub key_signature: Option<String>,
    pub instrumental_preset: Option<InstrumentalPreset>,
    pub instruments: Vec<String>,
    pub structure_sections: Vec<StructureSection>,
    pub exclude_styles: Option<String>,
    pub duration_seconds: Option<u32>,
}

impl Default for CreateSongParams {
    fn default() -> Self {
        Self {
            prompt: None,
            custom_style: None,
            custom_title: None,
            custom_lyrics: None,
            is_instrumental: false,
            vocal_style: VocalStyle::Auto,
            creativity: 50,
            energy: 50,
            bpm: None,
            key_signature: None,
            instrumental_preset: None,
            instruments: Vec::new(),
            structure_sections: Vec::new(),
            exclude_styles: None,
            duration_seconds: None,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Compile the parameters into one prompt string. Pure and deterministic;
/// never panics. An all-empty result is valid output; detecting it is the
/// caller's responsibility.
pub fn compile(params: &CreateSongParams) -> String {
    let mut segments: Vec<String> = Vec::new();

    if let Some(style) = non_empty(params.custom_style.as_deref()) {
        segments.push(style.to_string());
    } else if let Some(prompt) = non_empty(params.prompt.as_deref()) {
        segments.push(prompt.to_string());
    }

    let creativity = creativity_descriptor(params.creativity);
    if !creativity.is_empty() {
        segments.push(creativity.to_string());
    }

    let energy = energy_descriptor(params.energy);
    if !energy.is_empty() {
        segments.push(energy.to_string());
    }

    if !params.is_instrumental {
        // A non-instrumental request always carries a vocal cue, even when the
        // style is auto and has no specific descriptor.
        let vocal = vocal_descriptor(params.vocal_style);
        if vocal.is_empty() {
            segments.push("with vocals".to_string());
        } else {
            segments.push(vocal.to_string());
        }
    }

    if let Some(bpm) = params.bpm {
        segments.push(format!("{} BPM", bpm));
    }

    if let Some(key) = non_empty(params.key_signature.as_deref()) {
        segments.push(format!("in {}", key));
    }

    if params.is_instrumental {
        segments.push("instrumental only, no vocals".to_string());

        if let Some(preset) = params.instrumental_preset {
            segments.push(preset_descriptor(preset).to_string());
        }

        if !params.instruments.is_empty() {
            segments.push(format!("featuring {}", params.instruments.join(", ")));
        }

        if !params.structure_sections.is_empty() {
            let phases: Vec<&str> = params
                .structure_sections
                .iter()
                .map(|section| section_descriptor(section.section_type))
                .collect();
            segments.push(format!("structure: {}", phases.join(", then ")));
        }
    } else if let Some(raw_lyrics) = non_empty(params.custom_lyrics.as_deref()) {
        // Newline prefix so the joined output places lyrics on their own
        // lines; the normalization pass below swallows the preceding comma.
        segments.push(format!("\n{}", format_lyrics(raw_lyrics)));
    }

    if let Some(title) = non_empty(params.custom_title.as_deref()) {
        segments.insert(0, format!("Song: \"{}\"", title));
    }

    if let Some(exclude) = non_empty(params.exclude_styles.as_deref()) {
        segments.push(format!("avoid: {}", exclude));
    }

    segments.join(", ").replace(", \n", "\n")
}
