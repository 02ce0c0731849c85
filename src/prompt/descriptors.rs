//! Descriptor tables: immutable enum-to-phrase mappings used during prompt
//! compilation. An empty phrase means "let the backend decide".

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VocalStyle {
    #[default]
    Auto,
    Male,
    Female,
    Duet,
    Choir,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentalPreset {
    Cinematic,
    Lofi,
    Ambient,
    Jazz,
    Electronic,
    Acoustic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Intro,
    Verse,
    Buildup,
    Drop,
    Breakdown,
    Bridge,
    Loop,
    Outro,
}

/// One entry of the instrumental arrangement, in playback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureSection {
    #[serde(rename = "type")]
    pub section_type: SectionType,
}

/// Creativity slider bands. The middle band is neutral and omitted from the
/// compiled prompt.
pub(crate) fn creativity_descriptor(value: u8) -> &'static str {
    match value {
        0..=19 => "conventional, familiar sound",
        20..=39 => "accessible sound with subtle creative touches",
        40..=59 => "",
        60..=79 => "creative and distinctive sound",
        _ => "experimental, boundary-pushing sound",
    }
}

/// Energy slider bands, chill through intense. Same shape as creativity with
/// an independent vocabulary.
pub(crate) fn energy_descriptor(value: u8) -> &'static str {
    match value {
        0..=19 => "chill, laid-back energy",
        20..=39 => "relaxed, easygoing energy",
        40..=59 => "",
        60..=79 => "energetic and driving",
        _ => "intense, high-octane energy",
    }
}

pub(crate) fn vocal_descriptor(style: VocalStyle) -> &'static str {
    match style {
        VocalStyle::Auto => "",
        VocalStyle::Male => "with male vocals",
        VocalStyle::Female => "with female vocals",
        VocalStyle::Duet => "with a male and female vocal duet",
        VocalStyle::Choir => "with layered choir vocals",
    }
}

pub(crate) fn preset_descriptor(preset: InstrumentalPreset) -> &'static str {
    match preset {
        InstrumentalPreset::Cinematic => "epic cinematic orchestral score",
        InstrumentalPreset::Lofi => "lo-fi hip hop beats",
        InstrumentalPreset::Ambient => "ambient atmospheric soundscapes",
        InstrumentalPreset::Jazz => "smooth jazz instrumentation",
        InstrumentalPreset::Electronic => "polished electronic production",
        InstrumentalPreset::Acoustic => "warm acoustic arrangement",
    }
}

pub(crate) fn section_descriptor(section: SectionType) -> &'static str {
    match section {
        SectionType::Intro => "atmospheric intro",
        SectionType::Verse => "melodic verse",
        SectionType::Buildup => "gradual buildup with rising tension",
        SectionType::Drop => "powerful drop with energy release",
        SectionType::Breakdown => "stripped-back breakdown",
        SectionType::Bridge => "contrasting bridge",
        SectionType::Loop => "hypnotic repeating loop",
        SectionType::Outro => "gentle fading outro",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_bands_are_empty() {
        assert_eq!(creativity_descriptor(40), "");
        assert_eq!(creativity_descriptor(59), "");
        assert_eq!(energy_descriptor(50), "");
    }

    #[test]
    fn band_edges() {
        assert!(creativity_descriptor(19).starts_with("conventional"));
        assert!(creativity_descriptor(20).starts_with("accessible"));
        assert!(creativity_descriptor(60).starts_with("creative"));
        assert!(creativity_descriptor(80).starts_with("experimental"));
        assert!(creativity_descriptor(100).starts_with("experimental"));
        assert!(energy_descriptor(0).starts_with("chill"));
        assert!(energy_descriptor(100).starts_with("intense"));
    }

    #[test]
    fn auto_vocal_style_has_no_specific_phrase() {
        assert_eq!(vocal_descriptor(VocalStyle::Auto), "");
        assert!(!vocal_descriptor(VocalStyle::Duet).is_empty());
    }

    #[test]
    fn serde_names_are_lowercase() {
        let preset: InstrumentalPreset = serde_json::from_str("\"lofi\"").unwrap();
        assert_eq!(preset, InstrumentalPreset::Lofi);
        let section: StructureSection = serde_json::from_str(r#"{"type":"drop"}"#).unwrap();
        assert_eq!(section.section_type, SectionType::Drop);
        let style: VocalStyle = serde_json::from_str("\"choir\"").unwrap();
        assert_eq!(style, VocalStyle::Choir);
    }
}
