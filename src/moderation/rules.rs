//! Static rule tables backing the prompt content gate.
//!
//! All tables are process-wide, read-only and built once. Blocked patterns are
//! scanned before any allow-list; scan order within the list matters because
//! the first hit decides the user-facing message.

use lazy_static::lazy_static;
use regex::Regex;

/// Category of a blocked pattern, used to pick the refusal message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockedCategory {
    ExplicitLanguage,
    CopyrightedLyrics,
}

pub struct BlockedPattern {
    pub pattern: Regex,
    pub category: BlockedCategory,
}

impl BlockedPattern {
    fn new(pattern: &str, category: BlockedCategory) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("invalid blocked pattern"),
            category,
        }
    }
}

/// A prompt with more consecutive non-blank lines than this reads like a
/// pasted lyric sheet rather than a description.
pub const MAX_CONSECUTIVE_LINES: usize = 10;

lazy_static! {
    /// Ordered blocked patterns. Explicit language first, copyright heuristics
    /// after, so profanity inside pasted lyrics reports as profanity.
    pub static ref BLOCKED_PATTERNS: Vec<BlockedPattern> = vec![
        BlockedPattern::new(
            r"(?i)\b(fuck\w*|shit\w*|bitch\w*|cunt|asshole|motherfucker|dickhead|bastard)\b",
            BlockedCategory::ExplicitLanguage,
        ),
        BlockedPattern::new(
            r"(?i)\blyrics\s+(to|of|from|by)\b",
            BlockedCategory::CopyrightedLyrics,
        ),
        BlockedPattern::new(
            r"(?i)\b(exact|full|complete|verbatim)\s+lyrics\b",
            BlockedCategory::CopyrightedLyrics,
        ),
        // A few unmistakable modern lyric lines that keep showing up in prompts.
        BlockedPattern::new(
            r"(?i)never gonna give you up",
            BlockedCategory::CopyrightedLyrics,
        ),
        BlockedPattern::new(
            r"(?i)hello from the other side",
            BlockedCategory::CopyrightedLyrics,
        ),
        BlockedPattern::new(
            r"(?i)is this the real life.{0,4}is this just fantasy",
            BlockedCategory::CopyrightedLyrics,
        ),
        BlockedPattern::new(
            r"(?i)cause baby you're a firework",
            BlockedCategory::CopyrightedLyrics,
        ),
    ];

    /// Anchored shapes that common band/song names take. Matched against the
    /// trimmed text as a whole.
    pub static ref NAME_SHAPE_PATTERNS: Vec<Regex> = vec![
        // Language article + word(s): "The Strokes", "La Roux", "Die Antwoord"
        Regex::new(r"(?i)^(the|a|an|le|la|les|el|los|las|der|die|das|il|lo)\s+[\w'&.-]+(\s+[\w'&.-]+)?$")
            .expect("invalid name shape pattern"),
        // Color / element / time-of-day + word(s): "Black Keys", "Iron Maiden", "Midnight Oil"
        Regex::new(r"(?i)^(red|blue|green|black|white|grey|gray|golden|silver|purple|crimson|scarlet|violet|neon|electric|iron|steel|velvet|midnight|morning|evening|twilight|summer|winter|autumn|spring)\s+[\w'&.-]+(\s+[\w'&.-]+)?$")
            .expect("invalid name shape pattern"),
        // Word + group noun: "Beach Boys", "Arcade Fire Collective"
        Regex::new(r"(?i)^[\w'&.-]+\s+(boys?|girls?|brothers?|sisters?|band|club|crew|project|collective|ensemble|orchestra|quartet|trio)$")
            .expect("invalid name shape pattern"),
    ];
}

/// Public-domain and well-known classical vocabulary. Substring containment on
/// lower-cased text; short entries can match inside longer unrelated words,
/// which is an accepted weakness of the gate.
pub const CLASSICAL_ALLOWLIST: &[&str] = &[
    "pachelbel",
    "canon in d",
    "beethoven",
    "moonlight sonata",
    "für elise",
    "fur elise",
    "ode to joy",
    "mozart",
    "eine kleine nachtmusik",
    "requiem",
    "bach",
    "brandenburg",
    "air on the g string",
    "vivaldi",
    "four seasons",
    "chopin",
    "nocturne",
    "debussy",
    "clair de lune",
    "satie",
    "gymnopedie",
    "tchaikovsky",
    "swan lake",
    "nutcracker",
    "greensleeves",
    "scarborough fair",
    "amazing grace",
    "symphony",
    "concerto",
    "sonata",
];

/// Curated genre/instrument/mood vocabulary for the terminology-ratio rule.
pub const MUSICAL_TERMS: &[&str] = &[
    // genres
    "jazz", "blues", "rock", "pop", "folk", "funk", "soul", "disco", "house",
    "techno", "trance", "ambient", "lofi", "classical", "country", "reggae",
    "ska", "metal", "punk", "grunge", "indie", "hip", "hop", "rap", "trap",
    "drill", "edm", "dubstep", "garage", "synthwave", "vaporwave", "orchestral",
    "acoustic", "electronic", "swing", "gospel", "latin", "salsa", "bossa",
    // instruments
    "piano", "guitar", "drums", "bass", "violin", "cello", "viola", "synth",
    "saxophone", "trumpet", "trombone", "flute", "clarinet", "harp", "organ",
    "ukulele", "banjo", "mandolin", "strings", "brass", "percussion", "pads",
    // moods and craft terms
    "upbeat", "mellow", "chill", "dreamy", "moody", "energetic", "melancholic",
    "uplifting", "groovy", "catchy", "soulful", "cinematic", "atmospheric",
    "melodic", "rhythmic", "tempo", "beat", "groove", "riff", "hook", "chorus",
    "verse", "harmony", "melody", "bassline", "dance", "vibe", "vibes",
    "anthem", "ballad", "instrumental", "vocal", "vocals", "remix",
];
