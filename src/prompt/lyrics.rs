//! Lyrics formatting for the compiled prompt.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Section tags the backend understands, e.g. `[Verse]`, `[Chorus 2]`.
    static ref SECTION_TAG: Regex =
        Regex::new(r"(?i)\[(Verse|Chorus|Bridge|Intro|Outro|Pre-Chorus|Hook)\s*\d*\]")
            .expect("invalid section tag pattern");
}

/// Wrap raw lyrics into tagged sections.
///
/// Lyrics that already carry a section tag pass through unchanged. Untagged
/// lyrics of up to four non-blank lines become a single `[Verse]`; longer ones
/// are split at the midpoint into `[Verse 1]` and `[Chorus]`.
pub(crate) fn format_lyrics(lyrics: &str) -> String {
    if SECTION_TAG.is_match(lyrics) {
        return lyrics.to_string();
    }

    let lines: Vec<&str> = lyrics
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() <= 4 {
        return format!("[Verse]\n{}", lines.join("\n"));
    }

    let mid = lines.len() / 2;
    format!(
        "[Verse 1]\n{}\n\n[Chorus]\n{}",
        lines[..mid].join("\n"),
        lines[mid..].join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_lyrics_pass_through_unchanged() {
        let lyrics = "[Verse 1]\nfirst line\n[Chorus]\nsecond line";
        assert_eq!(format_lyrics(lyrics), lyrics);
    }

    #[test]
    fn tag_detection_is_case_insensitive() {
        let lyrics = "[chorus]\nla la la";
        assert_eq!(format_lyrics(lyrics), lyrics);

        let lyrics = "[PRE-CHORUS 2]\nalmost there";
        assert_eq!(format_lyrics(lyrics), lyrics);
    }

    #[test]
    fn short_lyrics_become_one_verse() {
        let formatted = format_lyrics("one\ntwo\nthree");
        assert_eq!(formatted, "[Verse]\none\ntwo\nthree");
    }

    #[test]
    fn eight_lines_split_into_verse_and_chorus() {
        let lyrics = "l1\nl2\nl3\nl4\nl5\nl6\nl7\nl8";
        let formatted = format_lyrics(lyrics);
        assert_eq!(
            formatted,
            "[Verse 1]\nl1\nl2\nl3\nl4\n\n[Chorus]\nl5\nl6\nl7\nl8"
        );
    }

    #[test]
    fn odd_line_counts_split_at_the_floor() {
        let formatted = format_lyrics("a\nb\nc\nd\ne");
        assert_eq!(formatted, "[Verse 1]\na\nb\n\n[Chorus]\nc\nd\ne");
    }

    #[test]
    fn blank_lines_are_dropped_before_splitting() {
        let formatted = format_lyrics("one\n\n  \ntwo\nthree");
        assert_eq!(formatted, "[Verse]\none\ntwo\nthree");
    }
}
