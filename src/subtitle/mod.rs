//! Subtitle normalization
//!
//! Strips cue numbers and timing lines from SRT and WebVTT captions, leaving
//! flat prose for the summarizer. Matching is lenient: lines that do not look
//! like metadata are kept as caption text, and nothing here returns an error.

pub mod srt;
pub mod vtt;

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::DigestError;

/// Supported caption formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubtitleFormat {
    /// SubRip (`HH:MM:SS,mmm` timings)
    Srt,
    /// WebVTT (`HH:MM:SS.mmm` timings)
    Vtt,
}

impl SubtitleFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubtitleFormat::Srt => "srt",
            SubtitleFormat::Vtt => "vtt",
        }
    }

    /// Detect the format from a file extension
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "srt" => Some(SubtitleFormat::Srt),
            "vtt" => Some(SubtitleFormat::Vtt),
            _ => None,
        }
    }

    /// Detect the format from a MIME type
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim().to_lowercase();
        match essence.as_str() {
            "application/x-subrip" | "text/srt" | "text/x-srt" => Some(SubtitleFormat::Srt),
            "text/vtt" => Some(SubtitleFormat::Vtt),
            _ => None,
        }
    }
}

impl std::str::FromStr for SubtitleFormat {
    type Err = DigestError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "srt" | "subrip" => Ok(SubtitleFormat::Srt),
            "vtt" | "webvtt" => Ok(SubtitleFormat::Vtt),
            other => Err(DigestError::unknown_format(other)),
        }
    }
}

impl std::fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert caption text to plain prose
pub fn normalize_subtitle(format: SubtitleFormat, raw: &str) -> String {
    match format {
        SubtitleFormat::Srt => srt::normalize(raw),
        SubtitleFormat::Vtt => vtt::normalize(raw),
    }
}

static BLOCK_SEPARATOR_RE: OnceLock<Regex> = OnceLock::new();

/// Split caption text into cue blocks on blank lines
pub(crate) fn blocks(text: &str) -> regex::Split<'static, '_> {
    BLOCK_SEPARATOR_RE
        .get_or_init(|| Regex::new(r"\n\n+").expect("block separator regex"))
        .split(text)
}

/// Join cleaned blocks with spaces and collapse all whitespace runs
pub(crate) fn join_blocks<'a>(blocks: impl Iterator<Item = std::borrow::Cow<'a, str>>) -> String {
    let joined = blocks.collect::<Vec<_>>().join(" ");
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!("srt".parse::<SubtitleFormat>().unwrap(), SubtitleFormat::Srt);
        assert_eq!("WebVTT".parse::<SubtitleFormat>().unwrap(), SubtitleFormat::Vtt);
        assert!(matches!(
            "ass".parse::<SubtitleFormat>(),
            Err(DigestError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(SubtitleFormat::from_path("call.SRT"), Some(SubtitleFormat::Srt));
        assert_eq!(SubtitleFormat::from_path("dir/call.vtt"), Some(SubtitleFormat::Vtt));
        assert_eq!(SubtitleFormat::from_path("notes.txt"), None);
        assert_eq!(SubtitleFormat::from_path("no_extension"), None);
    }

    #[test]
    fn test_format_from_mime() {
        assert_eq!(
            SubtitleFormat::from_mime("application/x-subrip"),
            Some(SubtitleFormat::Srt)
        );
        assert_eq!(
            SubtitleFormat::from_mime("text/vtt; charset=utf-8"),
            Some(SubtitleFormat::Vtt)
        );
        assert_eq!(SubtitleFormat::from_mime("text/plain"), None);
    }

    #[test]
    fn test_normalize_dispatch() {
        let srt = "1\n00:00:01,000 --> 00:00:02,000\nHello world.\n\n2\n00:00:03,000 --> 00:00:04,000\nGoodbye.";
        assert_eq!(normalize_subtitle(SubtitleFormat::Srt, srt), "Hello world. Goodbye.");

        let vtt = "WEBVTT\n\n00:00:01.000 --> 00:00:02.000\nHello world.";
        assert_eq!(normalize_subtitle(SubtitleFormat::Vtt, vtt), "Hello world.");
    }

    #[test]
    fn test_join_blocks_collapses_whitespace() {
        let parts = ["  a\n b ", "", "c\t\td  "].into_iter().map(std::borrow::Cow::Borrowed);
        assert_eq!(join_blocks(parts), "a b c d");
    }
}
