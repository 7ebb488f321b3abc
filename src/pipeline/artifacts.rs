//! Pipeline inputs and outputs.
//!
//! [`Transcript`] is what callers hand in: plain text or caption text in a
//! known subtitle format. [`Digest`] is what they get back.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::errors::{DigestError, Result};
use crate::subtitle::{normalize_subtitle, SubtitleFormat};

/// Raw transcript text as supplied by the acquisition layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transcript<'a> {
    /// Prose, used as is
    Plain(&'a str),
    /// Caption text that needs its timing metadata stripped
    Subtitle(SubtitleFormat, &'a str),
}

impl<'a> Transcript<'a> {
    /// Classify a body by MIME type.
    ///
    /// Audio and video are rejected: they must be transcribed before they
    /// reach this crate.
    pub fn from_mime(mime: &str, body: &'a str) -> Result<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim().to_lowercase();
        if essence.starts_with("audio/") || essence.starts_with("video/") {
            return Err(DigestError::UnsupportedMedia(essence));
        }
        if let Some(format) = SubtitleFormat::from_mime(&essence) {
            return Ok(Transcript::Subtitle(format, body));
        }
        if essence.starts_with("text/") {
            return Ok(Transcript::Plain(body));
        }
        Err(DigestError::unknown_format(essence))
    }

    /// Classify a body by file name, treating unknown extensions as prose
    pub fn from_file_name(name: &str, body: &'a str) -> Self {
        match SubtitleFormat::from_path(name) {
            Some(format) => Transcript::Subtitle(format, body),
            None => Transcript::Plain(body),
        }
    }

    /// The raw text, before normalization
    pub fn raw(&self) -> &'a str {
        match *self {
            Transcript::Plain(text) | Transcript::Subtitle(_, text) => text,
        }
    }

    /// Plain prose ready for sentence splitting
    pub fn normalized(&self) -> Cow<'a, str> {
        match *self {
            Transcript::Plain(text) => Cow::Borrowed(text),
            Transcript::Subtitle(format, raw) => Cow::Owned(normalize_subtitle(format, raw)),
        }
    }
}

/// Summary, action items and decisions for one transcript
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digest {
    pub summary: String,
    pub action_items: Vec<String>,
    pub decisions: Vec<String>,
}

impl Digest {
    /// True when there is nothing to show
    pub fn is_empty(&self) -> bool {
        self.summary.trim().is_empty() && self.action_items.is_empty() && self.decisions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mime() {
        assert_eq!(
            Transcript::from_mime("text/plain; charset=utf-8", "hi").unwrap(),
            Transcript::Plain("hi")
        );
        assert_eq!(
            Transcript::from_mime("application/x-subrip", "x").unwrap(),
            Transcript::Subtitle(SubtitleFormat::Srt, "x")
        );
        assert_eq!(
            Transcript::from_mime("text/vtt", "x").unwrap(),
            Transcript::Subtitle(SubtitleFormat::Vtt, "x")
        );
    }

    #[test]
    fn test_from_mime_rejects_media() {
        assert!(matches!(
            Transcript::from_mime("audio/mpeg", ""),
            Err(DigestError::UnsupportedMedia(ref m)) if m == "audio/mpeg"
        ));
        assert!(matches!(
            Transcript::from_mime("video/mp4", ""),
            Err(DigestError::UnsupportedMedia(_))
        ));
        assert!(matches!(
            Transcript::from_mime("application/pdf", ""),
            Err(DigestError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_from_file_name() {
        assert_eq!(
            Transcript::from_file_name("sync.srt", "x"),
            Transcript::Subtitle(SubtitleFormat::Srt, "x")
        );
        assert_eq!(Transcript::from_file_name("sync.txt", "x"), Transcript::Plain("x"));
    }

    #[test]
    fn test_normalized() {
        let plain = Transcript::Plain("Hello there.");
        assert!(matches!(plain.normalized(), Cow::Borrowed("Hello there.")));

        let vtt = Transcript::Subtitle(
            SubtitleFormat::Vtt,
            "WEBVTT\n\n00:00:01.000 --> 00:00:02.000\nHello there.",
        );
        assert_eq!(vtt.normalized(), "Hello there.");
        assert!(vtt.raw().starts_with("WEBVTT"));
    }

    #[test]
    fn test_digest_is_empty() {
        assert!(Digest::default().is_empty());
        let digest = Digest {
            decisions: vec!["We agreed.".into()],
            ..Default::default()
        };
        assert!(!digest.is_empty());
    }
}
