//! WebVTT captions
//!
//! The `WEBVTT` header line is removed from the start of the file, then the
//! first `HH:MM:SS.mmm --> ...` timing line of each block. Cue identifiers,
//! `NOTE` blocks and short `MM:SS.mmm` timings are not recognised and pass
//! through as text.

use std::sync::OnceLock;

use regex::Regex;

use super::{blocks, join_blocks};

static HEADER_RE: OnceLock<Regex> = OnceLock::new();
static TIMING_RE: OnceLock<Regex> = OnceLock::new();

fn header_re() -> &'static Regex {
    HEADER_RE.get_or_init(|| Regex::new(r"\AWEBVTT.*\n").expect("vtt header regex"))
}

fn timing_re() -> &'static Regex {
    TIMING_RE.get_or_init(|| {
        Regex::new(r"[0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3} --> .*\n").expect("vtt timing regex")
    })
}

/// Strip WebVTT metadata and return the caption text as one line
pub fn normalize(raw: &str) -> String {
    let text = raw.replace('\r', "");
    let body = header_re().replacen(&text, 1, "");
    join_blocks(blocks(&body).map(|block| timing_re().replacen(block, 1, "")))
}
