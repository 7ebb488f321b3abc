//! SubRip captions
//!
//! Per block, the first all-digit line (the cue number) and the first
//! `HH:MM:SS,mmm --> ...` timing line are removed. A timing line must be
//! followed by a newline to be recognised, so a block that ends on its timing
//! line keeps it as text.

use std::sync::OnceLock;

use regex::Regex;

use super::{blocks, join_blocks};

static CUE_INDEX_RE: OnceLock<Regex> = OnceLock::new();
static TIMING_RE: OnceLock<Regex> = OnceLock::new();

fn cue_index_re() -> &'static Regex {
    CUE_INDEX_RE.get_or_init(|| Regex::new(r"(?m)^[0-9]+\n").expect("srt cue index regex"))
}

fn timing_re() -> &'static Regex {
    TIMING_RE.get_or_init(|| {
        Regex::new(r"[0-9]{2}:[0-9]{2}:[0-9]{2},[0-9]{3} --> .*\n").expect("srt timing regex")
    })
}

/// Strip SRT metadata and return the caption text as one line
pub fn normalize(raw: &str) -> String {
    let text = raw.replace('\r', "");
    join_blocks(blocks(&text).map(|block| {
        let block = cue_index_re().replacen(block, 1, "");
        let cleaned = timing_re().replacen(&block, 1, "").into_owned();
        std::borrow::Cow::Owned(cleaned)
    }))
}
