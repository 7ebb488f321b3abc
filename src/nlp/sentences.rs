//! Sentence segmentation
//!
//! A sentence is a run of non-terminator characters followed by one or more
//! of `.`, `!`, `?`. A trailing run with no terminator is kept as the final
//! sentence. Newlines are collapsed to spaces first, so offsets refer to the
//! collapsed text.
//!
//! Two interchangeable strategies produce identical output: a regex match
//! ([`split_with_pattern`]) and a hand-written scanner ([`split_by_scanning`]).

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use crate::types::Sentence;

static SENTENCE_RE: OnceLock<Regex> = OnceLock::new();

fn sentence_re() -> &'static Regex {
    SENTENCE_RE.get_or_init(|| Regex::new(r"[^.!?]+[.!?]+|[^.!?]+$").expect("sentence regex"))
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Replace every run of `\n` with a single space
pub fn collapse_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\n') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if c == '\n' {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    Cow::Owned(out)
}

/// Split text into sentences in document order (regex strategy)
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    split_with_pattern(text)
}

/// Regex-based segmentation
pub fn split_with_pattern(text: &str) -> Vec<Sentence> {
    let text = collapse_newlines(text);
    let spans = sentence_re().find_iter(&text).map(|m| (m.start(), m.end()));
    collect_sentences(&text, spans)
}

/// Scanner-based segmentation, equivalent to [`split_with_pattern`]
pub fn split_by_scanning(text: &str) -> Vec<Sentence> {
    let text = collapse_newlines(text);
    let mut spans = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if is_terminator(c) {
            // Terminators with no body before them never start a sentence.
            chars.next();
            continue;
        }

        let mut end = text.len();
        while let Some(&(i, c)) = chars.peek() {
            if is_terminator(c) {
                end = i;
                break;
            }
            chars.next();
        }
        while let Some(&(i, c)) = chars.peek() {
            if !is_terminator(c) {
                break;
            }
            end = i + c.len_utf8();
            chars.next();
        }
        spans.push((start, end));
    }

    collect_sentences(&text, spans.into_iter())
}

/// Trim each span and drop the ones that are only whitespace
fn collect_sentences(text: &str, spans: impl Iterator<Item = (usize, usize)>) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    for (start, end) in spans {
        let raw = &text[start..end];
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        let lead = raw.len() - raw.trim_start().len();
        let t_start = start + lead;
        let index = sentences.len();
        sentences.push(Sentence::new(trimmed, t_start, t_start + trimmed.len(), index));
    }
    sentences
}
