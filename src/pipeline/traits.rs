//! Stage trait definitions for the pipeline.
//!
//! Sentence segmentation sits behind [`SentenceSplitter`] so the matching
//! strategy can change without touching callers. Implementations are
//! statically dispatched through [`Pipeline`](super::runner::Pipeline)'s
//! type parameter.

use crate::nlp::sentences::{split_by_scanning, split_with_pattern};
use crate::types::Sentence;

// ============================================================================
// SentenceSplitter
// ============================================================================

/// Segments normalized prose into sentences.
///
/// # Contract
///
/// - Sentences come back in document order with `index` = 0, 1, 2, ...
/// - Text is trimmed; whitespace-only fragments are dropped.
/// - Empty input yields an empty vector, never an error.
/// - Pure: the same input always produces the same output.
pub trait SentenceSplitter: Send + Sync {
    fn split(&self, text: &str) -> Vec<Sentence>;
}

/// Regex-based splitter, the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternSplitter;

impl SentenceSplitter for PatternSplitter {
    #[inline]
    fn split(&self, text: &str) -> Vec<Sentence> {
        split_with_pattern(text)
    }
}

/// Hand-written scanner producing the same sentences as [`PatternSplitter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanningSplitter;

impl SentenceSplitter for ScanningSplitter {
    #[inline]
    fn split(&self, text: &str) -> Vec<Sentence> {
        split_by_scanning(text)
    }
}

impl<F> SentenceSplitter for F
where
    F: Fn(&str) -> Vec<Sentence> + Send + Sync,
{
    fn split(&self, text: &str) -> Vec<Sentence> {
        self(text)
    }
}
