//! Salience-based sentence selection for summarization
//!
//! Each sentence is scored by the mean salience of its tokens minus a
//! penalty for straying from a medium length. The top-scoring sentences are
//! kept and put back into reading order.

use crate::nlp::tokenizer::tokens;
use crate::summarizer::frequency::FrequencyMap;
use crate::types::{ScoredSentence, Sentence, SummaryOptions, Tone};

/// Sentence length (in tokens) that receives no penalty
pub const IDEAL_SENTENCE_TOKENS: f64 = 20.0;
/// Weight of the relative length deviation subtracted from the score
pub const LENGTH_PENALTY_WEIGHT: f64 = 0.2;

/// Bullet used by [`Tone::Concise`]
pub const BULLET: &str = "•";

/// Score one sentence against the document's salience map
///
/// `sum(weights) / max(tokens, 1) - 0.2 * |tokens - 20| / 20`
pub fn score_sentence(text: &str, freq: &FrequencyMap) -> (f64, usize) {
    let mut total = 0.0;
    let mut count = 0usize;
    for token in tokens(text) {
        total += freq.weight(&token);
        count += 1;
    }

    let salience = total / count.max(1) as f64;
    let penalty = (count as f64 - IDEAL_SENTENCE_TOKENS).abs() / IDEAL_SENTENCE_TOKENS;
    (salience - LENGTH_PENALTY_WEIGHT * penalty, count)
}

/// Score every sentence, keeping document order
pub fn score_sentences(sentences: &[Sentence], freq: &FrequencyMap) -> Vec<ScoredSentence> {
    sentences
        .iter()
        .map(|s| {
            let (score, token_count) = score_sentence(&s.text, freq);
            ScoredSentence {
                index: s.index,
                text: s.text.clone(),
                score,
                token_count,
            }
        })
        .collect()
}

/// Result of sentence selection
#[derive(Debug, Clone, Default)]
pub struct SummaryResult {
    /// Selected sentences in document order
    pub sentences: Vec<ScoredSentence>,
    /// Number of sentences that were considered
    pub candidates: usize,
}

impl SummaryResult {
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Join the selected sentences according to `tone`
    pub fn render(&self, tone: Tone) -> String {
        render(&self.sentences, tone)
    }
}

/// Join sentences for display
///
/// - `Neutral`: single spaces
/// - `Concise`: one `• sentence` per line, inner whitespace collapsed
/// - `Detailed`: blank line between sentences
pub fn render(sentences: &[ScoredSentence], tone: Tone) -> String {
    match tone {
        Tone::Neutral => sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" "),
        Tone::Concise => sentences
            .iter()
            .map(|s| {
                let flat = s.text.split_whitespace().collect::<Vec<_>>().join(" ");
                format!("{BULLET} {flat}")
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Tone::Detailed => sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

/// Top-K sentence selector
#[derive(Debug, Clone, Default)]
pub struct SentenceSelector {
    options: SummaryOptions,
}

impl SentenceSelector {
    /// Create a new selector with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom options
    pub fn with_options(options: SummaryOptions) -> Self {
        Self { options }
    }

    /// Set the share of sentences to keep
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.options.ratio = ratio;
        self
    }

    /// Set the sentence cap
    pub fn with_max_sentences(mut self, n: usize) -> Self {
        self.options.max_sentences = n;
        self
    }

    pub fn options(&self) -> &SummaryOptions {
        &self.options
    }

    /// Rank scored sentences and keep the best, in document order
    ///
    /// Ranking is a stable sort on score, so equal scores keep the earlier
    /// sentence first.
    pub fn select(&self, mut scored: Vec<ScoredSentence>) -> SummaryResult {
        let candidates = scored.len();
        if candidates == 0 {
            return SummaryResult::default();
        }

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(self.options.selection_count(candidates));
        scored.sort_by_key(|s| s.index);

        SummaryResult {
            sentences: scored,
            candidates,
        }
    }

    /// Score and select in one step
    pub fn select_from(&self, sentences: &[Sentence], freq: &FrequencyMap) -> SummaryResult {
        self.select(score_sentences(sentences, freq))
    }
}
