//! Core types for meeting_digest
//!
//! This module defines the data structures shared by every stage: sentences
//! with explicit document positions, scored sentences, summary options and
//! the injectable lexicon.

use crate::errors::{DigestError, Result};
use crate::extract::{CueBoundary, CueSet, ACTION_CUES, DECISION_CUES};
use crate::nlp::stopwords::StopwordFilter;
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the normalized transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text, trimmed
    pub text: String,
    /// Start byte offset in the normalized text
    pub start: usize,
    /// End byte offset in the normalized text
    pub end: usize,
    /// Position in document order (0-based)
    pub index: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }
}

/// A sentence together with its salience score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSentence {
    /// Position of the sentence in document order
    pub index: usize,
    /// The trimmed sentence text
    pub text: String,
    /// Mean token salience minus the length penalty
    pub score: f64,
    /// Number of tokens (stopwords included)
    pub token_count: usize,
}

// ============================================================================
// Tone
// ============================================================================

/// How selected sentences are joined into the summary string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Sentences joined by a single space
    #[default]
    Neutral,
    /// One bullet per line
    Concise,
    /// Sentences separated by a blank line
    Detailed,
}

impl Tone {
    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "concise" | "bullets" | "bullet" => Tone::Concise,
            "detailed" | "paragraphs" => Tone::Detailed,
            _ => Tone::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Concise => "concise",
            Tone::Detailed => "detailed",
        }
    }
}

/// Unknown names and `null` read as [`Tone::Neutral`], matching `FromStr`
impl<'de> Deserialize<'de> for Tone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.as_deref().map(Tone::parse).unwrap_or_default())
    }
}

impl std::str::FromStr for Tone {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Tone::parse(value))
    }
}

// ============================================================================
// Summary options
// ============================================================================

/// Default share of sentences kept in the summary
pub const DEFAULT_RATIO: f64 = 0.25;
/// Default upper bound on summary sentences
pub const DEFAULT_MAX_SENTENCES: usize = 8;
/// Lower bound on summary sentences (when the document has that many)
pub const MIN_SUMMARY_SENTENCES: usize = 3;

const MIN_RATIO: f64 = 0.05;
const MAX_RATIO: f64 = 1.0;

/// Options for a summarization call
///
/// Out-of-range values are clamped at use time rather than rejected; see
/// [`SummaryOptions::effective_ratio`] and
/// [`SummaryOptions::effective_max_sentences`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryOptions {
    /// Share of sentences to keep, clamped to [0.05, 1.0]
    #[serde(deserialize_with = "ratio_or_default")]
    pub ratio: f64,
    /// Upper bound on selected sentences (0 = default)
    #[serde(deserialize_with = "max_sentences_or_default")]
    pub max_sentences: usize,
    /// Output formatting
    pub tone: Tone,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_RATIO,
            max_sentences: DEFAULT_MAX_SENTENCES,
            tone: Tone::Neutral,
        }
    }
}

fn ratio_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(DEFAULT_RATIO))
}

/// Zero, negative and `null` caps all mean "use the default"
fn max_sentences_or_default<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<usize, D::Error> {
    let cap = Option::<i64>::deserialize(deserializer)?
        .filter(|&n| n > 0)
        .map_or(DEFAULT_MAX_SENTENCES, |n| usize::try_from(n).unwrap_or(usize::MAX));
    Ok(cap)
}

impl SummaryOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON.
    ///
    /// Missing or `null` fields take their defaults, a non-positive
    /// `max_sentences` means the default cap and an unknown tone is neutral.
    /// Only malformed JSON or wrongly typed values are errors.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Strict check for callers that want to reject nonsense up front.
    ///
    /// The pipeline itself never calls this; it clamps instead.
    pub fn validate(&self) -> Result<()> {
        if !self.ratio.is_finite() {
            return Err(DigestError::invalid_config(format!(
                "ratio must be a finite number, got {}",
                self.ratio
            )));
        }
        Ok(())
    }

    /// Ratio clamped to [0.05, 1.0]; non-finite values fall back to the default
    pub fn effective_ratio(&self) -> f64 {
        if self.ratio.is_finite() {
            self.ratio.clamp(MIN_RATIO, MAX_RATIO)
        } else {
            DEFAULT_RATIO
        }
    }

    /// Sentence cap with 0 meaning "use the default"
    pub fn effective_max_sentences(&self) -> usize {
        if self.max_sentences == 0 {
            DEFAULT_MAX_SENTENCES
        } else {
            self.max_sentences
        }
    }

    /// Number of sentences to select from a document of `sentence_count`.
    ///
    /// `ceil(n * ratio)` capped by `max_sentences`, raised to at least 3, and
    /// never more than the document has.
    pub fn selection_count(&self, sentence_count: usize) -> usize {
        let wanted = (sentence_count as f64 * self.effective_ratio()).ceil() as usize;
        wanted
            .min(self.effective_max_sentences())
            .max(MIN_SUMMARY_SENTENCES)
            .min(sentence_count)
    }

    /// Builder method: set ratio
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Builder method: set sentence cap
    pub fn with_max_sentences(mut self, max_sentences: usize) -> Self {
        self.max_sentences = max_sentences;
        self
    }

    /// Builder method: set tone
    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }
}

// ============================================================================
// Lexicon
// ============================================================================

/// Stopwords and cue patterns used by the frequency model and extractors
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub stopwords: StopwordFilter,
    pub action_cues: CueSet,
    pub decision_cues: CueSet,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            stopwords: StopwordFilter::default(),
            action_cues: CueSet::action_items(),
            decision_cues: CueSet::decisions(),
        }
    }
}

impl Lexicon {
    /// Build a lexicon from serialized configuration.
    ///
    /// Unset fields keep the meeting defaults. `language` and `stopwords`
    /// both choose the base list, so setting both is an error.
    pub fn from_config(config: &LexiconConfig) -> Result<Self> {
        let mut stopwords = match (&config.language, &config.stopwords) {
            (Some(_), Some(_)) => {
                return Err(DigestError::invalid_config(
                    "set either `language` or `stopwords`, not both",
                ))
            }
            (Some(language), None) => StopwordFilter::for_language(language),
            (None, Some(words)) => StopwordFilter::from_list(words.as_slice()),
            (None, None) => StopwordFilter::default(),
        };
        stopwords.add_stopwords(config.extra_stopwords.as_slice());

        let action_cues = match &config.action_cues {
            Some(phrases) => CueSet::from_phrases("action", phrases.as_slice(), CueBoundary::Trailing)?,
            None => CueSet::action_items(),
        };
        let decision_cues = match &config.decision_cues {
            Some(phrases) => CueSet::from_phrases("decision", phrases.as_slice(), CueBoundary::None)?,
            None => CueSet::decisions(),
        };

        Ok(Self {
            stopwords,
            action_cues,
            decision_cues,
        })
    }
}

/// Serializable lexicon overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Load a stock stopword list for this language instead of the meeting list
    pub language: Option<String>,
    /// Replace the stopword list entirely
    pub stopwords: Option<Vec<String>>,
    /// Words added on top of whichever list is in use
    pub extra_stopwords: Vec<String>,
    /// Replace the action cue phrases
    pub action_cues: Option<Vec<String>>,
    /// Replace the decision cue phrases
    pub decision_cues: Option<Vec<String>>,
}

impl LexiconConfig {
    /// Parse lexicon overrides from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The built-in cue phrases, useful as a starting point for overrides
    pub fn builtin_cues() -> (Vec<String>, Vec<String>) {
        (
            ACTION_CUES.iter().map(|s| s.to_string()).collect(),
            DECISION_CUES.iter().map(|s| s.to_string()).collect(),
        )
    }
}
