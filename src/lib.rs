//! # meeting_digest
//!
//! Extractive summaries, action items and decisions from meeting transcripts.
//!
//! The crate is a deterministic text pipeline:
//!
//! 1. Caption files (SRT / WebVTT) are flattened to prose by [`subtitle`].
//! 2. Prose is split into sentences and tokenized by [`nlp`].
//! 3. [`summarizer`] weighs tokens by relative frequency, scores sentences
//!    and keeps the best ones in reading order.
//! 4. [`extract`] picks out sentences carrying action or decision cues.
//!
//! [`pipeline::runner::Pipeline`] runs all of it in one pass and
//! [`export`] renders the result for download or printing.
//!
//! ```
//! use meeting_digest::{summarize, extract_decisions, SummaryOptions};
//!
//! let text = "We reviewed the roadmap. We decided to ship Friday. Lunch was late.";
//! let summary = summarize(text, &SummaryOptions::default());
//! assert_eq!(summary, text);
//! assert_eq!(extract_decisions(text), vec!["We decided to ship Friday."]);
//! ```

pub mod errors;
pub mod export;
pub mod extract;
pub mod nlp;
pub mod pipeline;
pub mod subtitle;
pub mod summarizer;
pub mod types;

pub use errors::{DigestError, Result};
pub use export::{render_export, ExportFormat};
pub use extract::{extract_action_items, extract_decisions, CueBoundary, CueSet};
pub use nlp::sentences::split_sentences;
pub use nlp::stopwords::StopwordFilter;
pub use nlp::tokenizer::tokenize;
pub use pipeline::artifacts::{Digest, Transcript};
pub use pipeline::gate::{AuthGate, OpenGate};
pub use pipeline::observer::{NoopObserver, PipelineObserver, StageTimingObserver};
pub use pipeline::runner::Pipeline;
pub use pipeline::traits::{PatternSplitter, ScanningSplitter, SentenceSplitter};
pub use subtitle::{normalize_subtitle, SubtitleFormat};
pub use summarizer::frequency::{build_frequencies, FrequencyMap};
pub use summarizer::summarize;
pub use types::{Lexicon, LexiconConfig, ScoredSentence, Sentence, SummaryOptions, Tone};

/// Demo transcript of a weekly product sync
pub const SAMPLE_TRANSCRIPT: &str = "Good morning everyone. Thanks for joining the weekly sync. Today we have three main topics: product roadmap updates, QA timeline, and marketing launch plans. First, Alice will share the status on the mobile release.

Alice: The mobile release is on track. We completed the performance improvements and are validating the last round of tests. The ETA for beta is next Wednesday. We still need to confirm crash rates on Android.

Bob: For QA, we need two more engineers to handle regression testing; I will assign Clara to own the test matrix and Daniel to help with automation.

Carol: On marketing, we plan to prepare launch assets by Friday and coordinate a short demo for partners. We decided to prioritize the demo video and a one-page summary.

Action items: Alice to follow up on Android crash rate (due next Monday). Bob to onboard two QA engineers and share test plan. Carol to finalize partner demo script.

Thanks everyone — we'll reconvene next Tuesday for a quick status update.";
