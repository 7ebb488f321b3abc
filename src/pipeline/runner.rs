//! Pipeline runner: orchestrates stage execution and artifact flow.
//!
//! The [`Pipeline`] struct holds the summary options, the lexicon and a
//! statically-dispatched [`SentenceSplitter`]. Calling [`Pipeline::run`]
//! normalizes the transcript, splits it once, and feeds the same sentence
//! sequence to the summarizer and both extractors, notifying a
//! [`PipelineObserver`] at each stage boundary.
//!
//! Every call builds its own frequency map and sentence list, so one
//! pipeline can be shared across threads; [`Pipeline::run_batch`] does this
//! with rayon.

use rayon::prelude::*;

use crate::errors::{DigestError, Result};
use crate::pipeline::artifacts::{Digest, Transcript};
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReportBuilder, STAGE_EXTRACT, STAGE_FORMAT,
    STAGE_FREQUENCIES, STAGE_NORMALIZE, STAGE_SCORE, STAGE_SELECT, STAGE_SPLIT,
};
use crate::pipeline::traits::{PatternSplitter, SentenceSplitter};
use crate::summarizer::frequency::FrequencyMap;
use crate::summarizer::selector::{score_sentences, SentenceSelector};
use crate::types::{Lexicon, SummaryOptions};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Run one stage: span, start/end callbacks and timing around `work`.
fn stage<T>(
    observer: &mut impl PipelineObserver,
    name: &'static str,
    work: impl FnOnce() -> T,
    items: impl FnOnce(&T) -> Option<usize>,
) -> T {
    trace_stage!(name);
    observer.on_stage_start(name);
    let clock = StageClock::start();
    let out = work();
    let mut report = StageReportBuilder::new(clock.elapsed());
    if let Some(n) = items(&out) {
        report = report.items(n);
    }
    observer.on_stage_end(name, &report.build());
    out
}

// ============================================================================
// Pipeline
// ============================================================================

/// Summarization and extraction over one transcript at a time.
#[derive(Debug, Clone, Default)]
pub struct Pipeline<S = PatternSplitter> {
    splitter: S,
    options: SummaryOptions,
    lexicon: Lexicon,
}

impl Pipeline {
    /// Default options, meeting lexicon, regex splitter
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: SentenceSplitter> Pipeline<S> {
    /// Builder method: set summary options
    pub fn with_options(mut self, options: SummaryOptions) -> Self {
        self.options = options;
        self
    }

    /// Builder method: set lexicon
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Builder method: swap the sentence splitter
    pub fn with_splitter<T: SentenceSplitter>(self, splitter: T) -> Pipeline<T> {
        Pipeline {
            splitter,
            options: self.options,
            lexicon: self.lexicon,
        }
    }

    pub fn options(&self) -> &SummaryOptions {
        &self.options
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Summary string only
    pub fn summarize(&self, text: &str) -> String {
        let sentences = self.splitter.split(text);
        if sentences.is_empty() {
            return String::new();
        }
        let freq = FrequencyMap::build(text, &self.lexicon.stopwords);
        SentenceSelector::with_options(self.options.clone())
            .select_from(&sentences, &freq)
            .render(self.options.tone)
    }

    /// Action item sentences only
    pub fn extract_action_items(&self, text: &str) -> Vec<String> {
        self.lexicon.action_cues.filter(&self.splitter.split(text))
    }

    /// Decision sentences only
    pub fn extract_decisions(&self, text: &str) -> Vec<String> {
        self.lexicon.decision_cues.filter(&self.splitter.split(text))
    }

    /// Execute the pipeline, producing a [`Digest`].
    ///
    /// Stages run in order:
    /// 1. Normalize (strip subtitle metadata)
    /// 2. Split into sentences
    /// 3. Build the document-wide frequency map
    /// 4. Score sentences
    /// 5. Select the top sentences and restore reading order
    /// 6. Format the summary by tone
    /// 7. Extract action items and decisions
    ///
    /// Fails only when no transcript is supplied; empty text yields an
    /// empty digest.
    pub fn run(
        &self,
        transcript: Option<Transcript<'_>>,
        observer: &mut impl PipelineObserver,
    ) -> Result<Digest> {
        let transcript =
            transcript.ok_or_else(|| DigestError::invalid_input("no transcript supplied"))?;
        Ok(self.digest_with(transcript, observer))
    }

    /// Execute the pipeline without an observer
    pub fn digest(&self, transcript: Transcript<'_>) -> Digest {
        self.digest_with(transcript, &mut NoopObserver)
    }

    /// Digest many transcripts in parallel; output order matches input order
    pub fn run_batch(&self, transcripts: &[Transcript<'_>]) -> Vec<Digest> {
        transcripts.par_iter().map(|t| self.digest(*t)).collect()
    }

    fn digest_with(&self, transcript: Transcript<'_>, observer: &mut impl PipelineObserver) -> Digest {
        let text = stage(observer, STAGE_NORMALIZE, || transcript.normalized(), |t| Some(t.len()));
        observer.on_normalized(&text);

        let sentences = stage(observer, STAGE_SPLIT, || self.splitter.split(&text), |s| Some(s.len()));
        observer.on_sentences(&sentences);

        if sentences.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("transcript has no sentences, returning empty digest");
            let digest = Digest::default();
            observer.on_digest(&digest);
            return digest;
        }

        let freq = stage(
            observer,
            STAGE_FREQUENCIES,
            || FrequencyMap::build(&text, &self.lexicon.stopwords),
            |f| Some(f.len()),
        );
        observer.on_frequencies(&freq);

        let scored = stage(observer, STAGE_SCORE, || score_sentences(&sentences, &freq), |s| Some(s.len()));

        let selected = stage(
            observer,
            STAGE_SELECT,
            || SentenceSelector::with_options(self.options.clone()).select(scored),
            |r| Some(r.sentences.len()),
        );
        observer.on_selection(&selected);

        let summary = stage(observer, STAGE_FORMAT, || selected.render(self.options.tone), |_| None);

        let (action_items, decisions) = stage(
            observer,
            STAGE_EXTRACT,
            || {
                (
                    self.lexicon.action_cues.filter(&sentences),
                    self.lexicon.decision_cues.filter(&sentences),
                )
            },
            |(a, d)| Some(a.len() + d.len()),
        );

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sentences = sentences.len(),
            selected = selected.sentences.len(),
            action_items = action_items.len(),
            decisions = decisions.len(),
            "digest complete"
        );

        let digest = Digest {
            summary,
            action_items,
            decisions,
        };
        observer.on_digest(&digest);
        digest
    }
}
