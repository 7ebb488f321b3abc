//! Summarization components
//!
//! Provides extractive summarization: a document-wide salience map and a
//! selector that keeps the highest-scoring sentences in reading order.

pub mod frequency;
pub mod selector;

use crate::nlp::sentences::split_sentences;
use crate::nlp::stopwords::StopwordFilter;
use crate::types::SummaryOptions;

use self::frequency::FrequencyMap;
use self::selector::SentenceSelector;

/// Extractive summary of `text` with the default stopword list
///
/// Returns an empty string when the text has no sentences.
pub fn summarize(text: &str, options: &SummaryOptions) -> String {
    summarize_with(text, options, &StopwordFilter::default())
}

/// Extractive summary of `text` with a caller-supplied stopword list
pub fn summarize_with(text: &str, options: &SummaryOptions, stopwords: &StopwordFilter) -> String {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return String::new();
    }

    let freq = FrequencyMap::build(text, stopwords);
    SentenceSelector::with_options(options.clone())
        .select_from(&sentences, &freq)
        .render(options.tone)
}
