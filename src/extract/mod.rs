//! Action item and decision extraction
//!
//! Each extractor keeps the sentences matching a case-insensitive cue
//! pattern. Membership is binary: no scoring, no limit, no deduplication, and
//! a sentence can land in both lists.

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

use crate::errors::{DigestError, Result};
use crate::nlp::sentences::split_sentences;
use crate::types::Sentence;

/// Cue phrases that mark a sentence as an action item
pub const ACTION_CUES: &[&str] = &[
    "will",
    "should",
    "need to",
    "follow up",
    "assign",
    "due",
    "deadline",
    "prepare",
    "schedule",
    "plan",
    "implement",
    "review",
    "update",
    "send",
    "create",
    "fix",
    "investigate",
    "deploy",
    "test",
];

/// Cue phrases that mark a sentence as a decision
pub const DECISION_CUES: &[&str] = &[
    "decided",
    "agreed",
    "approved",
    "chose",
    "selected",
    "concluded",
    "finalized",
    "go with",
    "opt for",
];

/// Where a cue must sit relative to word boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueBoundary {
    /// Plain substring match ("decided" also hits "undecided")
    None,
    /// Cue must end at an ASCII word boundary ("test" hits "latest", not "testing")
    Trailing,
}

/// A named, compiled set of cue phrases
#[derive(Debug, Clone)]
pub struct CueSet {
    category: String,
    pattern: Regex,
}

impl CueSet {
    /// Build a cue set from literal phrases
    pub fn from_phrases<S: AsRef<str>>(
        category: impl Into<String>,
        phrases: &[S],
        boundary: CueBoundary,
    ) -> Result<Self> {
        let category = category.into();
        let alternatives: Vec<String> = phrases
            .iter()
            .map(|p| p.as_ref().trim())
            .filter(|p| !p.is_empty())
            .map(regex::escape)
            .collect();
        if alternatives.is_empty() {
            return Err(DigestError::invalid_config(format!(
                "cue set `{category}` needs at least one phrase"
            )));
        }

        let mut pattern = format!("(?:{})", alternatives.join("|"));
        if boundary == CueBoundary::Trailing {
            // ASCII word boundary: a cue followed by "é" still ends a word.
            pattern.push_str(r"(?-u:\b)");
        }
        Self::from_pattern(category, &pattern)
    }

    /// Build a cue set from a raw regular expression (matched case-insensitively)
    pub fn from_pattern(category: impl Into<String>, pattern: &str) -> Result<Self> {
        let category = category.into();
        match RegexBuilder::new(pattern).case_insensitive(true).build() {
            Ok(pattern) => Ok(Self { category, pattern }),
            Err(source) => Err(DigestError::InvalidPattern { category, source }),
        }
    }

    /// The built-in action item cues
    pub fn action_items() -> Self {
        static ACTIONS: OnceLock<CueSet> = OnceLock::new();
        ACTIONS
            .get_or_init(|| {
                CueSet::from_phrases("action", ACTION_CUES, CueBoundary::Trailing)
                    .expect("built-in action cues")
            })
            .clone()
    }

    /// The built-in decision cues
    pub fn decisions() -> Self {
        static DECISIONS: OnceLock<CueSet> = OnceLock::new();
        DECISIONS
            .get_or_init(|| {
                CueSet::from_phrases("decision", DECISION_CUES, CueBoundary::None)
                    .expect("built-in decision cues")
            })
            .clone()
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn as_regex(&self) -> &Regex {
        &self.pattern
    }

    /// Check whether a sentence contains one of the cues
    pub fn matches(&self, sentence: &str) -> bool {
        self.pattern.is_match(sentence)
    }

    /// Keep the matching sentences, in document order
    pub fn filter(&self, sentences: &[Sentence]) -> Vec<String> {
        sentences
            .iter()
            .filter(|s| self.matches(&s.text))
            .map(|s| s.text.clone())
            .collect()
    }
}

/// Sentences of `text` that read like action items
pub fn extract_action_items(text: &str) -> Vec<String> {
    CueSet::action_items().filter(&split_sentences(text))
}

/// Sentences of `text` that record a decision
pub fn extract_decisions(text: &str) -> Vec<String> {
    CueSet::decisions().filter(&split_sentences(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_only_sentence() {
        let text = "We decided to ship Friday.";
        assert!(extract_action_items(text).is_empty());
        assert_eq!(extract_decisions(text), vec!["We decided to ship Friday."]);
    }

    #[test]
    fn test_action_cues() {
        let text = "Bob will send the deck. The weather was nice. Please review the notes!";
        assert_eq!(
            extract_action_items(text),
            vec!["Bob will send the deck.", "Please review the notes!"]
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(extract_action_items("FOLLOW UP with legal."), vec!["FOLLOW UP with legal."]);
        assert_eq!(extract_decisions("AGREED on scope."), vec!["AGREED on scope."]);
    }

    #[test]
    fn test_action_cue_needs_trailing_boundary() {
        let actions = CueSet::action_items();
        assert!(!actions.matches("Regression testing is ongoing."));
        assert!(actions.matches("The latest build is green."));
        assert!(!actions.matches("Planning is hard."));
    }

    #[test]
    fn test_action_boundary_is_ascii_only() {
        assert_eq!(
            extract_action_items("Please reviewé it. We will testé later. Fine."),
            vec!["Please reviewé it.", "We will testé later."]
        );
        assert!(CueSet::action_items().matches("Deployé tomorrow."));
        assert!(!CueSet::action_items().matches("Deploying tomorrow."));
    }

    #[test]
    fn test_pattern_is_exposed() {
        let cues = CueSet::from_phrases("custom", &["ship"], CueBoundary::Trailing).unwrap();
        assert_eq!(cues.as_regex().as_str(), r"(?:ship)(?-u:\b)");
        assert!(cues.as_regex().is_match("We SHIP today."));
    }

    #[test]
    fn test_decision_cue_is_substring_match() {
        let decisions = CueSet::decisions();
        assert!(decisions.matches("We are still undecided."));
        assert!(decisions.matches("They will go with option B."));
    }

    #[test]
    fn test_sentence_in_both_lists() {
        let text = "We agreed that Dana will deploy on Monday.";
        assert_eq!(extract_action_items(text).len(), 1);
        assert_eq!(extract_decisions(text).len(), 1);
    }

    #[test]
    fn test_no_dedup() {
        let text = "Fix the bug. Fix the bug.";
        assert_eq!(extract_action_items(text), vec!["Fix the bug.", "Fix the bug."]);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_action_items("").is_empty());
        assert!(extract_decisions("   ").is_empty());
    }

    #[test]
    fn test_custom_phrases_are_escaped() {
        let cues = CueSet::from_phrases("custom", &["c++", "a.b"], CueBoundary::None).unwrap();
        assert!(cues.matches("We use C++ now."));
        assert!(!cues.matches("axb"));
        assert_eq!(cues.category(), "custom");
    }

    #[test]
    fn test_invalid_pattern() {
        let err = CueSet::from_pattern("broken", "(unclosed").unwrap_err();
        assert!(matches!(err, DigestError::InvalidPattern { ref category, .. } if category == "broken"));
    }

    #[test]
    fn test_filter_keeps_document_order() {
        let sentences = split_sentences("Send it. Nothing here. Update it.");
        let kept = CueSet::action_items().filter(&sentences);
        assert_eq!(kept, vec!["Send it.", "Update it."]);
    }
}
