//! Term salience
//!
//! Salience is relative frequency: a token's count divided by the count of
//! the most frequent non-stopword token in the document. The most frequent
//! token always weighs exactly 1.0 and absent tokens weigh 0.

use std::collections::HashMap;

use rustc_hash::FxHashMap;

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::tokens;

/// Normalized token weights for one document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyMap {
    weights: FxHashMap<String, f64>,
}

impl FrequencyMap {
    /// Build the map for `text`, ignoring stopwords
    pub fn build(text: &str, stopwords: &StopwordFilter) -> Self {
        Self::from_tokens(tokens(text), stopwords)
    }

    /// Build the map from an existing token sequence
    pub fn from_tokens<I, S>(tokens: I, stopwords: &StopwordFilter) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for token in tokens {
            let token = token.as_ref();
            if stopwords.is_stopword(token) {
                continue;
            }
            *counts.entry(token.to_owned()).or_insert(0) += 1;
        }

        let max = counts.values().copied().max().unwrap_or(1).max(1) as f64;
        let weights = counts
            .into_iter()
            .map(|(token, count)| (token, count as f64 / max))
            .collect();

        Self { weights }
    }

    /// Weight of a token, 0.0 when absent
    pub fn weight(&self, token: &str) -> f64 {
        self.weights.get(token).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.weights.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterate over `(token, weight)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// The `n` heaviest tokens, ties broken alphabetically
    pub fn top_n(&self, n: usize) -> Vec<(&str, f64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }

    /// Copy into a std `HashMap`
    pub fn to_hash_map(&self) -> HashMap<String, f64> {
        self.weights
            .iter()
            .map(|(k, &v)| (k.clone(), v))
            .collect()
    }
}

/// Salience map for `text` with the default stopword list
pub fn build_frequencies(text: &str) -> FrequencyMap {
    FrequencyMap::build(text, &StopwordFilter::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalized_weights() {
        let freq = build_frequencies("Budget review. Budget approved. The budget is final.");

        assert!((freq.weight("budget") - 1.0).abs() < 1e-10);
        assert!((freq.weight("review") - 1.0 / 3.0).abs() < 1e-10);
        assert!((freq.weight("approved") - 1.0 / 3.0).abs() < 1e-10);
        assert!((freq.weight("final") - 1.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_stopwords_excluded() {
        let freq = build_frequencies("The the the launch.");

        assert!(!freq.contains("the"));
        assert_eq!(freq.weight("the"), 0.0);
        assert_eq!(freq.weight("launch"), 1.0);
        assert_eq!(freq.len(), 1);
    }

    #[test]
    fn test_empty_and_all_stopwords() {
        assert!(build_frequencies("").is_empty());
        assert!(build_frequencies("it is what it is... we will").len() == 1);
        assert!(build_frequencies("it is the and").is_empty());
    }

    #[test]
    fn test_custom_stopwords() {
        let stopwords = StopwordFilter::from_list(&["budget"]);
        let freq = FrequencyMap::build("Budget review. Budget approved.", &stopwords);

        assert!(!freq.contains("budget"));
        assert_eq!(freq.weight("review"), 1.0);
    }

    #[test]
    fn test_top_n_is_deterministic() {
        let freq = build_frequencies("beta alpha gamma alpha");
        let top = freq.top_n(3);

        assert_eq!(top[0], ("alpha", 1.0));
        assert_eq!(top[1].0, "beta");
        assert_eq!(top[2].0, "gamma");
    }

    #[test]
    fn test_to_hash_map() {
        let freq = build_frequencies("ship ship demo");
        let map = freq.to_hash_map();

        assert_eq!(map.len(), 2);
        assert_eq!(map["ship"], 1.0);
        assert_eq!(map["demo"], 0.5);
    }

    proptest! {
        #[test]
        fn prop_weights_in_unit_interval(text in "[a-z .]{1,200}") {
            let freq = build_frequencies(&text);
            for (_, w) in freq.iter() {
                prop_assert!(w > 0.0 && w <= 1.0);
            }
            if !freq.is_empty() {
                prop_assert!(freq.iter().any(|(_, w)| w == 1.0));
            }
        }
    }
}
