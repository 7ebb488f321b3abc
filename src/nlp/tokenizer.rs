//! Word tokenization
//!
//! Tokens are lower-case runs of `[a-z0-9]`. Every other character,
//! punctuation and non-ASCII letters included, acts as a separator.

/// Split text into lower-case alphanumeric tokens
pub fn tokenize(text: &str) -> Vec<String> {
    tokens(text).collect()
}

/// Lazily yield the tokens of `text`
///
/// Equivalent to [`tokenize`] without collecting; used where only counts or
/// lookups are needed.
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .flat_map(|run| {
            // Lower-casing can expand a char (e.g. 'İ'), so scrub afterwards.
            let lowered = run.to_lowercase();
            lowered
                .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
                .filter(|piece| !piece.is_empty())
                .map(str::to_owned)
                .collect::<Vec<_>>()
        })
}

/// Count tokens without allocating the token strings
pub fn token_count(text: &str) -> usize {
    tokens(text).count()
}
