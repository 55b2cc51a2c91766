//! Gloss tokenizer and noise filter.
//!
//! A gloss is split on every space, comma and parenthesis. Fragments that are
//! empty, contain a digit, or repeat the word being defined are noise.

use std::collections::HashSet;

/// Characters that end a token.
pub const TOKEN_SEPARATORS: [char; 4] = [' ', ',', '(', ')'];

/// Split a definition on every separator occurrence.
///
/// Adjacent separators produce empty fragments; callers filter them.
pub fn split_tokens(definition: &str) -> impl Iterator<Item = &str> {
    definition.split(TOKEN_SEPARATORS)
}

/// Whether a fragment survives the noise filter for `word`.
pub fn is_valid_token(token: &str, word: &str) -> bool {
    !token.is_empty() && !token.chars().any(|c| c.is_ascii_digit()) && token != word
}

/// Filtered tokens of one sense's definition, each once, in first-seen order.
///
/// Dedup is local to this call; the same token in another sense is kept again.
pub fn sense_tokens<'a>(definition: &'a str, word: &str) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    split_tokens(definition)
        .filter(|token| is_valid_token(token, word))
        .filter(|token| seen.insert(*token))
        .collect()
}
