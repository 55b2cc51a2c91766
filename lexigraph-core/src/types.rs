//! Sense data returned by a lexicon lookup.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Words resolved by a lookup, keyed exactly as they were queried.
///
/// Words the lexicon does not know simply have no entry.
pub type LexiconResult = HashMap<String, WordRecord>;

/// One meaning of a word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenseEntry {
    /// Part-of-speech tag (`n`, `v`, `a`, `s`, `r`).
    pub pos: String,
    /// Byte offset of the synset in its data file (0 when not database-backed).
    #[serde(default)]
    pub offset: u64,
    /// Member words of the sense.
    #[serde(default)]
    pub words: Vec<String>,
    /// Definition first, then usage examples.
    #[serde(default)]
    pub glossary: Vec<String>,
}

impl SenseEntry {
    pub fn new<G, W>(pos: impl Into<String>, glossary: G, words: W) -> Self
    where
        G: IntoIterator,
        G::Item: Into<String>,
        W: IntoIterator,
        W::Item: Into<String>,
    {
        Self {
            pos: pos.into(),
            offset: 0,
            words: words.into_iter().map(Into::into).collect(),
            glossary: glossary.into_iter().map(Into::into).collect(),
        }
    }

    /// The sense's first gloss, or `""` when it has none.
    ///
    /// Later glosses are never consulted by the builders.
    pub fn definition(&self) -> &str {
        self.glossary.first().map(String::as_str).unwrap_or("")
    }
}

/// Everything a lexicon knows about one queried word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    /// Part-of-speech summary, e.g. `n` or `n,v`.
    pub pos: String,
    /// Senses in dictionary order.
    #[serde(default)]
    pub senses: Vec<SenseEntry>,
}

impl WordRecord {
    pub fn new(pos: impl Into<String>, senses: Vec<SenseEntry>) -> Self {
        Self {
            pos: pos.into(),
            senses,
        }
    }
}
