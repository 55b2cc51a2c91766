//! Lexicon lookup seam.
//!
//! A run resolves all of its words with a single [`Lexicon::lookup`] call and
//! hands the result to the graph builder.

use crate::error::Result;
use crate::types::{LexiconResult, WordRecord};
use std::collections::HashMap;
use std::path::Path;

/// Source of sense records.
pub trait Lexicon {
    /// Resolve `words` to their records.
    ///
    /// The result is keyed by each word exactly as given. Unknown words are
    /// left out rather than reported as errors.
    fn lookup(&self, words: &[String]) -> Result<LexiconResult>;
}

/// Lexicon backed by an in-memory word -> record map.
///
/// Lookups match words exactly. A JSON snapshot in the same shape as a raw
/// lookup dump can be loaded with [`MemoryLexicon::from_json_file`].
#[derive(Debug, Clone, Default)]
pub struct MemoryLexicon {
    records: HashMap<String, WordRecord>,
}

impl MemoryLexicon {
    /// Load a `{word: record}` JSON snapshot.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let records: HashMap<String, WordRecord> = serde_json::from_str(&content)?;
        tracing::debug!("Loaded {} records from {}", records.len(), path.display());
        Ok(Self { records })
    }

    pub fn insert(&mut self, word: impl Into<String>, record: WordRecord) {
        self.records.insert(word.into(), record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Lexicon for MemoryLexicon {
    fn lookup(&self, words: &[String]) -> Result<LexiconResult> {
        Ok(words
            .iter()
            .filter_map(|word| {
                self.records
                    .get(word)
                    .map(|record| (word.clone(), record.clone()))
            })
            .collect())
    }
}
