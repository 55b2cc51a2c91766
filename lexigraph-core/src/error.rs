//! Error types for lexigraph-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for lexicon operations.
pub type Result<T> = std::result::Result<T, LexiconError>;

/// Errors that can occur while opening or querying a lexicon.
///
/// The graph builder itself never fails; every variant here comes from the
/// lookup side of a run.
#[derive(Error, Debug)]
pub enum LexiconError {
    /// The database location does not exist or holds no index files.
    #[error("Lexical database not found: {}", path.display())]
    DatabaseNotFound {
        /// Path that was searched for the database.
        path: PathBuf,
    },

    /// A database record could not be parsed.
    #[error("Malformed record in {}: {detail}", file.display())]
    Malformed {
        /// File containing the bad record.
        file: PathBuf,
        /// What was wrong with it.
        detail: String,
    },

    /// IO error reading database files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error for lexicon snapshots.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LexiconError {
    pub(crate) fn malformed(file: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        LexiconError::Malformed {
            file: file.into(),
            detail: detail.into(),
        }
    }
}
