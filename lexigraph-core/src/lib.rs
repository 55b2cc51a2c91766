//! lexigraph core - turns WordNet-style sense data into word/definition graphs.
//!
//! The crate is split along the two halves of a run:
//!
//! - **Lookup**: a [`Lexicon`] resolves queried words to their sense records.
//!   [`WordNet`] reads a WordNet 3.x `dict/` directory, [`MemoryLexicon`] holds
//!   records in memory or loads them from a JSON snapshot.
//! - **Transformation**: [`graph::build`] turns a [`LexiconResult`] into either a
//!   token [`Network`] (responses, nodes, edges) or a [`HumanReadable`] summary.
//!
//! # Example
//!
//! ```
//! use lexigraph_core::{graph, LexiconResult, SenseEntry, WordRecord};
//!
//! let mut lexicon = LexiconResult::new();
//! lexicon.insert(
//!     "dog".to_string(),
//!     WordRecord::new("n", vec![SenseEntry::new("n", vec!["a domestic canine"], vec!["dog"])]),
//! );
//!
//! let network = graph::build_network(&lexicon, &["dog".to_string()]);
//! assert_eq!(network.nodes.len(), 3);
//! ```

pub mod error;
pub mod graph;
pub mod lexicon;
pub mod tokenize;
pub mod types;
pub mod wordnet;

pub use error::{LexiconError, Result};
pub use graph::{HumanReadable, Network, OutputMode, Rendering};
pub use lexicon::{Lexicon, MemoryLexicon};
pub use types::{LexiconResult, SenseEntry, WordRecord};
pub use wordnet::WordNet;
