//! One lexigraph run: resolve words, look them up once, build, write.

use crate::input;
use crate::output::{self, OutputConfig, OutputStyle};
use anyhow::{Context, Result};
use lexigraph_core::{graph, Lexicon, LexiconResult, MemoryLexicon, OutputMode, WordNet};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Everything a run needs, after flags and config are merged.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Positional words
    pub words: Vec<String>,
    /// Newline-delimited word file (wins over `words`)
    pub file: Option<PathBuf>,
    /// Output file for indented JSON
    pub output: Option<PathBuf>,
    /// WordNet `dict/` directory or JSON snapshot
    pub database: PathBuf,
    pub mode: OutputMode,
    /// Colorized dump on stdout
    pub color: bool,
    /// Print the raw lookup and stop
    pub raw: bool,
    /// Echo output to stdout even when writing a file
    pub verbose: bool,
}

impl RunOptions {
    /// `--color` forces colors on; a `--raw` dump colors only on a TTY.
    fn stdout_config(&self) -> OutputConfig {
        let style = if self.color || self.raw {
            OutputStyle::Dump
        } else {
            OutputStyle::Json
        };
        let color_override = if self.color { Some(true) } else { None };
        OutputConfig::auto_detect_with_color_override(style, color_override)
    }
}

/// Execute a run. Every failure is returned; the caller picks the exit code.
pub async fn run(options: RunOptions) -> Result<()> {
    tracing::debug!(?options, "Starting run");

    let words = input::resolve_words(options.file.as_deref(), &options.words)?;
    let lexicon = lookup(options.database.clone(), words.clone()).await?;
    let stdout_config = options.stdout_config();

    if options.raw {
        return output::print(&in_query_order(&lexicon, &words)?, &stdout_config);
    }

    let rendering = graph::build(&lexicon, &words, options.mode);

    match &options.output {
        Some(path) => {
            output::write_file(&rendering, path)?;
            if options.verbose {
                output::print(&rendering, &stdout_config)?;
            }
        }
        None => output::print(&rendering, &stdout_config)?,
    }

    Ok(())
}

/// The lookup as a `{word: record}` object keyed in query order.
///
/// Repeated words keep their first position.
fn in_query_order(lexicon: &LexiconResult, words: &[String]) -> Result<Map<String, Value>> {
    let mut ordered = Map::new();
    for word in words {
        if ordered.contains_key(word) {
            continue;
        }
        if let Some(record) = lexicon.get(word) {
            let value = serde_json::to_value(record).context("Failed to serialize lookup")?;
            ordered.insert(word.clone(), value);
        }
    }
    Ok(ordered)
}

/// Open the database and resolve `words` on the blocking pool.
async fn lookup(database: PathBuf, words: Vec<String>) -> Result<LexiconResult> {
    tokio::task::spawn_blocking(move || -> Result<LexiconResult> {
        let lexicon = open_lexicon(&database)?;
        let result = lexicon
            .lookup(&words)
            .with_context(|| format!("Lookup failed in '{}'", database.display()))?;
        tracing::debug!("Resolved {} of {} words", result.len(), words.len());
        Ok(result)
    })
    .await
    .context("Lookup task panicked")?
}

/// A file is a JSON snapshot; anything else is treated as a WordNet `dict/`.
fn open_lexicon(path: &Path) -> Result<Box<dyn Lexicon>> {
    let context = || format!("Failed to open lexical database '{}'", path.display());

    if path.is_file() {
        let lexicon = MemoryLexicon::from_json_file(path).with_context(context)?;
        Ok(Box::new(lexicon))
    } else {
        let lexicon = WordNet::open(path).with_context(context)?;
        Ok(Box::new(lexicon))
    }
}
