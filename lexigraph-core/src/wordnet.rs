//! WordNet 3.x database reader.
//!
//! Reads the plain-text `dict/` layout shipped with Princeton WordNet:
//!
//! ```text
//! dict/
//!   index.noun  index.verb  index.adj  index.adv    lemma -> synset offsets
//!   data.noun   data.verb   data.adj   data.adv     synset records by byte offset
//! ```
//!
//! # Index line
//!
//! ```text
//! dog n 7 5 @ ~ #m #p %p 7 1 02086723 10133978 ...
//! ```
//!
//! `lemma pos synset_cnt p_cnt [ptr_symbol...] sense_cnt tagsense_cnt [offset...]`
//!
//! # Data line
//!
//! ```text
//! 02086723 05 n 03 dog 0 domestic_dog 0 Canis_familiaris 0 023 @ ... | a member of ...; "the dog barked"
//! ```
//!
//! `offset lex_filenum ss_type w_cnt [word lex_id...] p_cnt [ptr...] | gloss`
//!
//! Lines beginning with a space are the license header and are skipped.

use crate::error::{LexiconError, Result};
use crate::lexicon::Lexicon;
use crate::types::{LexiconResult, SenseEntry, WordRecord};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Database file suffixes and their part-of-speech tags, in lookup order.
const PARTS_OF_SPEECH: [(&str, &str); 4] =
    [("noun", "n"), ("verb", "v"), ("adj", "a"), ("adv", "r")];

/// Separator between the definition and usage examples of a gloss.
const GLOSS_SEPARATOR: &str = "; ";

/// One lemma's line from an `index.<pos>` file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct IndexEntry {
    lemma: String,
    pos: String,
    offsets: Vec<u64>,
}

/// A WordNet `dict/` directory opened for lookups.
#[derive(Debug, Clone)]
pub struct WordNet {
    dir: PathBuf,
    /// `(file suffix, pos tag)` for every index file present.
    parts: Vec<(&'static str, &'static str)>,
}

impl WordNet {
    /// Open a `dict/` directory.
    ///
    /// Fails with [`LexiconError::DatabaseNotFound`] when the directory does not
    /// exist or contains none of the `index.<pos>` files.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        if !dir.is_dir() {
            return Err(LexiconError::DatabaseNotFound { path: dir });
        }

        let parts: Vec<_> = PARTS_OF_SPEECH
            .iter()
            .copied()
            .filter(|(suffix, _)| dir.join(format!("index.{}", suffix)).is_file())
            .collect();

        if parts.is_empty() {
            return Err(LexiconError::DatabaseNotFound { path: dir });
        }

        tracing::debug!(
            "Opened WordNet database at {} ({} parts of speech)",
            dir.display(),
            parts.len()
        );
        Ok(Self { dir, parts })
    }

    /// Scan one index file for the wanted lemmas.
    fn search_index(
        &self,
        suffix: &str,
        wanted: &HashMap<String, Vec<&String>>,
    ) -> Result<Vec<IndexEntry>> {
        let path = self.dir.join(format!("index.{}", suffix));
        let reader = BufReader::new(File::open(&path)?);
        let mut found = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if line.starts_with(' ') || line.is_empty() {
                continue;
            }
            let lemma = line.split(' ').next().unwrap_or_default();
            if !wanted.contains_key(lemma) {
                continue;
            }
            let entry = parse_index_line(&line)
                .map_err(|detail| LexiconError::malformed(&path, detail))?;
            found.push(entry);
        }

        Ok(found)
    }

    /// Read the synsets behind `entry` from `data.<suffix>`.
    fn read_senses(&self, suffix: &str, entry: &IndexEntry) -> Result<Vec<SenseEntry>> {
        let path = self.dir.join(format!("data.{}", suffix));
        let mut reader = BufReader::new(File::open(&path)?);
        let mut senses = Vec::with_capacity(entry.offsets.len());

        for &offset in &entry.offsets {
            reader.seek(SeekFrom::Start(offset))?;
            let mut line = String::new();
            reader.read_line(&mut line)?;
            let sense = parse_data_line(line.trim_end_matches(['\n', '\r']), offset)
                .map_err(|detail| LexiconError::malformed(&path, detail))?;
            senses.push(sense);
        }

        Ok(senses)
    }
}

impl Lexicon for WordNet {
    fn lookup(&self, words: &[String]) -> Result<LexiconResult> {
        // Several spellings ("Dog", "dog") can share one lemma.
        let mut wanted: HashMap<String, Vec<&String>> = HashMap::new();
        for word in words {
            wanted.entry(normalize_lemma(word)).or_default().push(word);
        }

        let mut records: HashMap<String, (Vec<&str>, Vec<SenseEntry>)> = HashMap::new();
        for &(suffix, tag) in &self.parts {
            for entry in self.search_index(suffix, &wanted)? {
                let senses = self.read_senses(suffix, &entry)?;
                tracing::debug!(
                    "'{}' has {} senses as '{}'",
                    entry.lemma,
                    senses.len(),
                    entry.pos
                );
                let (tags, all_senses) = records.entry(entry.lemma).or_default();
                tags.push(tag);
                all_senses.extend(senses);
            }
        }

        let mut result = LexiconResult::new();
        for (lemma, queried) in &wanted {
            match records.get(lemma) {
                Some((tags, senses)) => {
                    for word in queried {
                        result.insert(
                            (*word).clone(),
                            WordRecord::new(tags.join(","), senses.clone()),
                        );
                    }
                }
                None => tracing::debug!("No WordNet entry for '{}'", lemma),
            }
        }

        Ok(result)
    }
}

/// Lemma form used by the index files: lowercase, spaces as underscores.
pub fn normalize_lemma(word: &str) -> String {
    word.trim().to_lowercase().replace(' ', "_")
}

fn parse_index_line(line: &str) -> std::result::Result<IndexEntry, String> {
    let mut fields = line.split_whitespace();
    let mut next = |name: &str| {
        fields
            .next()
            .ok_or_else(|| format!("index line for '{}' is missing {}", line, name))
    };

    let lemma = next("lemma")?.to_string();
    let pos = next("pos")?.to_string();
    let synset_cnt = parse_count(next("synset_cnt")?, 10)?;
    let p_cnt = parse_count(next("p_cnt")?, 10)?;
    for _ in 0..p_cnt {
        next("ptr_symbol")?;
    }
    next("sense_cnt")?;
    next("tagsense_cnt")?;

    let offsets = (0..synset_cnt)
        .map(|_| {
            let field = next("synset_offset")?;
            field
                .parse::<u64>()
                .map_err(|_| format!("invalid synset offset '{}' for '{}'", field, lemma))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(IndexEntry { lemma, pos, offsets })
}

fn parse_data_line(line: &str, expected_offset: u64) -> std::result::Result<SenseEntry, String> {
    let (head, gloss) = line.split_once(" | ").unwrap_or((line, ""));
    let mut fields = head.split_whitespace();
    let mut next = |name: &str| {
        fields
            .next()
            .ok_or_else(|| format!("offset {}: missing {}", expected_offset, name))
    };

    let offset = next("synset_offset")?;
    if offset.parse::<u64>().ok() != Some(expected_offset) {
        return Err(format!(
            "expected synset at offset {}, found '{}'",
            expected_offset, offset
        ));
    }
    next("lex_filenum")?;
    let pos = next("ss_type")?.to_string();
    let w_cnt = parse_count(next("w_cnt")?, 16)?;

    let mut words = Vec::with_capacity(w_cnt);
    for _ in 0..w_cnt {
        words.push(strip_adjective_marker(next("word")?).to_string());
        next("lex_id")?;
    }

    let gloss = gloss.trim();
    let glossary = if gloss.is_empty() {
        Vec::new()
    } else {
        gloss.split(GLOSS_SEPARATOR).map(str::to_string).collect()
    };

    Ok(SenseEntry {
        pos,
        offset: expected_offset,
        words,
        glossary,
    })
}

fn parse_count(field: &str, radix: u32) -> std::result::Result<usize, String> {
    usize::from_str_radix(field, radix).map_err(|_| format!("invalid count '{}'", field))
}

/// Drop the `(a)`, `(p)` and `(ip)` syntactic markers adjectives carry.
fn strip_adjective_marker(word: &str) -> &str {
    match word.find('(') {
        Some(idx) if word.ends_with(')') => &word[..idx],
        _ => word,
    }
}
