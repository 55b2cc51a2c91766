//! Word list loading.

use anyhow::{bail, Context, Result};
use std::path::Path;

/// Words to query: the word file when given, otherwise the positional words.
///
/// Fails when the file does not exist or when there is nothing to query.
pub fn resolve_words(file: Option<&Path>, args: &[String]) -> Result<Vec<String>> {
    let words = match file {
        Some(path) => read_word_file(path)?,
        None => args.to_vec(),
    };

    if words.is_empty() {
        bail!("No input provided");
    }
    Ok(words)
}

/// Read a newline-delimited word list, skipping blank lines.
pub fn read_word_file(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        bail!("File '{}' not found", path.display());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read word file '{}'", path.display()))?;

    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    tracing::debug!("Read {} words from {}", words.len(), path.display());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_args_used_without_file() {
        let words = resolve_words(None, &["dog".to_string(), "cat".to_string()]).unwrap();
        assert_eq!(words, vec!["dog", "cat"]);
    }

    #[test]
    fn test_file_wins_over_args() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("words.txt");
        fs::write(&path, "wolf\r\n\n  fox  \n").unwrap();

        let words = resolve_words(Some(&path), &["dog".to_string()]).unwrap();
        assert_eq!(words, vec!["wolf", "fox"]);
    }

    #[test]
    fn test_missing_file() {
        let err = resolve_words(Some(Path::new("/no/such/words.txt")), &[]).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_no_input() {
        let err = resolve_words(None, &[]).unwrap_err();
        assert_eq!(err.to_string(), "No input provided");
    }

    #[test]
    fn test_blank_file_is_no_input() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("words.txt");
        fs::write(&path, "\n\n").unwrap();

        assert!(resolve_words(Some(&path), &[]).is_err());
    }
}
