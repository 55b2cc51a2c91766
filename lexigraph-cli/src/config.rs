//! Configuration loading from `.lexigraphrc.toml`.
//!
//! Configuration is optional. Command-line flags override every setting.
//!
//! # Example Configuration
//!
//! ```toml
//! [database]
//! path = "/usr/share/wordnet/dict"
//!
//! [output]
//! color = true
//! human = false
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = ".lexigraphrc.toml";

/// Database used when neither flag, environment nor config names one.
pub const DEFAULT_DATABASE: &str = "dict";

/// Root configuration structure loaded from `.lexigraphrc.toml`.
#[derive(Debug, Deserialize, Default)]
pub struct LexigraphConfig {
    /// Where the lexical database lives.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Output defaults.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Lexical database location.
#[derive(Debug, Deserialize, Default)]
pub struct DatabaseConfig {
    /// WordNet `dict/` directory or JSON snapshot file.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Output defaults, overridden by `--color` and `--human`.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Print the colorized dump instead of JSON on stdout.
    #[serde(default)]
    pub color: Option<bool>,

    /// Produce the human-readable summary instead of the graph.
    #[serde(default)]
    pub human: Option<bool>,
}

impl LexigraphConfig {
    /// Load configuration from `.lexigraphrc.toml` in the given directory.
    ///
    /// If the config file doesn't exist or can't be parsed, returns defaults.
    /// Parse errors are logged as warnings but don't cause failures.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    /// Resolve the database path: explicit value, then config, then `./dict`.
    pub fn database_path(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.database.path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
    }

    /// Whether the colorized dump is the default stdout style.
    pub fn use_color(&self) -> bool {
        self.output.color.unwrap_or(false)
    }

    /// Whether human-readable mode is the default.
    pub fn human(&self) -> bool {
        self.output.human.unwrap_or(false)
    }
}
