//! Output sinks for lexigraph results.
//!
//! Results go to one of two places:
//! - stdout, as indented JSON or (with `--color` / `--raw`) a colorized
//!   structural dump
//! - a file, always as indented JSON

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::IsTerminal;
use std::path::Path;

mod dump;
mod json;

pub use self::dump::DumpOutput;
pub use self::json::JsonOutput;

/// How results are printed on stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// Indented JSON (default)
    #[default]
    Json,
    /// Colorized structural dump
    Dump,
}

/// Configuration for output rendering
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Style used for stdout
    pub style: OutputStyle,
    /// Disable colored output in the dump
    pub no_color: bool,
}

impl OutputConfig {
    /// Create a new OutputConfig with the specified style
    pub fn new(style: OutputStyle) -> Self {
        Self {
            style,
            no_color: false,
        }
    }

    /// Create an OutputConfig with TTY detection and an optional color override.
    ///
    /// When stdout is not a TTY, colors are off unless `color_override` is
    /// `Some(true)`. `Some(false)` always turns them off.
    pub fn auto_detect_with_color_override(
        style: OutputStyle,
        color_override: Option<bool>,
    ) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let use_color = color_override.unwrap_or(is_tty);
        Self {
            style,
            no_color: !use_color,
        }
    }

    /// Check if colors should be used
    pub fn use_colors(&self) -> bool {
        !self.no_color
    }

    /// Builder: disable colors
    #[cfg(test)]
    pub fn without_colors(mut self) -> Self {
        self.no_color = true;
        self
    }

    /// Render `data` for stdout in the configured style
    pub fn render<T: Serialize + ?Sized>(&self, data: &T) -> Result<String> {
        match self.style {
            OutputStyle::Json => JsonOutput::format(data),
            OutputStyle::Dump => DumpOutput::format(data, self),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new(OutputStyle::Json)
    }
}

/// Print `data` to stdout in the configured style
pub fn print<T: Serialize + ?Sized>(data: &T, config: &OutputConfig) -> Result<()> {
    println!("{}", config.render(data)?);
    Ok(())
}

/// Write `data` to `path` as indented JSON, whatever the stdout style.
///
/// A failed write is returned to the caller; nothing is printed instead.
pub fn write_file<T: Serialize + ?Sized>(data: &T, path: &Path) -> Result<()> {
    let content = JsonOutput::format(data)?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write output file '{}'", path.display()))?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}
