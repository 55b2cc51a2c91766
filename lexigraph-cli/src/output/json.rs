//! JSON output formatting.

use anyhow::{Context, Result};
use serde::Serialize;

/// JSON output formatter
pub struct JsonOutput;

impl JsonOutput {
    /// Format data as JSON indented by two spaces
    pub fn format<T: Serialize + ?Sized>(data: &T) -> Result<String> {
        serde_json::to_string_pretty(data).context("Failed to serialize output as JSON")
    }
}
