//! Colorized structural dump.
//!
//! Prints any serializable value as a tree drawn with Unicode box-drawing
//! characters, coloring leaves by type:
//!
//! ```text
//! responses [1]
//! │   └── [0]
//! │       ├── source: dog
//! │       └── value: a member of the genus Canis
//! ```

use super::OutputConfig;
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use serde_json::{Map, Value};

/// Tree branch characters
struct TreeChars {
    pipe: &'static str,
    branch: &'static str,
    last: &'static str,
    space: &'static str,
}

const CHARS: TreeChars = TreeChars {
    pipe: "\u{2502}   ",                 // |
    branch: "\u{251c}\u{2500}\u{2500} ", // |--
    last: "\u{2514}\u{2500}\u{2500} ",   // L--
    space: "    ",
};

/// Structural dump formatter
pub struct DumpOutput;

impl DumpOutput {
    /// Format data as a colorized tree
    pub fn format<T: Serialize + ?Sized>(data: &T, config: &OutputConfig) -> Result<String> {
        let value = serde_json::to_value(data).context("Failed to serialize output")?;
        let mut lines = Vec::new();

        match &value {
            Value::Object(obj) if !obj.is_empty() => {
                Self::format_object(obj, config, "", &mut lines);
            }
            Value::Array(arr) if !arr.is_empty() => {
                Self::format_array(arr, config, "", &mut lines);
            }
            leaf => lines.push(Self::format_leaf(leaf, config)),
        }

        Ok(lines.join("\n"))
    }

    fn format_leaf(value: &Value, config: &OutputConfig) -> String {
        let text = match value {
            Value::String(s) => format!("'{}'", s),
            Value::Object(_) => "{}".to_string(),
            Value::Array(_) => "[]".to_string(),
            other => other.to_string(),
        };

        if !config.use_colors() {
            return text;
        }
        match value {
            Value::String(_) => text.green().to_string(),
            Value::Number(_) | Value::Bool(_) => text.yellow().to_string(),
            Value::Null => text.bold().to_string(),
            _ => text.dimmed().to_string(),
        }
    }

    /// Push one labelled child and, for non-empty containers, its subtree.
    fn format_child(
        label: String,
        value: &Value,
        is_last: bool,
        config: &OutputConfig,
        prefix: &str,
        lines: &mut Vec<String>,
    ) {
        let connector = if is_last { CHARS.last } else { CHARS.branch };
        let child_prefix = format!(
            "{}{}",
            prefix,
            if is_last { CHARS.space } else { CHARS.pipe }
        );

        match value {
            Value::Object(obj) if !obj.is_empty() => {
                lines.push(format!("{}{}{}", prefix, connector, label));
                Self::format_object(obj, config, &child_prefix, lines);
            }
            Value::Array(arr) if !arr.is_empty() => {
                let count = format!("[{}]", arr.len());
                let count = if config.use_colors() {
                    count.dimmed().to_string()
                } else {
                    count
                };
                lines.push(format!("{}{}{} {}", prefix, connector, label, count));
                Self::format_array(arr, config, &child_prefix, lines);
            }
            leaf => {
                lines.push(format!(
                    "{}{}{}: {}",
                    prefix,
                    connector,
                    label,
                    Self::format_leaf(leaf, config)
                ));
            }
        }
    }

    fn format_object(
        obj: &Map<String, Value>,
        config: &OutputConfig,
        prefix: &str,
        lines: &mut Vec<String>,
    ) {
        let len = obj.len();
        for (i, (key, value)) in obj.iter().enumerate() {
            let label = if config.use_colors() {
                key.bold().to_string()
            } else {
                key.clone()
            };
            Self::format_child(label, value, i == len - 1, config, prefix, lines);
        }
    }

    fn format_array(
        arr: &[Value],
        config: &OutputConfig,
        prefix: &str,
        lines: &mut Vec<String>,
    ) {
        let len = arr.len();
        for (i, item) in arr.iter().enumerate() {
            let label = format!("[{}]", i);
            let label = if config.use_colors() {
                label.dimmed().to_string()
            } else {
                label
            };
            Self::format_child(label, item, i == len - 1, config, prefix, lines);
        }
    }
}
