//! # Output Formatting
//!
//! Commands print either human-readable text or machine-readable JSON.
//!
//! ## Supported Formats
//!
//! - **Text**: aligned, coloured lines for a terminal
//! - **JSON**: one pretty-printed JSON value
//! - **JSONL**: one compact JSON object per line
//!
//! ```bash
//! sheets list --format json | jq '.[].slug'
//! sheets search dock --format jsonl | head -1
//! ```

use anyhow::Result;
use serde::Serialize;

/// Output format for list-shaped commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted text
    #[default]
    Text,
    /// Single JSON value
    Json,
    /// JSON Lines (one object per line)
    Jsonl,
}

impl OutputFormat {
    /// Check if this format is machine-readable (JSON or JSONL).
    #[must_use]
    pub const fn is_machine_readable(self) -> bool {
        matches!(self, Self::Json | Self::Jsonl)
    }
}

/// Output format for `show`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ShowFormat {
    /// Sections as terminal text
    #[default]
    Text,
    /// Sections as JSON
    Json,
    /// Sections as an HTML fragment
    Html,
}

impl ShowFormat {
    /// Check if this format is machine-readable.
    #[must_use]
    pub const fn is_machine_readable(self) -> bool {
        matches!(self, Self::Json | Self::Html)
    }
}

/// Print `items` as a JSON array or as JSON lines.
///
/// Text output is the caller's job; this is a no-op for [`OutputFormat::Text`].
pub fn print_json_items<T: Serialize>(items: &[T], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(items)?),
        OutputFormat::Jsonl => {
            for item in items {
                println!("{}", serde_json::to_string(item)?);
            }
        },
        OutputFormat::Text => {},
    }
    Ok(())
}
