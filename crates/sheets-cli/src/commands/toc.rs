//! Table of contents command implementation

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use sheets_core::{toc, unique_anchor_ids};

use super::App;
use crate::output::{OutputFormat, print_json_items};

#[derive(Debug, Serialize)]
struct TocRow {
    title: String,
    /// Id as parsed, possibly shared with other sections
    id: String,
    /// Unique scroll anchor
    anchor: String,
}

/// Execute the toc command
pub fn execute(app: &App, slug: &str, format: OutputFormat) -> Result<()> {
    let sections = app.catalog.sections(slug)?;
    let rows: Vec<TocRow> = toc(&sections)
        .into_iter()
        .zip(unique_anchor_ids(&sections))
        .map(|(entry, anchor)| TocRow {
            title: entry.title,
            id: entry.id,
            anchor,
        })
        .collect();

    if format.is_machine_readable() {
        return print_json_items(&rows, format);
    }

    for row in &rows {
        println!("- {} {}", row.title, format!("#{}", row.anchor).bright_black());
    }
    Ok(())
}
