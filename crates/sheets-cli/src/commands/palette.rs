//! Palette command implementation
//!
//! Mirrors the quick switcher: an empty query browses the first few entries,
//! anything else shows the best few matches.

use anyhow::Result;
use colored::Colorize;

use super::{App, Entry};
use crate::output::{OutputFormat, print_json_items};
use crate::utils::category_color;

/// Execute the palette command
pub fn execute(app: &App, query: &str, format: OutputFormat) -> Result<()> {
    let index = app.index()?;
    let entries: Vec<Entry> = index.palette(query).into_iter().map(Entry::from).collect();

    if format.is_machine_readable() {
        return print_json_items(&entries, format);
    }

    if entries.is_empty() {
        println!("No results");
        return Ok(());
    }
    for (idx, entry) in entries.iter().enumerate() {
        println!(
            "{:>2}. {} {}",
            idx + 1,
            category_color(entry.category, &entry.title),
            format!("({})", entry.slug).bright_black()
        );
    }
    Ok(())
}
