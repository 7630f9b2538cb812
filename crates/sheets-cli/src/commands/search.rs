//! Search command implementation

use anyhow::Result;
use sheets_core::CategoryFilter;
use tracing::debug;

use super::{App, Entry, check_limit, print_entries};
use crate::output::{OutputFormat, print_json_items};

/// Execute the search command
pub fn execute(
    app: &App,
    query: &str,
    filter: CategoryFilter,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let limit = check_limit(limit)?;
    let index = app.index()?;
    let mut entries: Vec<Entry> = index
        .filter(query, filter)
        .into_iter()
        .map(Entry::from)
        .collect();
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    debug!(query, results = entries.len(), "search complete");

    if format.is_machine_readable() {
        return print_json_items(&entries, format);
    }

    if entries.is_empty() {
        println!("No cheat sheets match \"{}\"", query.trim());
    } else {
        print_entries(&entries);
    }
    Ok(())
}
