//! List command implementation

use anyhow::Result;
use sheets_core::CategoryFilter;

use super::{App, Entry, print_entries};
use crate::output::{OutputFormat, print_json_items};

/// Execute the list command
pub fn execute(app: &App, filter: CategoryFilter, format: OutputFormat) -> Result<()> {
    let entries: Vec<Entry> = app
        .catalog
        .all_documents()?
        .iter()
        .filter(|doc| filter.accepts(doc.category()))
        .map(Entry::from)
        .collect();

    if format.is_machine_readable() {
        return print_json_items(&entries, format);
    }

    if entries.is_empty() {
        println!(
            "No cheat sheets found in {}",
            app.catalog.source().root().display()
        );
    } else {
        print_entries(&entries);
    }
    Ok(())
}
