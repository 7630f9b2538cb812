//! Related command implementation

use anyhow::Result;

use super::{App, Entry, check_limit, print_entries};
use crate::output::{OutputFormat, print_json_items};

/// Execute the related command
pub fn execute(app: &App, slug: &str, limit: Option<usize>, format: OutputFormat) -> Result<()> {
    let limit = check_limit(limit)?.unwrap_or(app.config.search.related_limit);
    let entries: Vec<Entry> = app
        .catalog
        .related(slug, limit)?
        .iter()
        .map(Entry::from)
        .collect();

    if format.is_machine_readable() {
        return print_json_items(&entries, format);
    }

    if entries.is_empty() {
        println!("Nothing related to {slug}");
    } else {
        print_entries(&entries);
    }
    Ok(())
}
