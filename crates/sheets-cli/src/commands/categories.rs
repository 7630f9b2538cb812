//! Categories command implementation

use anyhow::Result;
use serde::Serialize;

use super::App;
use crate::output::{OutputFormat, print_json_items};
use crate::utils::category_color;

#[derive(Serialize)]
struct CategoryCount {
    id: &'static str,
    label: &'static str,
    count: usize,
}

/// Execute the categories command
pub fn execute(app: &App, format: OutputFormat) -> Result<()> {
    let counts: Vec<CategoryCount> = app
        .catalog
        .category_counts()?
        .into_iter()
        .map(|(category, count)| CategoryCount {
            id: category.id(),
            label: category.label(),
            count,
        })
        .collect();

    if format.is_machine_readable() {
        return print_json_items(&counts, format);
    }

    let total: usize = counts.iter().map(|c| c.count).sum();
    println!("{:<12} {:>5}", "All", total);
    for (category, row) in sheets_core::Category::ALL.into_iter().zip(&counts) {
        let label = format!("{:<12}", row.label);
        println!("{} {:>5}", category_color(category, &label), row.count);
    }
    Ok(())
}
