//! Show command implementation

use anyhow::Result;
use colored::Colorize;
use sheets_core::{ContentElement, Section, render_sections, split_table};

use super::App;
use crate::output::ShowFormat;

/// Execute the show command
pub fn execute(app: &App, slug: &str, format: ShowFormat) -> Result<()> {
    let sections = app.catalog.sections(slug)?;

    match format {
        ShowFormat::Json => println!("{}", serde_json::to_string_pretty(&sections)?),
        ShowFormat::Html => println!("{}", render_sections(&sections)),
        ShowFormat::Text => print_sections(&sections),
    }
    Ok(())
}

fn print_sections(sections: &[Section]) {
    for (idx, section) in sections.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        println!("{}", format!("## {}", section.title).bold());
        for element in &section.elements {
            println!();
            print_element(element);
        }
    }
}

fn print_element(element: &ContentElement) {
    match element {
        ContentElement::Text { content } => println!("{}", content.trim_end()),
        ContentElement::Code { language, content } => {
            println!("{}", format!("[{language}]").bright_black());
            for line in content.trim_end_matches('\n').lines() {
                println!("    {}", line.green());
            }
        },
        ContentElement::Table { content } => {
            for line in table_lines(content) {
                println!("{line}");
            }
        },
    }
}

/// Pipe table laid out with padded columns.
fn table_lines(content: &str) -> Vec<String> {
    let table = split_table(content);
    let rows: Vec<&Vec<String>> = std::iter::once(&table.header)
        .chain(table.rows.iter())
        .filter(|row| !row.is_empty())
        .collect();

    let columns = rows.iter().map(|row| row.len()).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    rows.iter()
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        })
        .collect()
}
