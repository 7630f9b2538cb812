//! Get command implementation: the retrieval-by-identifier endpoint

use anyhow::Result;
use colored::Colorize;

use super::App;
use crate::output::OutputFormat;
use crate::utils::truncate;

/// Width of the intro excerpt in text output
const INTRO_WIDTH: usize = 100;

/// Execute the get command
pub fn execute(app: &App, slug: Option<&str>, format: OutputFormat) -> Result<()> {
    let document = app.catalog.get(slug)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&document)?),
        OutputFormat::Jsonl => println!("{}", serde_json::to_string(&document)?),
        OutputFormat::Text => {
            println!("{}", document.title.bold());
            println!("  slug:       {}", document.slug);
            println!("  category:   {}", document.category().label());
            println!("  background: {}", document.background);
            if !document.date.is_empty() {
                println!("  date:       {}", document.date);
            }
            if !document.tags.is_empty() {
                println!("  tags:       {}", document.tags.join(", "));
            }
            if !document.intro.is_empty() {
                println!();
                println!("{}", truncate(&document.intro, INTRO_WIDTH).italic());
            }
        },
    }
    Ok(())
}
