//! Command implementations for the sheets CLI

mod categories;
mod get;
mod list;
mod palette;
mod related;
mod search;
mod show;
mod toc;

pub use categories::execute as show_categories;
pub use get::execute as get_document;
pub use list::execute as list_documents;
pub use palette::execute as palette;
pub use related::execute as show_related;
pub use search::execute as search;
pub use show::execute as show_document;
pub use toc::execute as show_toc;

use anyhow::{Result, anyhow};
use colored::Colorize;
use serde::Serialize;
use sheets_core::{Catalog, Category, Config, DirectorySource, Document, SearchIndex, SearchRecord};

use crate::error::CliError;
use crate::utils::category_color;

/// Loaded configuration plus the catalog it points at.
pub struct App {
    /// Resolved configuration
    pub config: Config,
    /// Catalog over the configured corpus
    pub catalog: Catalog<DirectorySource>,
}

impl App {
    /// Open the corpus named by `config`.
    pub fn new(config: Config) -> Self {
        let catalog = Catalog::new(DirectorySource::new(config.paths.corpus.clone()));
        Self { config, catalog }
    }

    /// Search index with the configured palette limits.
    pub fn index(&self) -> Result<SearchIndex> {
        let search = &self.config.search;
        Ok(self
            .catalog
            .search_index()?
            .with_limits(search.browse_limit, search.palette_limit))
    }
}

/// One row of a document listing.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    slug: String,
    title: String,
    category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    background: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
}

impl From<&Document> for Entry {
    fn from(doc: &Document) -> Self {
        Self {
            slug: doc.slug.to_string(),
            title: doc.title.clone(),
            category: doc.category(),
            background: Some(doc.background.clone()),
            tags: doc.tags.clone(),
        }
    }
}

impl From<&SearchRecord> for Entry {
    fn from(record: &SearchRecord) -> Self {
        Self {
            slug: record.slug.to_string(),
            title: record.title.clone(),
            category: record.category(),
            background: None,
            tags: record.tags.clone(),
        }
    }
}

/// Reject `--limit 0`, which would always print nothing.
fn check_limit(limit: Option<usize>) -> Result<Option<usize>> {
    if limit == Some(0) {
        return Err(
            CliError::usage(anyhow!("invalid argument: --limit must be at least 1")).into(),
        );
    }
    Ok(limit)
}

/// Print entries as aligned `slug  title  category` lines.
fn print_entries(entries: &[Entry]) {
    let width = entries
        .iter()
        .map(|entry| entry.slug.chars().count())
        .max()
        .unwrap_or(0);

    for entry in entries {
        let padding = " ".repeat(width - entry.slug.chars().count());
        println!(
            "{}{}  {}  {}",
            entry.slug.bold(),
            padding,
            entry.title,
            category_color(entry.category, entry.category.label())
        );
    }
}
