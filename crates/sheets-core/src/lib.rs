//! # sheets-core
//!
//! Core functionality for sheets: a browsable, searchable catalogue of
//! long-form technical cheat sheets.
//!
//! This crate turns raw markdown-with-front-matter sources into structured
//! documents and serves them by identifier, by category and by fuzzy search.
//!
//! ## Architecture
//!
//! - **Parsing**: front-matter extraction, heading-based sectioning and
//!   code/table/text segmentation
//! - **Classification**: keyword-derived categories, computed on demand
//! - **Search**: fuzzy, typo-tolerant ranking for the palette and the grid
//! - **Catalog**: retrieval by identifier over a pluggable document source
//! - **Rendering**: inline formatting and table splitting into HTML fragments
//! - **Configuration**: corpus location and search limits from TOML
//!
//! ## Quick Start
//!
//! ```rust
//! use sheets_core::{Catalog, Category, MemorySource, Result};
//!
//! let source = MemorySource::new()
//!     .with("git", "---\ntitle: Git\n---\n## Setup\n```\ngit init\n```\n")
//!     .with("redis", "---\ntitle: Redis\n---\n## Keys\nSET, GET\n");
//! let catalog = Catalog::new(source);
//!
//! let git = catalog.get(Some("git"))?;
//! assert_eq!(git.category(), Category::Tool);
//!
//! let sections = catalog.sections("git")?;
//! assert_eq!(sections[0].id, "setup");
//!
//! let index = catalog.search_index()?;
//! assert_eq!(index.palette("redsi")[0].slug.as_str(), "redis");
//! # Ok::<(), sheets_core::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Parsing, classification and search never fail. Lookups and I/O return
//! [`Result<T, Error>`]:
//!
//! ```rust
//! use sheets_core::{Catalog, Error, MemorySource};
//!
//! let catalog = Catalog::new(MemorySource::new());
//! match catalog.get(Some("../../etc/passwd")) {
//!     Err(e @ Error::InvalidIdentifier(_)) => assert_eq!(e.category(), "bad_request"),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

/// Document catalog served by identifier
pub mod catalog;
/// Keyword-based document categories
pub mod category;
/// Configuration loading
pub mod config;
/// Error types and result aliases
pub mod error;
/// Front-matter block extraction
pub mod frontmatter;
/// Heading anchors and table of contents
pub mod heading;
/// Fuzzy search over document metadata
pub mod index;
/// Markdown body sectioning and segmentation
pub mod parser;
/// HTML rendering of inline markup and tables
pub mod render;
/// Stale-result protection for interactive queries
pub mod session;
/// Raw document providers
pub mod source;
/// Core data types
pub mod types;

// Re-export commonly used types
pub use catalog::{Catalog, DEFAULT_RELATED_LIMIT};
pub use category::{Category, CategoryFilter, classify};
pub use config::{Config, PathsConfig, SearchConfig};
pub use error::{Error, Result};
pub use frontmatter::Metadata;
pub use heading::{slugify, toc, unique_anchor_ids, unique_toc};
pub use index::{BROWSE_LIMIT, MatchField, PALETTE_LIMIT, SearchHit, SearchIndex, SearchRecord};
pub use parser::{ParsedDocument, looks_like_table, parse, parse_document, parse_sections};
pub use render::{
    TableRows, render_inline, render_section, render_sections, render_table, split_table,
};
pub use session::{QuerySession, Ticket};
pub use source::{DirectorySource, DocumentSource, MemorySource};
pub use types::*;
