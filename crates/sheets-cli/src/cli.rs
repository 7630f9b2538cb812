//! # CLI Structure and Argument Parsing
//!
//! The CLI follows a command-subcommand pattern:
//!
//! - **Global options**: apply to all commands (`--verbose`, `--quiet`,
//!   `--no-color`, `--config`, `--corpus`)
//! - **Subcommands**: `list`, `search`, `palette`, `get`, `show`, `toc`,
//!   `related`, `categories`
//!
//! ```bash
//! sheets list --category tool
//! sheets search "dokcer"
//! sheets palette
//! sheets get git --format json
//! sheets show git --format html
//! ```

use clap::{Parser, Subcommand};
use sheets_core::Category;
use std::path::PathBuf;

use crate::output::{OutputFormat, ShowFormat};

/// Main CLI structure for the `sheets` command
#[derive(Parser, Clone, Debug)]
#[command(name = "sheets")]
#[command(version)]
#[command(about = "sheets - Browse and search technical cheat sheets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug) logging
    #[arg(short = 'v', long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Configuration file to load instead of the default location
    #[arg(long, global = true, env = "SHEETS_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory of `<slug>.md` cheat sheets (overrides the configured corpus)
    #[arg(long, global = true, env = "SHEETS_CORPUS_DIR", value_name = "DIR")]
    pub corpus: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// List every cheat sheet, optionally restricted to a category
    List {
        /// Only show this category
        #[arg(long, short = 'c')]
        category: Option<Category>,

        /// Output format
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Fuzzy-search titles, slugs and tags
    Search {
        /// Search text; empty lists everything
        #[arg(default_value = "")]
        query: String,

        /// Only show this category
        #[arg(long, short = 'c')]
        category: Option<Category>,

        /// Maximum number of results
        #[arg(long, short = 'n')]
        limit: Option<usize>,

        /// Output format
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Quick-switcher results: a short browse list, or the best matches
    Palette {
        /// Search text; empty browses
        #[arg(default_value = "")]
        query: String,

        /// Output format
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Fetch one document record by identifier
    Get {
        /// Document identifier (file stem)
        slug: Option<String>,

        /// Output format
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Show the parsed sections of a document
    Show {
        /// Document identifier
        slug: String,

        /// Output format
        #[arg(long, short = 'f', value_enum, default_value_t = ShowFormat::Text)]
        format: ShowFormat,
    },

    /// Table of contents with unique anchors
    Toc {
        /// Document identifier
        slug: String,

        /// Output format
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Suggest other documents, same category first
    Related {
        /// Document identifier
        slug: String,

        /// Number of suggestions (defaults to the configured limit)
        #[arg(long, short = 'n')]
        limit: Option<usize>,

        /// Output format
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Category labels with document counts
    Categories {
        /// Output format
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

impl Commands {
    /// Whether the command will print machine-readable output.
    pub const fn machine_output(&self) -> bool {
        match self {
            Self::List { format, .. }
            | Self::Search { format, .. }
            | Self::Palette { format, .. }
            | Self::Get { format, .. }
            | Self::Toc { format, .. }
            | Self::Related { format, .. }
            | Self::Categories { format } => format.is_machine_readable(),
            Self::Show { format, .. } => format.is_machine_readable(),
        }
    }
}
