//! sheets CLI - Browse and search technical cheat sheets
//!
//! The binary in `main.rs` is a thin wrapper around [`run`] that maps errors
//! to semantic exit codes.

use anyhow::Result;
use clap::Parser;
use sheets_core::Config;
use tracing::debug;

mod cli;
mod commands;
pub mod error;
mod output;
mod utils;

use crate::cli::{Cli, Commands};
use crate::commands::App;
use crate::utils::initialize_logging;

/// Execute the sheets CLI with the currently configured environment.
///
/// # Errors
///
/// Returns an error if configuration loading or command execution fails.
pub fn run() -> Result<()> {
    // Convert Broken pipe panics into a clean exit
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        if msg.contains("Broken pipe") || msg.contains("broken pipe") {
            // Exit silently for pipeline truncation
            std::process::exit(0);
        }
        eprintln!("{msg}");
    }));

    let cli = Cli::parse();
    initialize_logging(&cli)?;

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(corpus) = &cli.corpus {
        config = config.with_corpus(corpus);
    }
    debug!(corpus = %config.paths.corpus.display(), "resolved corpus");

    execute_command(cli.command, &App::new(config))
}

fn execute_command(command: Commands, app: &App) -> Result<()> {
    match command {
        Commands::List { category, format } => {
            commands::list_documents(app, category.into(), format)
        },
        Commands::Search {
            query,
            category,
            limit,
            format,
        } => commands::search(app, &query, category.into(), limit, format),
        Commands::Palette { query, format } => commands::palette(app, &query, format),
        Commands::Get { slug, format } => commands::get_document(app, slug.as_deref(), format),
        Commands::Show { slug, format } => commands::show_document(app, &slug, format),
        Commands::Toc { slug, format } => commands::show_toc(app, &slug, format),
        Commands::Related {
            slug,
            limit,
            format,
        } => commands::show_related(app, &slug, limit, format),
        Commands::Categories { format } => commands::show_categories(app, format),
    }
}
