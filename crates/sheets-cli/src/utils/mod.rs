//! Shared helpers for CLI commands.

mod formatting;
mod logging;

pub use formatting::{category_color, truncate};
pub use logging::initialize_logging;
