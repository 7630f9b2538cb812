//! Formatting utilities

use colored::Colorize;
use sheets_core::Category;

/// Colour a label by category, so the same category always reads the same.
pub fn category_color(category: Category, text: &str) -> colored::ColoredString {
    match category {
        Category::Language => text.blue(),
        Category::Framework => text.cyan(),
        Category::Tool => text.green(),
        Category::Database => text.yellow(),
        Category::Os => text.magenta(),
        Category::Software => text.bright_blue(),
    }
}

/// Shorten `text` to at most `max` characters, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.chars().count() <= max {
        return text;
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}
