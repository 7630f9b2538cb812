//! Front-matter extraction for cheat-sheet sources.
//!
//! Sources start with a metadata block fenced by `---` lines. The grammar is a
//! deliberately small subset of YAML:
//!
//! - single-line `key: value` declarations, quotes around the value stripped
//! - inline lists (`tags: [git, vcs]`) or comma-separated values for `tags`
//!   and `categories`
//! - a literal block scalar (`intro: |`) for `intro` only, captured until the
//!   next top-level key
//!
//! Other YAML constructs (nested `- item` lists, maps) are skipped. Nothing
//! here fails; an unreadable line simply contributes nothing.
//!
//! ```rust
//! use sheets_core::frontmatter::{parse_metadata, split_frontmatter};
//!
//! let raw = "---\ntitle: 'Git'\nbackground: bg-orange-500\n---\n## Basics\n";
//! let (block, body) = split_frontmatter(raw);
//! let meta = parse_metadata(block.unwrap_or_default());
//! assert_eq!(meta.title.as_deref(), Some("Git"));
//! assert_eq!(body, "## Basics\n");
//! ```

use serde::{Deserialize, Serialize};

const FENCE: &str = "---";

/// Named front-matter fields. Absent fields stay `None`/empty; fallbacks are
/// applied when a [`crate::Document`] is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// `title`
    pub title: Option<String>,
    /// `background`
    pub background: Option<String>,
    /// `date`
    pub date: Option<String>,
    /// `intro`, single line or literal block
    pub intro: Option<String>,
    /// `tags`
    pub tags: Vec<String>,
    /// `categories`
    pub categories: Vec<String>,
}

/// Split `raw` into its front-matter block and body.
///
/// The first non-blank line must be a `---` marker and a later line must close
/// the block. Without such a pair the block is `None` and the whole input is
/// the body.
pub fn split_frontmatter(raw: &str) -> (Option<&str>, &str) {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut offset = 0;
    let mut lines = text.split_inclusive('\n');

    let mut block_start = None;
    for line in lines.by_ref() {
        offset += line.len();
        if line.trim().is_empty() {
            continue;
        }
        if line.trim() == FENCE {
            block_start = Some(offset);
        }
        break;
    }

    let Some(block_start) = block_start else {
        return (None, text);
    };

    for line in lines {
        let line_start = offset;
        offset += line.len();
        if line.trim() == FENCE {
            return (Some(&text[block_start..line_start]), &text[offset..]);
        }
    }

    (None, text)
}

/// Scan a front-matter block into [`Metadata`].
pub fn parse_metadata(block: &str) -> Metadata {
    let lines: Vec<&str> = block.lines().collect();
    let mut meta = Metadata::default();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        i += 1;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('-') {
            continue;
        }
        // Indented lines belong to a nested construct we do not support
        if line.starts_with(char::is_whitespace) {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();

        match key.trim() {
            "intro" if is_block_indicator(value) => {
                let start = i;
                while i < lines.len() && !starts_top_level_key(lines[i]) {
                    i += 1;
                }
                meta.intro = non_empty(dedent(&lines[start..i]));
            },
            "intro" => meta.intro = non_empty(unquote(value).to_string()),
            "title" => meta.title = non_empty(unquote(value).to_string()),
            "background" => meta.background = non_empty(unquote(value).to_string()),
            "date" => meta.date = non_empty(unquote(value).to_string()),
            "tags" => meta.tags = parse_list(value),
            "categories" => meta.categories = parse_list(value),
            _ => {},
        }
    }

    meta
}

fn is_block_indicator(value: &str) -> bool {
    matches!(value, "|" | "|-" | "|+" | ">" | ">-" | ">+")
}

fn starts_top_level_key(line: &str) -> bool {
    line.chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

fn dedent(lines: &[&str]) -> String {
    let indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| line.get(indent..).unwrap_or_else(|| line.trim_start()))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn unquote(value: &str) -> &str {
    let value = value.trim();
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn parse_list(value: &str) -> Vec<String> {
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .unwrap_or(value);

    inner
        .split(',')
        .map(|item| unquote(item).trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
