use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::{Section, TocEntry};

#[allow(clippy::expect_used)]
static ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{.*?\}").expect("annotation pattern is valid"));

/// Compute the anchor id for a heading.
///
/// - lowercased
/// - whitespace runs become a single `-`
/// - anything other than ASCII word characters and `-` is dropped
/// - consecutive hyphens collapse, leading/trailing hyphens are trimmed
///
/// ```rust
/// use sheets_core::slugify;
///
/// assert_eq!(slugify("C++ Basics!"), "c-basics");
/// assert_eq!(slugify("  Getting   Started  "), "getting-started");
/// ```
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for ch in text.to_lowercase().chars() {
        if ch.is_whitespace() || ch == '-' {
            pending_hyphen = true;
            continue;
        }
        if !(ch.is_ascii_alphanumeric() || ch == '_') {
            continue;
        }
        if pending_hyphen && !out.is_empty() {
            out.push('-');
        }
        pending_hyphen = false;
        out.push(ch);
    }

    out
}

/// Heading display text: the first `{...}` annotation removed, whitespace trimmed.
///
/// Cheat-sheet sources decorate headings with layout hints such as
/// `## Getting Started {.cols-3}`.
pub fn strip_annotations(raw: &str) -> String {
    ANNOTATION.replace(raw.trim(), "").trim().to_string()
}

/// Table of contents for parsed sections, ids exactly as parsed.
pub fn toc(sections: &[Section]) -> Vec<TocEntry> {
    sections
        .iter()
        .map(|section| TocEntry {
            title: section.title.clone(),
            id: section.id.clone(),
        })
        .collect()
}

/// Anchor ids made unique with an occurrence counter.
///
/// The first occurrence keeps its id, later ones get `-2`, `-3`, ... . Suffixed
/// ids that would themselves collide with a parsed id are bumped further.
pub fn unique_anchor_ids(sections: &[Section]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut taken: std::collections::HashSet<String> = std::collections::HashSet::new();
    let mut ids = Vec::with_capacity(sections.len());

    for section in sections {
        let count = seen.entry(section.id.clone()).or_insert(0);
        *count += 1;

        let mut candidate = if *count == 1 {
            section.id.clone()
        } else {
            format!("{}-{}", section.id, count)
        };
        while taken.contains(&candidate) {
            *count += 1;
            candidate = format!("{}-{}", section.id, count);
        }

        taken.insert(candidate.clone());
        ids.push(candidate);
    }

    ids
}

/// [`toc`] with [`unique_anchor_ids`] applied.
pub fn unique_toc(sections: &[Section]) -> Vec<TocEntry> {
    sections
        .iter()
        .zip(unique_anchor_ids(sections))
        .map(|(section, id)| TocEntry {
            title: section.title.clone(),
            id,
        })
        .collect()
}
