//! HTML fragments for parsed content.
//!
//! Text elements go through [`render_inline`], table elements through
//! [`render_table`]. Code elements are emitted as `language-*` blocks for an
//! external highlighter.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::heading::unique_anchor_ids;
use crate::{ContentElement, Section};

#[allow(clippy::expect_used)]
static H4: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^####[ \t]+(.*?)[ \t]*$").expect("h4 pattern is valid"));
#[allow(clippy::expect_used)]
static STRONG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("strong pattern is valid"));
#[allow(clippy::expect_used)]
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`\n]+)`").expect("code pattern is valid"));
#[allow(clippy::expect_used)]
static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]\n]+)\]\(([^)\s]+)\)").expect("link pattern is valid"));
#[allow(clippy::expect_used)]
static PURPLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<pur>(.*?)</pur>").expect("purple pattern is valid"));
#[allow(clippy::expect_used)]
static YELLOW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<yel>(.*?)</yel>").expect("yellow pattern is valid"));
#[allow(clippy::expect_used)]
static PARAGRAPH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\n").expect("paragraph pattern is valid"));

/// A piece of inline output: text still open to rules, or finished markup.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Plain(String),
    Markup(String),
}

/// Run one rule over every plain segment.
fn apply<F>(segments: Vec<Segment>, re: &Regex, replace: F) -> Vec<Segment>
where
    F: Fn(&Captures<'_>) -> Vec<Segment>,
{
    let mut out = Vec::with_capacity(segments.len());
    for segment in segments {
        let Segment::Plain(text) = segment else {
            out.push(segment);
            continue;
        };

        let mut last = 0;
        for caps in re.captures_iter(&text) {
            let Some(whole) = caps.get(0) else { continue };
            if whole.start() > last {
                out.push(Segment::Plain(text[last..whole.start()].to_string()));
            }
            out.extend(replace(&caps));
            last = whole.end();
        }
        if last < text.len() {
            out.push(Segment::Plain(text[last..].to_string()));
        }
    }
    out
}

/// Markup around text that later rules may still format.
fn wrap(open: String, caps: &Captures<'_>, close: &str) -> Vec<Segment> {
    let inner = caps.get(1).map_or("", |m| m.as_str());
    vec![
        Segment::Markup(open),
        Segment::Plain(inner.to_string()),
        Segment::Markup(close.to_string()),
    ]
}

/// Render the cheat-sheet inline syntax to an HTML fragment.
///
/// ```rust
/// use sheets_core::render_inline;
///
/// assert_eq!(
///     render_inline("**bold** and `a < b`"),
///     "<strong>bold</strong> and <code>a &lt; b</code>"
/// );
/// ```
pub fn render_inline(text: &str) -> String {
    let mut segments = vec![Segment::Plain(text.to_string())];

    segments = apply(segments, &H4, |caps| wrap("<h4>".into(), caps, "</h4>"));
    segments = apply(segments, &STRONG, |caps| wrap("<strong>".into(), caps, "</strong>"));
    segments = apply(segments, &CODE, |caps| {
        let inner = caps.get(1).map_or("", |m| m.as_str());
        vec![Segment::Markup(format!(
            "<code>{}</code>",
            html_escape::encode_text(inner)
        ))]
    });
    segments = apply(segments, &LINK, |caps| {
        let href = caps.get(2).map_or("", |m| m.as_str());
        let open = format!(
            "<a href=\"{}\">",
            html_escape::encode_double_quoted_attribute(href)
        );
        wrap(open, caps, "</a>")
    });
    segments = apply(segments, &PURPLE, |caps| {
        wrap("<span class=\"text-purple\">".into(), caps, "</span>")
    });
    segments = apply(segments, &YELLOW, |caps| {
        wrap("<span class=\"text-yellow\">".into(), caps, "</span>")
    });
    segments = apply(segments, &PARAGRAPH, |_| {
        vec![Segment::Markup("<br/><br/>".into())]
    });

    segments.into_iter().fold(String::new(), |mut html, segment| {
        match segment {
            Segment::Plain(text) => html.push_str(&html_escape::encode_text(&text)),
            Segment::Markup(markup) => html.push_str(&markup),
        }
        html
    })
}

/// Header and body cells of a pipe table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRows {
    /// First retained line
    pub header: Vec<String>,
    /// Remaining lines
    pub rows: Vec<Vec<String>>,
}

fn is_separator(line: &str) -> bool {
    line.contains('-')
        && line
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
}

fn split_cells(line: &str) -> Vec<String> {
    let mut cells: Vec<&str> = line.split('|').collect();
    if cells.first().is_some_and(|c| c.trim().is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|c| c.trim().is_empty()) {
        cells.pop();
    }
    cells.into_iter().map(|c| c.trim().to_string()).collect()
}

/// Split a table element's content into header and rows.
///
/// Blank and separator (`|---|:-:|`) lines are dropped. Rows are not padded to
/// the header width.
pub fn split_table(content: &str) -> TableRows {
    let mut lines = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_separator(line))
        .map(split_cells);

    let header = lines.next().unwrap_or_default();
    TableRows {
        header,
        rows: lines.collect(),
    }
}

/// Render a table element as an HTML `<table>`.
pub fn render_table(content: &str) -> String {
    let table = split_table(content);
    let mut html = String::from("<table>");

    if !table.header.is_empty() {
        html.push_str("<thead><tr>");
        for cell in &table.header {
            let _ = write!(html, "<th>{}</th>", render_inline(cell));
        }
        html.push_str("</tr></thead>");
    }

    html.push_str("<tbody>");
    for row in &table.rows {
        html.push_str("<tr>");
        for cell in row {
            let _ = write!(html, "<td>{}</td>", render_inline(cell));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

fn render_element(element: &ContentElement) -> String {
    match element {
        ContentElement::Text { content } => {
            format!("<div class=\"text\">{}</div>", render_inline(content))
        },
        ContentElement::Code { language, content } => format!(
            "<pre><code class=\"language-{}\">{}</code></pre>",
            html_escape::encode_double_quoted_attribute(language),
            html_escape::encode_text(content)
        ),
        ContentElement::Table { content } => render_table(content),
    }
}

fn render_with_anchor(section: &Section, anchor: &str) -> String {
    let mut html = format!(
        "<section id=\"{}\"><h2>{}</h2>",
        html_escape::encode_double_quoted_attribute(anchor),
        html_escape::encode_text(&section.title)
    );
    for element in &section.elements {
        html.push_str(&render_element(element));
    }
    html.push_str("</section>");
    html
}

/// Render one section, anchored at its parsed id.
pub fn render_section(section: &Section) -> String {
    render_with_anchor(section, &section.id)
}

/// Render a whole body, anchors made unique.
pub fn render_sections(sections: &[Section]) -> String {
    sections
        .iter()
        .zip(unique_anchor_ids(sections))
        .map(|(section, anchor)| render_with_anchor(section, &anchor))
        .collect::<Vec<_>>()
        .join("\n")
}
