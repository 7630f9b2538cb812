//! Line-oriented parser turning a cheat-sheet source into sections.
//!
//! The parser is total: every input produces a result, and constructs it does
//! not understand (unterminated fences, stray pipes) come out as
//! [`ContentElement::Text`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::frontmatter::{Metadata, parse_metadata, split_frontmatter};
use crate::heading::{slugify, strip_annotations};
use crate::types::DEFAULT_BACKGROUND;
use crate::{ContentElement, Document, Section, Slug};

/// Title of the section collecting text before the first heading
pub const DEFAULT_SECTION_TITLE: &str = "Introduction";

/// Language reported for fences without a language token
pub const DEFAULT_CODE_LANGUAGE: &str = "bash";

/// A plain region needs strictly more pipes than this to count as a table
pub const TABLE_PIPE_THRESHOLD: usize = 4;

#[allow(clippy::expect_used)]
static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{2,3}\s").expect("heading pattern is valid"));

#[allow(clippy::expect_used)]
static FENCED_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```([\w\- \t]*)\r?\n(.*?)```").expect("fence pattern is valid")
});

/// Front-matter plus structured body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    /// Named metadata fields
    pub frontmatter: Metadata,
    /// Body sections in source order
    pub sections: Vec<Section>,
}

/// Parse a raw source into metadata and sections.
///
/// ```rust
/// use sheets_core::{ContentElement, parse};
///
/// let doc = parse("---\ntitle: Git\n---\n## Setup\n```sh\ngit init\n```\n");
/// assert_eq!(doc.frontmatter.title.as_deref(), Some("Git"));
/// assert_eq!(doc.sections[0].title, "Setup");
/// assert_eq!(
///     doc.sections[0].elements[0],
///     ContentElement::Code { language: "sh".into(), content: "git init\n".into() }
/// );
/// ```
pub fn parse(raw: &str) -> ParsedDocument {
    let (block, body) = split_frontmatter(raw);
    ParsedDocument {
        frontmatter: block.map(parse_metadata).unwrap_or_default(),
        sections: parse_sections(body.trim()),
    }
}

/// Build the served [`Document`] record for a source, applying fallbacks.
pub fn parse_document(slug: Slug, raw: &str) -> Document {
    let (block, body) = split_frontmatter(raw);
    let meta = block.map(parse_metadata).unwrap_or_default();

    Document {
        title: meta.title.unwrap_or_else(|| slug.to_string()),
        date: meta.date.unwrap_or_default(),
        background: meta
            .background
            .unwrap_or_else(|| DEFAULT_BACKGROUND.to_string()),
        tags: meta.tags,
        categories: meta.categories,
        intro: meta.intro.unwrap_or_default(),
        content: body.trim().to_string(),
        slug,
    }
}

/// Split a markdown body into sections at level-2 and level-3 headings.
pub fn parse_sections(body: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut title = DEFAULT_SECTION_TITLE.to_string();
    let mut buffer: Vec<&str> = Vec::new();

    for line in body.split('\n') {
        if HEADING.is_match(line) {
            flush(&mut sections, &title, &mut buffer);
            title = strip_annotations(line.trim_start_matches('#'));
        } else {
            buffer.push(line);
        }
    }
    flush(&mut sections, &title, &mut buffer);

    sections
}

fn flush(sections: &mut Vec<Section>, title: &str, buffer: &mut Vec<&str>) {
    if buffer.is_empty() {
        return;
    }
    sections.push(Section {
        title: title.to_string(),
        id: slugify(title),
        elements: parse_elements(&buffer.join("\n")),
    });
    buffer.clear();
}

/// Segment a section buffer into code, table and text elements.
pub fn parse_elements(text: &str) -> Vec<ContentElement> {
    let mut elements = Vec::new();
    let mut last = 0;

    for caps in FENCED_CODE.captures_iter(text) {
        let (Some(whole), Some(content)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        push_plain(&mut elements, &text[last..whole.start()]);

        let language = caps.get(1).map_or("", |m| m.as_str().trim());
        elements.push(ContentElement::Code {
            language: if language.is_empty() {
                DEFAULT_CODE_LANGUAGE.to_string()
            } else {
                language.to_string()
            },
            content: content.as_str().to_string(),
        });
        last = whole.end();
    }
    push_plain(&mut elements, &text[last..]);

    elements
}

fn push_plain(elements: &mut Vec<ContentElement>, region: &str) {
    if region.trim().is_empty() {
        return;
    }
    let content = region.to_string();
    if looks_like_table(region) {
        elements.push(ContentElement::Table { content });
    } else {
        elements.push(ContentElement::Text { content });
    }
}

/// Heuristic table detection for a plain region.
///
/// A region is a table when one of its lines starts and ends with `|` and the
/// whole region holds more than [`TABLE_PIPE_THRESHOLD`] pipe characters, which
/// keeps short inline uses like `a | b` as text.
pub fn looks_like_table(region: &str) -> bool {
    let has_row = region.lines().any(|line| {
        let line = line.trim();
        line.len() >= 2 && line.starts_with('|') && line.ends_with('|')
    });
    has_row && region.matches('|').count() > TABLE_PIPE_THRESHOLD
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn text(content: &str) -> ContentElement {
        ContentElement::Text {
            content: content.to_string(),
        }
    }

    #[test]
    fn test_no_headings_yields_single_introduction() {
        // Given: A body without heading markers
        let body = "Some prose.\n\n# Level one is not a section\nMore prose.";

        // When: Sectioning
        let sections = parse_sections(body);

        // Then: One Introduction section holds everything
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Introduction");
        assert_eq!(sections[0].id, "introduction");
        assert_eq!(sections[0].elements, vec![text(body)]);
    }

    #[test]
    fn test_headings_split_sections() {
        let body = "lead\n## Getting Started {.cols-2}\nstart\n### Flags\nflag text\n#### Not a split\nstill flags";
        let sections = parse_sections(body);

        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Introduction", "Getting Started", "Flags"]);
        assert_eq!(sections[1].id, "getting-started");
        assert_eq!(
            sections[2].elements,
            vec![text("flag text\n#### Not a split\nstill flags")]
        );
    }

    #[test]
    fn test_heading_marker_needs_whitespace() {
        let sections = parse_sections("##NoSpace\n####### deep\ntext");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Introduction");
    }

    #[test]
    fn test_empty_flush_is_noop() {
        // Given: Consecutive headings and a body that starts with a heading
        let sections = parse_sections("## First\n## Second\ncontent");

        // Then: No section is emitted for the empty buffers
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Second");
    }

    #[test]
    fn test_blank_buffer_yields_section_without_elements() {
        let sections = parse_sections("## Only\n\n   \n");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Only");
        assert!(sections[0].elements.is_empty());
    }

    #[test]
    fn test_duplicate_titles_share_ids() {
        let sections = parse_sections("## Examples\na\n## Examples\nb");
        assert_eq!(sections[0].id, sections[1].id);
    }

    #[test]
    fn test_fenced_code_extraction() {
        let elements = parse_elements("before\n```python\nprint('hi')\n```\nafter");
        assert_eq!(
            elements,
            vec![
                text("before\n"),
                ContentElement::Code {
                    language: "python".into(),
                    content: "print('hi')\n".into(),
                },
                text("\nafter"),
            ]
        );
    }

    #[test]
    fn test_fence_without_language_uses_fallback() {
        let elements = parse_elements("```\nls -la\n```");
        assert_eq!(
            elements,
            vec![ContentElement::Code {
                language: "bash".into(),
                content: "ls -la\n".into(),
            }]
        );
    }

    #[test]
    fn test_fence_language_is_trimmed() {
        let elements = parse_elements("```  shell-session \necho\n```");
        match &elements[0] {
            ContentElement::Code { language, .. } => assert_eq!(language, "shell-session"),
            other => panic!("expected code, got {other:?}"),
        }
    }

    #[test]
    fn test_crlf_fence_extraction() {
        let elements = parse_elements("```python\r\nprint(1)\r\n```\r\n");
        assert_eq!(
            elements,
            vec![ContentElement::Code {
                language: "python".into(),
                content: "print(1)\r\n".into(),
            }]
        );
    }

    #[test]
    fn test_crlf_document_sections_and_code() {
        let raw = "---\r\ntitle: Git\r\n---\r\n## Setup\r\n```\r\ngit init\r\n```\r\n";
        let doc = parse(raw);
        assert_eq!(doc.frontmatter.title.as_deref(), Some("Git"));
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].title, "Setup");
        assert_eq!(doc.sections[0].elements.len(), 1);
        assert_eq!(doc.sections[0].elements[0].kind(), "code");
    }

    #[test]
    fn test_code_is_not_reinterpreted_as_table() {
        let elements = parse_elements("```\n| a | b | c |\n|---|---|---|\n```");
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].kind(), "code");
    }

    #[test]
    fn test_unterminated_fence_degrades_to_text() {
        let input = "```js\nconst x = 1;\n";
        assert_eq!(parse_elements(input), vec![text(input)]);
    }

    #[test]
    fn test_table_detection() {
        let table = "| Key | Action |\n|-----|--------|\n| `a` | append |";
        assert_eq!(
            parse_elements(table),
            vec![ContentElement::Table {
                content: table.into()
            }]
        );
    }

    #[test]
    fn test_exactly_four_pipes_is_text() {
        let region = "| a | b |\n|";
        assert_eq!(region.matches('|').count(), 4);
        assert_eq!(parse_elements(region), vec![text(region)]);
    }

    #[test]
    fn test_five_pipes_is_table() {
        let region = "| a | b |\n| c |";
        assert_eq!(region.matches('|').count(), 5);
        assert!(looks_like_table(region));
    }

    #[test]
    fn test_pipes_without_row_line_are_text() {
        let region = "use a | b | c | d | e | f in pipelines";
        assert!(!looks_like_table(region));
    }

    #[test]
    fn test_blank_regions_are_discarded() {
        let elements = parse_elements("\n\n```\nx\n```\n\n   \n```\ny\n```\n");
        assert_eq!(elements.len(), 2);
        assert!(elements.iter().all(|e| e.kind() == "code"));
    }

    #[test]
    fn test_parse_full_document() {
        let raw = "---\ntitle: Redis\nbackground: bg-red-600\n---\n\nIntro line\n## Strings\n| cmd | desc |\n|-----|------|\n| GET | read |\n";
        let doc = parse(raw);

        assert_eq!(doc.frontmatter.title.as_deref(), Some("Redis"));
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[0].elements, vec![text("Intro line")]);
        assert_eq!(doc.sections[1].elements[0].kind(), "table");
    }

    #[test]
    fn test_parse_document_applies_fallbacks() {
        let doc = parse_document(Slug::parse("kotlin").unwrap(), "no front matter\n");
        assert_eq!(doc.title, "kotlin");
        assert_eq!(doc.background, "bg-gray-500");
        assert_eq!(doc.date, "");
        assert_eq!(doc.intro, "");
        assert!(doc.tags.is_empty());
        assert_eq!(doc.content, "no front matter");
    }

    #[test]
    fn test_parse_document_reads_fields() {
        let raw = "---\ntitle: Vim\nbackground: bg-green-600\ntags: [editor]\nintro: |\n  Modal editing.\n---\n\n## Motions\nhjkl\n";
        let doc = parse_document(Slug::parse("vim").unwrap(), raw);
        assert_eq!(doc.title, "Vim");
        assert_eq!(doc.background, "bg-green-600");
        assert_eq!(doc.tags, vec!["editor"]);
        assert_eq!(doc.intro, "Modal editing.");
        assert_eq!(doc.content, "## Motions\nhjkl");
    }

    proptest! {
        #[test]
        fn prop_parse_elements_is_deterministic(input in "[a-z|`# \n]{0,200}") {
            prop_assert_eq!(parse_elements(&input), parse_elements(&input));
        }

        #[test]
        fn prop_parse_never_panics(input in "\\PC{0,300}") {
            let _ = parse(&input);
        }

        #[test]
        fn prop_headingless_body_is_one_section(input in "[a-z |`\n]{1,200}") {
            let sections = parse_sections(&input);
            prop_assert_eq!(sections.len(), 1);
            prop_assert_eq!(sections[0].title.as_str(), "Introduction");
        }

        #[test]
        fn prop_well_formed_fence_round_trips(
            lang in "[a-z]{0,8}",
            newline in prop_oneof![Just("\n"), Just("\r\n")],
            body in "[a-z ;=\n]{0,80}",
        ) {
            let input = format!("```{lang}{newline}{body}```");
            let elements = parse_elements(&input);
            let expected_lang = if lang.is_empty() { "bash".to_string() } else { lang.clone() };
            prop_assert_eq!(
                elements,
                vec![ContentElement::Code { language: expected_lang, content: body }]
            );
        }
    }
}
