use serde::{Deserialize, Serialize};
use std::fmt;

use crate::category::{Category, classify};
use crate::{Error, Result};

/// Maximum accepted slug length, matching typical file-name limits
const MAX_SLUG_LEN: usize = 128;

/// Fallback token for the background style hint
pub const DEFAULT_BACKGROUND: &str = "bg-gray-500";

/// URL-safe document identifier derived from the source file stem.
///
/// Only ASCII alphanumerics plus `-`, `_` and `.` are allowed, and `..` is
/// rejected so a slug can never escape the corpus directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Validate `raw` as a slug.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidIdentifier("identifier is empty".into()));
        }
        if trimmed.len() > MAX_SLUG_LEN {
            return Err(Error::InvalidIdentifier(format!(
                "identifier exceeds maximum length ({MAX_SLUG_LEN})"
            )));
        }
        if trimmed.contains("..")
            || !trimmed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            return Err(Error::InvalidIdentifier(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the slug text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Slug {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

/// One reference entry as served to presentation code.
///
/// Constructed once per read of a source document and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Stable identifier
    pub slug: Slug,
    /// Display name, the slug when absent
    pub title: String,
    /// Free-form date string, empty when absent
    pub date: String,
    /// Opaque style hint
    pub background: String,
    /// Tags declared in front-matter
    pub tags: Vec<String>,
    /// Categories declared in front-matter
    pub categories: Vec<String>,
    /// Introductory blurb, empty when absent
    pub intro: String,
    /// Body text after front-matter removal
    pub content: String,
}

impl Document {
    /// Category derived from slug and title.
    pub fn category(&self) -> Category {
        classify(&self.title, self.slug.as_str())
    }
}

/// A titled, ordered chunk of a document body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text with annotations stripped
    pub title: String,
    /// Anchor derived from the title; duplicates are possible
    pub id: String,
    /// Content in source order
    pub elements: Vec<ContentElement>,
}

/// Atomic renderable unit within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentElement {
    /// Prose, inline formatting unresolved
    Text {
        /// Verbatim region text
        content: String,
    },
    /// Fenced code block
    Code {
        /// Fence language token or the fallback
        language: String,
        /// Inner text without fence markers
        content: String,
    },
    /// Pipe-delimited block, split into cells at render time
    Table {
        /// Verbatim region text
        content: String,
    },
}

impl ContentElement {
    /// The element's text payload.
    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Self::Text { content } | Self::Code { content, .. } | Self::Table { content } => {
                content
            },
        }
    }

    /// Serialized tag of the variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Code { .. } => "code",
            Self::Table { .. } => "table",
        }
    }
}

/// Table-of-contents line for a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Section title
    pub title: String,
    /// Anchor id
    pub id: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_accepts_file_stems() {
        for raw in ["git", "redis-cheatsheet", "c_plus_plus", "vue.js", "ES6"] {
            let slug = Slug::parse(raw).unwrap();
            assert_eq!(slug.as_str(), raw);
        }
    }

    #[test]
    fn test_slug_rejects_unsafe_input() {
        for raw in ["", "   ", "../secret", "a/b", "a b", "naïve", "a..b", "x?y=1"] {
            assert!(
                matches!(Slug::parse(raw), Err(Error::InvalidIdentifier(_))),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_slug_length_limit() {
        assert!(Slug::parse(&"a".repeat(MAX_SLUG_LEN)).is_ok());
        assert!(Slug::parse(&"a".repeat(MAX_SLUG_LEN + 1)).is_err());
    }

    #[test]
    fn test_slug_serde_validates() {
        let slug: Slug = serde_json::from_str("\"docker\"").unwrap();
        assert_eq!(slug.to_string(), "docker");
        assert!(serde_json::from_str::<Slug>("\"../x\"").is_err());
    }

    #[test]
    fn test_content_element_tagging() {
        // Given: One element of each variant
        let elements = vec![
            ContentElement::Text {
                content: "hello".into(),
            },
            ContentElement::Code {
                language: "rust".into(),
                content: "fn main() {}".into(),
            },
            ContentElement::Table {
                content: "| a | b |".into(),
            },
        ];

        // When: Serializing
        let json = serde_json::to_value(&elements).unwrap();

        // Then: The variant tag is a `type` field
        assert_eq!(json[0]["type"], "text");
        assert_eq!(json[1]["type"], "code");
        assert_eq!(json[1]["language"], "rust");
        assert_eq!(json[2]["type"], "table");

        let kinds: Vec<_> = elements.iter().map(ContentElement::kind).collect();
        assert_eq!(kinds, vec!["text", "code", "table"]);
        assert_eq!(elements[1].content(), "fn main() {}");
    }
}
