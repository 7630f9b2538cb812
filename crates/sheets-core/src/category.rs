//! Keyword-based categorisation of cheat sheets.
//!
//! Categories are derived from a document's slug and title on demand and are
//! never stored, so a renamed document is reclassified automatically.
//!
//! ## Algorithm
//!
//! The lowercased `slug + " " + title` is tested against keyword sets in a
//! fixed order; the first set with a substring hit wins and anything left over
//! is a [`Category::Language`]:
//!
//! ```rust
//! use sheets_core::{Category, classify};
//!
//! assert_eq!(classify("Redis Commands", "redis-cheatsheet"), Category::Database);
//! assert_eq!(classify("Git Basics", "git-basics"), Category::Tool);
//! assert_eq!(classify("Kotlin Syntax", "kotlin"), Category::Language);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rules in evaluation order; the first keyword hit decides.
const RULES: &[(Category, &[&str])] = &[
    (Category::Software, &["excel", "word", "adobe", "photoshop"]),
    (Category::Os, &["linux", "windows", "macos", "cmd"]),
    (Category::Database, &["sql", "mongo", "redis"]),
    (Category::Framework, &["react", "vue", "angular", "next"]),
    (Category::Tool, &["git", "docker", "vim", "npm", "bash"]),
];

/// Closed set of classification labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Programming languages, the catch-all
    Language,
    /// Web/application frameworks
    Framework,
    /// Developer tooling
    Tool,
    /// Databases and query languages
    Database,
    /// Operating systems and shells
    Os,
    /// Desktop software
    Software,
}

impl Category {
    /// All categories in the order a category picker lists them.
    pub const ALL: [Self; 6] = [
        Self::Language,
        Self::Framework,
        Self::Tool,
        Self::Database,
        Self::Os,
        Self::Software,
    ];

    /// Stable identifier used in URLs and JSON.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::Framework => "framework",
            Self::Tool => "tool",
            Self::Database => "database",
            Self::Os => "os",
            Self::Software => "software",
        }
    }

    /// Human-readable plural label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Language => "Languages",
            Self::Framework => "Frameworks",
            Self::Tool => "Tools",
            Self::Database => "Databases",
            Self::Os => "System",
            Self::Software => "Software",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.id() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown category '{s}' (expected one of: {})",
                    Self::ALL.map(Self::id).join(", ")
                )
            })
    }
}

/// Classify a document by keyword matching over its slug and title.
pub fn classify(title: &str, slug: &str) -> Category {
    let haystack = format!("{slug} {title}").to_lowercase();

    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| haystack.contains(kw)))
        .map_or(Category::Language, |(category, _)| *category)
}

/// Grid filter selection: everything, or a single category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No filtering
    #[default]
    All,
    /// Keep only this category
    Only(Category),
}

impl CategoryFilter {
    /// Whether a category passes the filter.
    #[must_use]
    pub fn accepts(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl From<Option<Category>> for CategoryFilter {
    fn from(category: Option<Category>) -> Self {
        category.map_or(Self::All, Self::Only)
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_examples() {
        assert_eq!(classify("Redis Commands", "redis-cheatsheet"), Category::Database);
        assert_eq!(classify("Git Basics", "git-basics"), Category::Tool);
        assert_eq!(classify("Kotlin Syntax", "kotlin"), Category::Language);
    }

    #[test]
    fn test_each_rule() {
        let cases = [
            ("Excel", "excel", Category::Software),
            ("Photoshop", "ps", Category::Software),
            ("Linux Command", "linux-command", Category::Os),
            ("CMD", "windows-cmd", Category::Os),
            ("MySQL", "mysql", Category::Database),
            ("MongoDB", "mongodb", Category::Database),
            ("Vue 3", "vue", Category::Framework),
            ("Angular", "angular", Category::Framework),
            ("Docker", "docker", Category::Tool),
            ("npm", "npm", Category::Tool),
            ("Bash", "bash", Category::Tool),
            ("Python", "python", Category::Language),
        ];
        for (title, slug, expected) in cases {
            assert_eq!(classify(title, slug), expected, "{slug}");
        }
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // Given: A title hitting both the `os` and `tool` keyword sets
        // Then: The earlier `os` rule wins
        assert_eq!(classify("Bash on Linux", "bash"), Category::Os);
        // "github" contains "git", and "react" is checked before it
        assert_eq!(classify("React on GitHub Pages", "gh-pages"), Category::Framework);
        // "keyword" contains "word": substring matching is intentional
        assert_eq!(classify("Keywords", "java-keywords"), Category::Software);
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(classify("POSTGRESQL", "PG"), Category::Database);
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("os".parse::<Category>().unwrap(), Category::Os);
        assert_eq!(" Tool ".parse::<Category>().unwrap(), Category::Tool);
        assert!("games".parse::<Category>().is_err());
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "database".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Database)
        );
    }

    #[test]
    fn test_filter_accepts() {
        assert!(CategoryFilter::All.accepts(Category::Tool));
        assert!(CategoryFilter::Only(Category::Tool).accepts(Category::Tool));
        assert!(!CategoryFilter::Only(Category::Tool).accepts(Category::Os));
        assert_eq!(CategoryFilter::from(None), CategoryFilter::All);
    }

    #[test]
    fn test_category_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Category::Os).unwrap(), "\"os\"");
        assert_eq!(Category::Os.label(), "System");
    }
}
