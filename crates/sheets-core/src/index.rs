//! Fuzzy search over cheat-sheet metadata.
//!
//! The index serves two surfaces: the quick-switcher ([`SearchIndex::palette`])
//! and the catalogue grid ([`SearchIndex::filter`]). Both rank with the same
//! scorer:
//!
//! 1. Skim-style subsequence matching over the lowercased `title`, `slug` and
//!    `tags`, kept when the score clears a per-character floor.
//! 2. A typo pass for queries of three or more characters, accepting fields,
//!    words or word prefixes within a small optimal-string-alignment distance,
//!    which tolerates transpositions such as `gti` for `git` and half-typed
//!    slips such as `dokc` for `docker`.
//!
//! Ranking is by descending score with ties in insertion order. An empty query
//! browses: records come back in insertion order, unranked.
//!
//! ```rust
//! use sheets_core::{SearchIndex, SearchRecord, Slug};
//!
//! let records = ["git", "docker", "redis"]
//!     .iter()
//!     .map(|s| SearchRecord::new(s.to_uppercase(), Slug::parse(s).unwrap()))
//!     .collect();
//! let index = SearchIndex::build(records);
//!
//! assert_eq!(index.query("dokcer", 8)[0].slug.as_str(), "docker");
//! assert_eq!(index.query("", 2).len(), 2);
//! assert!(index.query("zzzz", 8).is_empty());
//! ```

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::{Category, CategoryFilter, classify};
use crate::{Document, Slug};

/// Records shown for an empty palette query
pub const BROWSE_LIMIT: usize = 5;

/// Results shown for a non-empty palette query
pub const PALETTE_LIMIT: usize = 8;

/// Minimum subsequence score per query character
const MIN_SCORE_PER_CHAR: i64 = 8;

/// Fraction of the query length allowed as edits in the typo pass
const TYPO_RATIO: f64 = 0.3;

/// Shortest query eligible for the typo pass
const TYPO_MIN_QUERY_CHARS: usize = 3;

/// Lightweight projection of a [`Document`] for indexing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// Display title
    pub title: String,
    /// Document identifier
    pub slug: Slug,
    /// Optional tags, matched like the title
    #[serde(default)]
    pub tags: Vec<String>,
}

impl SearchRecord {
    /// Record without tags.
    pub fn new(title: impl Into<String>, slug: Slug) -> Self {
        Self {
            title: title.into(),
            slug,
            tags: Vec::new(),
        }
    }

    /// Attach tags.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Category derived from slug and title.
    pub fn category(&self) -> Category {
        classify(&self.title, self.slug.as_str())
    }
}

impl From<&Document> for SearchRecord {
    fn from(doc: &Document) -> Self {
        Self {
            title: doc.title.clone(),
            slug: doc.slug.clone(),
            tags: doc.tags.clone(),
        }
    }
}

/// Which field produced a record's best score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchField {
    /// The title
    Title,
    /// The slug
    Slug,
    /// One of the tags
    Tag,
}

/// A ranked match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    /// Matched record
    pub record: &'a SearchRecord,
    /// Match quality, higher is better
    pub score: i64,
    /// Field the score came from
    pub field: MatchField,
}

/// Immutable fuzzy index over a record collection.
///
/// There is no incremental update: rebuild when the collection changes.
pub struct SearchIndex {
    records: Vec<SearchRecord>,
    keys: Vec<Vec<(MatchField, String)>>,
    matcher: SkimMatcherV2,
    browse_limit: usize,
    palette_limit: usize,
}

impl SearchIndex {
    /// Index `records`, preserving their order.
    pub fn build(records: Vec<SearchRecord>) -> Self {
        let keys = records
            .iter()
            .map(|record| {
                let mut keys = vec![
                    (MatchField::Title, record.title.to_lowercase()),
                    (MatchField::Slug, record.slug.as_str().to_lowercase()),
                ];
                keys.extend(
                    record
                        .tags
                        .iter()
                        .map(|tag| (MatchField::Tag, tag.to_lowercase())),
                );
                keys
            })
            .collect();

        debug!(records = records.len(), "built search index");

        Self {
            records,
            keys,
            matcher: SkimMatcherV2::default(),
            browse_limit: BROWSE_LIMIT,
            palette_limit: PALETTE_LIMIT,
        }
    }

    /// Override the palette limits.
    #[must_use]
    pub const fn with_limits(mut self, browse_limit: usize, palette_limit: usize) -> Self {
        self.browse_limit = browse_limit;
        self.palette_limit = palette_limit;
        self
    }

    /// Indexed records in insertion order.
    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    /// Number of indexed records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All matches for a non-empty query, best first.
    ///
    /// An empty query has no matches here; use [`Self::query`] for browsing.
    pub fn search(&self, text: &str) -> Vec<SearchHit<'_>> {
        let query = text.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit<'_>> = self
            .records
            .iter()
            .zip(&self.keys)
            .filter_map(|(record, keys)| {
                self.best_score(keys, &query)
                    .map(|(score, field)| SearchHit {
                        record,
                        score,
                        field,
                    })
            })
            .collect();

        // Stable: equal scores keep insertion order
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits
    }

    /// Up to `limit` records: insertion order for an empty query, ranked otherwise.
    pub fn query(&self, text: &str, limit: usize) -> Vec<&SearchRecord> {
        if text.trim().is_empty() {
            return self.records.iter().take(limit).collect();
        }
        self.search(text)
            .into_iter()
            .take(limit)
            .map(|hit| hit.record)
            .collect()
    }

    /// Quick-switcher results: a short browse list or the top matches.
    pub fn palette(&self, text: &str) -> Vec<&SearchRecord> {
        let limit = if text.trim().is_empty() {
            self.browse_limit
        } else {
            self.palette_limit
        };
        self.query(text, limit)
    }

    /// Grid results: every match (or every record) restricted to a category.
    pub fn filter(&self, text: &str, category: CategoryFilter) -> Vec<&SearchRecord> {
        self.query(text, usize::MAX)
            .into_iter()
            .filter(|record| category.accepts(record.category()))
            .collect()
    }

    fn best_score(&self, keys: &[(MatchField, String)], query: &str) -> Option<(i64, MatchField)> {
        let query_chars = query.chars().count();
        let floor = MIN_SCORE_PER_CHAR * i64::try_from(query_chars).unwrap_or(i64::MAX / 16);

        let mut best: Option<(i64, MatchField)> = None;
        for (field, key) in keys {
            let score = self
                .matcher
                .fuzzy_match(key, query)
                .filter(|score| *score >= floor)
                .or_else(|| typo_score(key, query, query_chars));

            if let Some(score) = score {
                if best.is_none_or(|(current, _)| score > current) {
                    best = Some((score, *field));
                }
            }
        }
        best
    }
}

/// Score for a near-miss, always below any accepted subsequence score.
fn typo_score(key: &str, query: &str, query_chars: usize) -> Option<i64> {
    if query_chars < TYPO_MIN_QUERY_CHARS {
        return None;
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let max_edits = ((query_chars as f64 * TYPO_RATIO).ceil() as usize).max(1);

    let shortest = query_chars.saturating_sub(max_edits).max(1);
    let longest = query_chars + max_edits;

    let distance = std::iter::once(key)
        .chain(key.split(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty())
        .flat_map(|word| std::iter::once(word).chain(prefixes(word, shortest, longest)))
        .map(|candidate| edit_distance(candidate, query))
        .min()?;

    if distance > max_edits {
        return None;
    }
    let chars = i64::try_from(query_chars).ok()?;
    let distance = i64::try_from(distance).ok()?;
    Some((MIN_SCORE_PER_CHAR / 2).saturating_mul(chars) - distance)
}

/// Prefixes of `word` holding between `shortest` and `longest` chars.
fn prefixes(word: &str, shortest: usize, longest: usize) -> impl Iterator<Item = &str> {
    word.char_indices()
        .skip(1)
        .map(|(end, _)| end)
        .chain(std::iter::once(word.len()))
        .enumerate()
        .filter(move |(i, _)| (shortest..=longest).contains(&(i + 1)))
        .map(move |(_, end)| &word[..end])
}

/// Optimal string alignment distance (Levenshtein plus adjacent transpositions).
fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let width = b.len() + 1;
    let mut prev_prev = vec![0usize; width];
    let mut prev: Vec<usize> = (0..width).collect();
    let mut current = vec![0usize; width];

    for i in 1..=a.len() {
        current[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut value = (prev[j] + 1)
                .min(current[j - 1] + 1)
                .min(prev[j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                value = value.min(prev_prev[j - 2] + 1);
            }
            current[j] = value;
        }
        std::mem::swap(&mut prev_prev, &mut prev);
        std::mem::swap(&mut prev, &mut current);
    }

    prev[b.len()]
}
