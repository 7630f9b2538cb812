//! Documents served by identifier.
//!
//! A [`Catalog`] joins a [`DocumentSource`] with the parser. It holds no cache:
//! every call reads the source again, so edits to a corpus directory show up
//! on the next call.

use std::io::ErrorKind;
use tracing::{debug, warn};

use crate::category::Category;
use crate::index::SearchIndex;
use crate::parser::{parse_document, parse_sections};
use crate::source::DocumentSource;
use crate::{Document, Error, Result, SearchRecord, Section, Slug};

/// Number of related documents suggested by default
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Parsed view over a document source.
#[derive(Debug, Clone)]
pub struct Catalog<S> {
    source: S,
}

impl<S: DocumentSource> Catalog<S> {
    /// Wrap a source.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Every document in listing order.
    ///
    /// Ids that vanish between listing and reading are skipped, as are
    /// documents whose bytes are not valid UTF-8.
    pub fn all_documents(&self) -> Result<Vec<Document>> {
        let ids = self.source.list_ids()?;
        let mut documents = Vec::with_capacity(ids.len());

        for id in ids {
            let slug = match Slug::parse(&id) {
                Ok(slug) => slug,
                Err(e) => {
                    warn!(id = %id, error = %e, "skipping document with invalid identifier");
                    continue;
                },
            };
            match self.source.read(slug.as_str()) {
                Ok(Some(raw)) => documents.push(parse_document(slug, &raw)),
                Ok(None) => debug!(id = %id, "document disappeared while listing"),
                Err(Error::Io(e)) if e.kind() == ErrorKind::InvalidData => {
                    warn!(id = %id, error = %e, "skipping unreadable document");
                },
                Err(e) => return Err(e),
            }
        }

        debug!(count = documents.len(), "loaded documents");
        Ok(documents)
    }

    /// Retrieve one document.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingIdentifier`] when `id` is absent or blank
    /// - [`Error::InvalidIdentifier`] when `id` is not a valid slug
    /// - [`Error::NotFound`] when no such document exists
    pub fn get(&self, id: Option<&str>) -> Result<Document> {
        let id = id.map(str::trim).filter(|id| !id.is_empty());
        let Some(id) = id else {
            return Err(Error::MissingIdentifier);
        };
        let slug = Slug::parse(id)?;

        self.source
            .read(slug.as_str())?
            .map(|raw| parse_document(slug.clone(), &raw))
            .ok_or_else(|| Error::NotFound(format!("document '{slug}'")))
    }

    /// Parsed body sections of one document.
    pub fn sections(&self, id: &str) -> Result<Vec<Section>> {
        let document = self.get(Some(id))?;
        let sections = parse_sections(&document.content);
        debug!(slug = %document.slug, sections = sections.len(), "parsed sections");
        Ok(sections)
    }

    /// Search projection of every document, in listing order.
    pub fn search_records(&self) -> Result<Vec<SearchRecord>> {
        Ok(self
            .all_documents()?
            .iter()
            .map(SearchRecord::from)
            .collect())
    }

    /// Search index over [`Self::search_records`].
    pub fn search_index(&self) -> Result<SearchIndex> {
        Ok(SearchIndex::build(self.search_records()?))
    }

    /// Up to `limit` other documents, same category first.
    ///
    /// Within each group documents keep listing order.
    pub fn related(&self, id: &str, limit: usize) -> Result<Vec<Document>> {
        let current = self.get(Some(id))?;
        let category = current.category();

        let (same, other): (Vec<Document>, Vec<Document>) = self
            .all_documents()?
            .into_iter()
            .filter(|doc| doc.slug != current.slug)
            .partition(|doc| doc.category() == category);

        Ok(same.into_iter().chain(other).take(limit).collect())
    }

    /// Document count per category, in [`Category::ALL`] order.
    pub fn category_counts(&self) -> Result<Vec<(Category, usize)>> {
        let documents = self.all_documents()?;
        Ok(Category::ALL
            .into_iter()
            .map(|category| {
                let count = documents
                    .iter()
                    .filter(|doc| doc.category() == category)
                    .count();
                (category, count)
            })
            .collect())
    }
}
