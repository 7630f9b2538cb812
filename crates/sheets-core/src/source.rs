//! Where raw cheat-sheet text comes from.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{Result, Slug};

/// File extension of corpus documents.
pub const DOCUMENT_EXTENSION: &str = "md";

/// Enumerates document identifiers and returns raw text.
pub trait DocumentSource {
    /// Identifiers in listing order.
    fn list_ids(&self) -> Result<Vec<String>>;

    /// Raw text for `id`, or `None` when there is no such document.
    fn read(&self, id: &str) -> Result<Option<String>>;
}

/// A corpus directory of `<id>.md` files.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Source over `root`. The directory need not exist yet.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Corpus directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.{DOCUMENT_EXTENSION}"))
    }
}

impl DocumentSource for DirectorySource {
    fn list_ids(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(root = %self.root.display(), "corpus directory missing");
                return Ok(Vec::new());
            },
            Err(e) => return Err(e.into()),
        };

        let mut ids = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some(DOCUMENT_EXTENSION)
            {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                warn!(path = %path.display(), "skipping document with non-UTF-8 name");
                continue;
            };
            if let Err(e) = Slug::parse(stem) {
                warn!(path = %path.display(), error = %e, "skipping document with invalid name");
                continue;
            }
            ids.push(stem.to_string());
        }

        ids.sort();
        debug!(root = %self.root.display(), count = ids.len(), "listed corpus");
        Ok(ids)
    }

    fn read(&self, id: &str) -> Result<Option<String>> {
        // Never join unvalidated input onto the root
        let Ok(slug) = Slug::parse(id) else {
            return Ok(None);
        };
        match fs::read_to_string(self.path_for(slug.as_str())) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory documents, listed in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: Vec<(String, String)>,
}

impl MemorySource {
    /// Empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a document, builder style.
    #[must_use]
    pub fn with(mut self, id: impl Into<String>, raw: impl Into<String>) -> Self {
        self.insert(id, raw);
        self
    }

    /// Add or replace a document. A replaced document keeps its position.
    pub fn insert(&mut self, id: impl Into<String>, raw: impl Into<String>) {
        let id = id.into();
        let raw = raw.into();
        if let Some(slot) = self.documents.iter_mut().find(|(existing, _)| *existing == id) {
            slot.1 = raw;
        } else {
            self.documents.push((id, raw));
        }
    }
}

impl DocumentSource for MemorySource {
    fn list_ids(&self) -> Result<Vec<String>> {
        Ok(self.documents.iter().map(|(id, _)| id.clone()).collect())
    }

    fn read(&self, id: &str) -> Result<Option<String>> {
        Ok(self
            .documents
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, raw)| raw.clone()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directory_lists_sorted_markdown_stems() {
        // Given: A corpus with documents, a stray file and an invalid name
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("vim.md"), "## A\n").unwrap();
        fs::write(dir.path().join("bash.md"), "## B\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        fs::write(dir.path().join("bad name.md"), "ignored").unwrap();
        fs::create_dir(dir.path().join("nested.md")).unwrap();

        // When: Listing
        let ids = DirectorySource::new(dir.path()).list_ids().unwrap();

        // Then: Only valid markdown files, sorted
        assert_eq!(ids, vec!["bash", "vim"]);
    }

    #[test]
    fn test_directory_missing_root_is_empty() {
        let dir = TempDir::new().unwrap();
        let source = DirectorySource::new(dir.path().join("does-not-exist"));
        assert!(source.list_ids().unwrap().is_empty());
        assert_eq!(source.read("bash").unwrap(), None);
    }

    #[test]
    fn test_directory_read() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("git.md"), "---\ntitle: Git\n---\n").unwrap();
        let source = DirectorySource::new(dir.path());

        assert_eq!(
            source.read("git").unwrap().as_deref(),
            Some("---\ntitle: Git\n---\n")
        );
        assert_eq!(source.read("missing").unwrap(), None);
    }

    #[test]
    fn test_directory_read_rejects_traversal() {
        let dir = TempDir::new().unwrap();
        let corpus = dir.path().join("corpus");
        fs::create_dir(&corpus).unwrap();
        fs::write(dir.path().join("secret.md"), "outside").unwrap();

        let source = DirectorySource::new(&corpus);
        assert_eq!(source.read("../secret").unwrap(), None);
    }

    #[test]
    fn test_memory_source_keeps_insertion_order() {
        let mut source = MemorySource::new().with("zsh", "z").with("awk", "a");
        source.insert("zsh", "replaced");

        assert_eq!(source.list_ids().unwrap(), vec!["zsh", "awk"]);
        assert_eq!(source.read("zsh").unwrap().as_deref(), Some("replaced"));
        assert_eq!(source.read("sed").unwrap(), None);
    }
}
