//! Configuration for the cheat-sheet catalogue.
//!
//! Configuration is a single TOML file. Every field has a default, so a
//! missing file and a partial file are both valid.
//!
//! ## File Location
//!
//! The first of these wins:
//!
//! 1. An explicit path (`sheets --config FILE`, or `SHEETS_CONFIG`)
//! 2. `$SHEETS_CONFIG_DIR/config.toml`
//! 3. `$XDG_CONFIG_HOME/sheets/config.toml`
//! 4. The platform config directory, e.g. `~/.config/sheets/config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [paths]
//! corpus = "/srv/cheatsheets/_posts"
//!
//! [search]
//! browse_limit = 5
//! palette_limit = 8
//! related_limit = 3
//! ```
//!
//! ```rust
//! use sheets_core::{Config, Result};
//!
//! let config: Config = toml::from_str("[search]\npalette_limit = 12\n")?;
//! assert_eq!(config.search.palette_limit, 12);
//! assert_eq!(config.search.browse_limit, 5);
//! # Ok::<(), sheets_core::Error>(())
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::catalog::DEFAULT_RELATED_LIMIT;
use crate::index::{BROWSE_LIMIT, PALETTE_LIMIT};
use crate::{Error, Result};

/// Config file name inside a config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Explicit config file override
pub const CONFIG_ENV: &str = "SHEETS_CONFIG";

/// Config directory override
pub const CONFIG_DIR_ENV: &str = "SHEETS_CONFIG_DIR";

/// Corpus directory used when nothing else is configured
pub const DEFAULT_CORPUS: &str = "data/reference/source/_posts";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File system locations
    pub paths: PathsConfig,
    /// Search and suggestion limits
    pub search: SearchConfig,
}

/// File system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory of `<slug>.md` documents
    pub corpus: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            corpus: PathBuf::from(DEFAULT_CORPUS),
        }
    }
}

/// Search and suggestion limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Records shown by an empty palette query
    pub browse_limit: usize,
    /// Results shown by a non-empty palette query
    pub palette_limit: usize,
    /// Related documents suggested per document
    pub related_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            browse_limit: BROWSE_LIMIT,
            palette_limit: PALETTE_LIMIT,
            related_limit: DEFAULT_RELATED_LIMIT,
        }
    }
}

impl Config {
    /// Load from the resolved location, or defaults when there is no file.
    ///
    /// `explicit` must exist when given; the resolved default location may be
    /// absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV).map(PathBuf::from) {
            return Self::load_from(&path);
        }

        match default_config_path(|name| std::env::var_os(name).map(PathBuf::from)) {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            },
            None => Ok(Self::default()),
        }
    }

    /// Load a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config {}: {e}", path.display()))
        })?;
        let config = toml::from_str(&content).map_err(|e| {
            Error::Config(format!("Failed to parse config {}: {e}", path.display()))
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {e}")))?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;
        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config: {e}")))?;
        Ok(())
    }

    /// Replace the corpus directory.
    #[must_use]
    pub fn with_corpus(mut self, corpus: impl Into<PathBuf>) -> Self {
        self.paths.corpus = corpus.into();
        self
    }
}

/// Default config file path given an environment lookup.
///
/// Explicit overrides are not consulted here.
pub fn default_config_path<F>(env: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<PathBuf>,
{
    let non_empty = |name: &str| env(name).filter(|p| !p.as_os_str().is_empty());

    if let Some(dir) = non_empty(CONFIG_DIR_ENV) {
        return Some(dir.join(CONFIG_FILE_NAME));
    }
    if let Some(xdg) = non_empty("XDG_CONFIG_HOME") {
        return Some(xdg.join("sheets").join(CONFIG_FILE_NAME));
    }
    directories::ProjectDirs::from("dev", "sheets", "sheets")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
