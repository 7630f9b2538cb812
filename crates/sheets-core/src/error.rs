//! Error types and handling for sheets-core operations.
//!
//! Parsing, classification and search are total: they never fail and therefore
//! never produce an [`Error`]. The error type covers the edges of the system,
//! where documents are located, read and served by identifier.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: reading the corpus directory or a config file
//! - **Lookup Errors**: missing, invalid or unknown document identifiers
//! - **Configuration Errors**: malformed config files
//! - **Serialization Errors**: JSON/TOML conversion failures
//!
//! ## Client errors
//!
//! Lookups distinguish a caller mistake from an absent document:
//!
//! ```rust
//! use sheets_core::{Catalog, Error, MemorySource};
//!
//! let catalog = Catalog::new(MemorySource::new());
//! match catalog.get(None) {
//!     Err(e @ Error::MissingIdentifier) => assert!(e.is_client_error()),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! assert!(matches!(catalog.get(Some("nope")), Err(Error::NotFound(_))));
//! ```

use thiserror::Error;

/// The main error type for sheets-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers reading corpus files and configuration files. The underlying
    /// `std::io::Error` is preserved.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Requested document does not exist in the corpus.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A lookup was attempted without an identifier.
    #[error("Document identifier required")]
    MissingIdentifier,

    /// The identifier is not a URL-safe slug.
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic error for cases not covered by specific variants.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Whether the error was caused by the caller's input rather than the system.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingIdentifier | Self::InvalidIdentifier(_))
    }

    /// Get the error category as a string identifier.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::NotFound(_) => "not_found",
            Self::MissingIdentifier | Self::InvalidIdentifier(_) => "bad_request",
            Self::Config(_) => "config",
            Self::Serialization(_) => "serialization",
            Self::Other(_) => "other",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
