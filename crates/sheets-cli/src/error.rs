//! CLI error handling with semantic exit codes.
//!
//! # Exit Code Categories
//!
//! | Code | Category | Description |
//! |------|----------|-------------|
//! | 0 | Success | Command completed successfully |
//! | 1 | `Internal` | Unexpected/internal error |
//! | 2 | `Usage` | Invalid arguments, identifiers or configuration |
//! | 3 | `NotFound` | Requested document not found |
//! | 7 | `Integrity` | Unreadable or malformed local data |
//!
//! ```bash
//! sheets get docker
//! case $? in
//!     0) echo "Success" ;;
//!     3) echo "No such cheat sheet" ;;
//!     *) echo "Other error" ;;
//! esac
//! ```

use std::fmt;

/// Semantic error category determining the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Unexpected or internal error (exit code 1).
    Internal = 1,

    /// Invalid arguments or configuration (exit code 2).
    ///
    /// Includes missing and malformed document identifiers.
    Usage = 2,

    /// Requested document not found (exit code 3).
    NotFound = 3,

    /// Local data is corrupted or unreadable (exit code 7).
    Integrity = 7,
}

impl ErrorCategory {
    /// Get the exit code for this category.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        self as u8
    }

    /// Get a short description of this error category.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Internal => "internal error",
            Self::Usage => "usage error",
            Self::NotFound => "not found",
            Self::Integrity => "integrity error",
        }
    }

    /// Infer the error category from an error message.
    ///
    /// Fallback for errors that carry neither a [`CliError`] nor a
    /// [`sheets_core::Error`].
    #[must_use]
    pub fn infer_from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("not found")
            || msg_lower.contains("no such")
            || msg_lower.contains("does not exist")
        {
            return Self::NotFound;
        }

        if msg_lower.contains("corrupt")
            || msg_lower.contains("malformed")
            || msg_lower.contains("invalid utf-8")
        {
            return Self::Integrity;
        }

        if msg_lower.contains("invalid argument")
            || msg_lower.contains("invalid identifier")
            || msg_lower.contains("identifier required")
            || msg_lower.contains("invalid value")
        {
            return Self::Usage;
        }

        Self::Internal
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl From<&sheets_core::Error> for ErrorCategory {
    fn from(err: &sheets_core::Error) -> Self {
        use sheets_core::Error;

        match err {
            Error::NotFound(_) => Self::NotFound,
            Error::MissingIdentifier | Error::InvalidIdentifier(_) | Error::Config(_) => {
                Self::Usage
            },
            Error::Serialization(_) => Self::Integrity,
            Error::Io(io) if io.kind() == std::io::ErrorKind::InvalidData => Self::Integrity,
            Error::Io(_) | Error::Other(_) => Self::Internal,
        }
    }
}

/// A CLI error with a semantic category for exit code mapping.
#[derive(Debug)]
pub struct CliError {
    /// The semantic category of this error.
    pub category: ErrorCategory,
    /// The underlying error with full context.
    pub source: anyhow::Error,
}

impl CliError {
    /// Create a new CLI error with explicit category.
    pub fn new(category: ErrorCategory, source: impl Into<anyhow::Error>) -> Self {
        Self {
            category,
            source: source.into(),
        }
    }

    /// Create a usage error.
    pub fn usage(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Usage, source)
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.category.exit_code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        // Display already shows `source`; continue with its cause
        self.source.source()
    }
}

/// Determine the exit code from an `anyhow::Error`.
///
/// An explicit [`CliError`] wins, then a [`sheets_core::Error`] anywhere in
/// the chain, then message inference.
#[must_use]
pub fn exit_code_from_error(err: &anyhow::Error) -> u8 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }

    if let Some(core_err) = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<sheets_core::Error>())
    {
        return ErrorCategory::from(core_err).exit_code();
    }

    ErrorCategory::infer_from_message(&err.to_string()).exit_code()
}
