//! Error types.
//!
//! Invalid card numbers are never errors: they are reported as negative
//! verdicts. The types here cover the conditions that abort an invocation.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// A template that does not end in exactly four wildcard markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The template does not end in exactly four `*` characters.
    WildcardCount {
        /// The number of trailing `*` characters found.
        found: usize,
    },

    /// A `*` appears before the trailing wildcard run.
    MisplacedWildcard {
        /// Position of the offending `*` in the trimmed template (0-indexed).
        position: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WildcardCount { found } => {
                write!(
                    f,
                    "the number of asterisks at the end must be exactly 4, got {}",
                    found
                )
            }
            Self::MisplacedWildcard { position } => {
                write!(
                    f,
                    "asterisks must be at the end (found one at position {})",
                    position
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// Failure to read a brand or issuer table.
#[derive(Debug)]
pub enum TableError {
    /// The source could not be opened or read.
    Io {
        /// Path of the table file, if the source was a file.
        path: Option<PathBuf>,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl TableError {
    pub(crate) fn io(path: Option<PathBuf>, source: io::Error) -> Self {
        Self::Io { path, source }
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                path: Some(path),
                source,
            } => write!(f, "cannot read table {}: {}", path.display(), source),
            Self::Io { path: None, source } => write!(f, "cannot read table: {}", source),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Top-level error for command execution.
#[derive(Debug)]
pub enum Error {
    /// Malformed generation template.
    Template(TemplateError),
    /// Unreadable brand or issuer table.
    Table(TableError),
    /// The requested brand is not in the brand table.
    UnknownBrand(String),
    /// The requested issuer is not in the issuer table.
    UnknownIssuer(String),
    /// No card numbers were supplied.
    NoNumbers,
    /// Reading input or writing output failed.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(e) => write!(f, "{}", e),
            Self::Table(e) => write!(f, "{}", e),
            Self::UnknownBrand(name) => write!(f, "brand not found: {}", name),
            Self::UnknownIssuer(name) => write!(f, "issuer not found: {}", name),
            Self::NoNumbers => write!(f, "no card numbers given"),
            Self::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Template(e) => Some(e),
            Self::Table(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TemplateError> for Error {
    fn from(err: TemplateError) -> Self {
        Self::Template(err)
    }
}

impl From<TableError> for Error {
    fn from(err: TableError) -> Self {
        Self::Table(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
