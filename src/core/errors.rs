//! Error types for dupexports operations

use super::{Dialect, SourceLocation};
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dupexports operations
///
/// Every variant is fatal for a run: a duplicate report built from an
/// incomplete symbol table is worse than no report.
#[derive(Debug, Error)]
pub enum Error {
    /// An exported form the extraction adapter does not recognize
    #[error("unsupported exported construct `{kind}` at {location}")]
    UnsupportedConstruct {
        kind: String,
        location: SourceLocation,
    },

    /// The same file was handed to the analysis pass twice
    #[error("file registered twice: {}", .0.display())]
    DuplicateRegistration(PathBuf),

    /// Parsing or extraction of a specific file failed
    #[error("failed to analyze {}", uri.display())]
    AnalysisFailure {
        uri: PathBuf,
        #[source]
        cause: Box<Error>,
    },

    /// The syntax analyzer rejected the source text
    #[error("syntax error at {location}: {message}")]
    Syntax {
        message: String,
        location: SourceLocation,
    },

    /// A tree-sitter grammar could not be loaded
    #[error("failed to load {dialect} grammar: {message}")]
    Grammar { dialect: Dialect, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Pattern errors
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),

    /// Directory walk errors
    #[error(transparent)]
    Walk(#[from] ignore::Error),
}

impl Error {
    pub fn unsupported(kind: impl Into<String>, location: SourceLocation) -> Self {
        Self::UnsupportedConstruct {
            kind: kind.into(),
            location,
        }
    }

    /// Wrap a per-file failure with the file's identity.
    pub fn analysis_failure(uri: impl Into<PathBuf>, cause: Error) -> Self {
        Self::AnalysisFailure {
            uri: uri.into(),
            cause: Box::new(cause),
        }
    }

    /// The file a failure is attributed to, if any.
    pub fn uri(&self) -> Option<&PathBuf> {
        match self {
            Self::AnalysisFailure { uri, .. } | Self::DuplicateRegistration(uri) => Some(uri),
            _ => None,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
