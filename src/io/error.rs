//! Error types for puzzle generation and storage operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// Every supplied word was rejected by the normalizer
    ///
    /// Individual words failing the length or alphabet rules are dropped
    /// silently; only a fully empty candidate list is fatal.
    EmptyCandidateList {
        /// Number of raw words supplied before filtering
        supplied: usize,
    },

    /// Generation option validation failed
    InvalidOption {
        /// Name of the invalid option
        option: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Strict placement could not fit every candidate word
    PlacementExhausted {
        /// Reshuffle rounds attempted before giving up
        rounds: usize,
        /// Words still unplaced in the best round
        dropped: Vec<String>,
    },

    /// Requested theme is not present in the catalog
    UnknownTheme {
        /// Theme identifier as requested
        name: String,
    },

    /// No stored artifact exists for the requested identifier
    MissingArtifact {
        /// Artifact identifier as requested
        id: String,
    },

    /// Store file system operation failure
    Storage {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Artifact or catalog (de)serialization failure
    Serialization {
        /// Description of what was being (de)serialized
        context: &'static str,
        /// Underlying serde error
        source: serde_json::Error,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCandidateList { supplied } => {
                write!(
                    f,
                    "All {supplied} supplied words were filtered out; nothing to place"
                )
            }
            Self::InvalidOption {
                option,
                value,
                reason,
            } => {
                write!(f, "Invalid option '{option}' = '{value}': {reason}")
            }
            Self::PlacementExhausted { rounds, dropped } => {
                write!(
                    f,
                    "Could not place every word after {rounds} rounds (unplaced: {})",
                    dropped.join(", ")
                )
            }
            Self::UnknownTheme { name } => {
                write!(f, "Unknown theme '{name}'")
            }
            Self::MissingArtifact { id } => {
                write!(f, "No stored puzzle with id '{id}'")
            }
            Self::Storage {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "Store error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { context, source } => {
                write!(f, "Serialization error in {context}: {source}")
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Storage { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for PuzzleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            context: "artifact",
            source: err,
        }
    }
}

/// Create an invalid option error
pub fn invalid_option(
    option: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidOption {
        option,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a storage error bound to a concrete path and operation
pub fn storage_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> PuzzleError {
    PuzzleError::Storage {
        path: path.into(),
        operation,
        source,
    }
}
