use std::fmt;

use thiserror::Error;

use crate::types::{DatasetId, Extension, Filename};

/// Why a filename did not yield a partition key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PartitionFailure {
    /// No candidate matched the partition pattern.
    Missing,
    /// More than one candidate matched, so the partition key is not unique.
    Ambiguous {
        /// Matched fragments, in the order they appear in the filename.
        matches: Vec<String>,
    },
}

impl fmt::Display for PartitionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "no partition key present"),
            Self::Ambiguous { matches } => {
                write!(f, "ambiguous partition key, candidates {}", matches.join(", "))
            }
        }
    }
}

/// Error type for descriptor derivation, catalog lookup, and serialization failures.
#[derive(Debug, Error)]
pub enum DatapackageError {
    #[error("malformed filename '{filename}': {reason}")]
    MalformedFilename {
        filename: Filename,
        reason: PartitionFailure,
    },
    #[error("unknown format '{extension}' for file '{filename}'")]
    UnknownFormat {
        filename: Filename,
        extension: Extension,
    },
    #[error("listing entry '{filename}' has no '{field}' link")]
    MissingUrl {
        filename: Filename,
        field: &'static str,
    },
    #[error("invalid partition pattern: {0}")]
    InvalidPattern(String),
    #[error("unknown dataset '{0}'")]
    UnknownDataset(DatasetId),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
