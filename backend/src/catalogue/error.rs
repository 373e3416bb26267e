//! Error types for catalogue loading.

use std::path::PathBuf;

/// Errors from building a [`Catalogue`](super::Catalogue).
///
/// Both variants are fatal at startup: the process must never serve requests
/// with a missing or half-loaded catalogue.
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    /// The data file is missing or unreadable.
    #[error("catalogue data unavailable at {path}: {source}")]
    DataUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file exists but does not parse into a valid catalogue.
    #[error("malformed catalogue data: {0}")]
    Malformed(String),
}

impl CatalogueError {
    pub(super) fn malformed(message: impl Into<String>) -> Self {
        CatalogueError::Malformed(message.into())
    }
}
