//! Catalog output error types.

use thiserror::Error;

/// Errors that can occur while serializing or writing the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to write the catalog file.
    #[error("Failed to write catalog to '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the catalog.
    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
}
