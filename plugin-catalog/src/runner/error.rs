//! Runner error types.

use crate::catalog::CatalogError;
use crate::discovery::DiscoveryError;

/// Errors that can occur while running the catalog generator.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Candidate aggregation failed; the run is aborted without output.
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Raw-content HTTP client initialization errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Catalog serialization or output errors.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
