//! Candidate aggregation error types.

use thiserror::Error;

/// Errors that can occur while aggregating search results.
///
/// These are fatal: without a complete candidate list there is no meaningful
/// partial catalog, so aggregation failures abort the whole run.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHub(#[from] octocrab::Error),
}
