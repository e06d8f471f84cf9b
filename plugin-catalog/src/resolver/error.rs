//! Metadata resolution error types.

use thiserror::Error;

/// Errors that can occur while resolving a candidate's metadata.
///
/// These are caught at the batch level; a failing candidate is skipped and
/// never aborts the run.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The located document is valid under neither JSON nor HJSON.
    #[error("Malformed metadata document: {0}")]
    Parse(#[from] deser_hjson::Error),
}
