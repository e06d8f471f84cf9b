//! Per-candidate processing results.

/// Result of processing a single candidate repository.
#[derive(Debug, Clone)]
pub enum ProcessingResult {
    /// A metadata document was located and parsed.
    Resolved {
        /// Repository full name.
        repository: String,
    },

    /// No metadata document exists; the candidate is not a plugin.
    NoMetadata {
        /// Repository full name.
        repository: String,
    },

    /// Resolution failed and the candidate was skipped.
    Failed {
        /// Repository full name.
        repository: String,
        /// Error message.
        error: String,
    },
}
