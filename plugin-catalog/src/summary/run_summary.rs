//! Run summary types.

use super::result::ProcessingResult;

/// Summary of a complete catalog run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of candidate repositories discovered by search.
    pub candidates_discovered: usize,

    /// Number of candidates with a valid metadata document.
    pub plugins_resolved: usize,

    /// Number of candidates without any metadata document.
    pub skipped_no_metadata: usize,

    /// Number of candidates skipped due to errors.
    pub failed: usize,

    /// Number of entries written to the catalog.
    pub catalog_entries: usize,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the summary with a processing result.
    pub fn record_result(&mut self, result: &ProcessingResult) {
        match result {
            ProcessingResult::Resolved { .. } => self.plugins_resolved += 1,
            ProcessingResult::NoMetadata { .. } => self.skipped_no_metadata += 1,
            ProcessingResult::Failed { .. } => self.failed += 1,
        }
    }

    /// Returns true if any candidate failed with an error.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_record_results() {
        let mut summary = RunSummary::new();

        summary.record_result(&ProcessingResult::Resolved {
            repository: "a/one".to_string(),
        });
        summary.record_result(&ProcessingResult::NoMetadata {
            repository: "b/two".to_string(),
        });
        summary.record_result(&ProcessingResult::Failed {
            repository: "c/three".to_string(),
            error: "timed out".to_string(),
        });

        assert_eq!(summary.plugins_resolved, 1);
        assert_eq!(summary.skipped_no_metadata, 1);
        assert_eq!(summary.failed, 1);
        assert!(summary.has_failures());
    }
}
