//! Runner configuration.

use std::path::{Path, PathBuf};

/// Configuration for a catalog run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Optional GitHub token used to raise search rate limits.
    token: Option<String>,
    /// Where the catalog file is written.
    output_path: PathBuf,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(token: Option<String>, output_path: PathBuf) -> Self {
        Self { token, output_path }
    }

    /// Returns the GitHub token, if one was supplied.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the catalog output path.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}
