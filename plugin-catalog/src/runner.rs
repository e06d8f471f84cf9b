//! Orchestrates discovery, resolution and catalog generation.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::batch::process_candidates;
use crate::catalog::{build_catalog, write_catalog};
use crate::discovery::aggregate_candidates;
use crate::resolver::MetadataResolver;
use crate::summary::RunSummary;
use http::header::ACCEPT;
use octocrab::Octocrab;
use std::time::Duration;
use tracing::{info, warn};

/// Accept header requesting the template-repository preview behavior, which
/// exposes the `is_template` field on search results.
const PREVIEW_ACCEPT: &str = "application/vnd.github.baptiste-preview+json";

/// Per-request timeout for GitHub API calls; expiry counts as a normal
/// request failure, the same as for raw-content fetches.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Orchestrates a full catalog generation run.
pub struct Runner {
    config: RunnerConfig,
    octocrab: Octocrab,
    resolver: MetadataResolver,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// A missing token is tolerated: the run proceeds under unauthenticated
    /// rate limits and merely logs the fact.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if either HTTP client cannot be constructed.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let mut builder = Octocrab::builder()
            .add_header(ACCEPT, PREVIEW_ACCEPT.to_string())
            .set_connect_timeout(Some(REQUEST_TIMEOUT))
            .set_read_timeout(Some(REQUEST_TIMEOUT));
        match config.token() {
            Some(token) => builder = builder.personal_token(token.to_string()),
            None => warn!("No GitHub token supplied, unauthenticated rate limits apply"),
        }
        let octocrab = builder.build()?;
        let resolver = MetadataResolver::new(octocrab.clone())?;

        Ok(Self {
            config,
            octocrab,
            resolver,
        })
    }

    /// Executes the full pipeline: aggregate, resolve, build, write.
    ///
    /// Aggregation errors abort the run before anything is written, leaving
    /// any previous catalog file untouched. Per-candidate failures are
    /// absorbed by the batch stage and show up in the summary instead.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] on aggregation or output failures.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new();

        let candidates = aggregate_candidates(&self.octocrab).await?;
        summary.candidates_discovered = candidates.len();

        let (resolved, results) = process_candidates(&self.resolver, &candidates).await;
        for result in &results {
            summary.record_result(result);
        }
        info!(count = resolved.len(), "Found valid plugins");

        let entries = build_catalog(&candidates, &resolved);
        summary.catalog_entries = entries.len();
        write_catalog(&entries, self.config.output_path())?;

        Ok(summary)
    }
}
