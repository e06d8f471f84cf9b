//! Search quota bookkeeping.
//!
//! GitHub's search endpoints are aggressively rate limited, which is why the
//! whole pipeline issues requests one at a time. This module only observes
//! the remaining quota; it never waits and never retries.

use octocrab::Octocrab;
use tracing::{debug, info};

/// Rate limit state for the search resource.
#[derive(Debug, Clone)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window.
    pub remaining: u32,

    /// Total requests allowed per window.
    pub limit: u32,

    /// Unix timestamp when the window resets.
    pub reset: u64,
}

/// Queries the current search rate limit status.
///
/// # Errors
///
/// Returns an error if the rate limit API call fails.
pub async fn check_search_rate_limit(octocrab: &Octocrab) -> Result<RateLimitInfo, octocrab::Error> {
    let rate_limit = octocrab.ratelimit().get().await?;
    let search = &rate_limit.resources.search;

    Ok(RateLimitInfo {
        remaining: search.remaining as u32,
        limit: search.limit as u32,
        reset: search.reset,
    })
}

/// Logs the remaining search quota, once per search request.
///
/// The rate limit endpoint is unmetered and a failed lookup only costs the
/// log line, so lookup errors are downgraded to debug noise.
pub async fn log_search_rate_limit(octocrab: &Octocrab) {
    match check_search_rate_limit(octocrab).await {
        Ok(info) => info!(
            remaining = info.remaining,
            limit = info.limit,
            "Search queries remaining"
        ),
        Err(e) => debug!(error = %e, "Could not read search rate limit"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_info_fields() {
        let info = RateLimitInfo {
            remaining: 10,
            limit: 30,
            reset: 1234567890,
        };

        assert_eq!(info.remaining, 10);
        assert_eq!(info.limit, 30);
        assert_eq!(info.reset, 1234567890);
    }
}
