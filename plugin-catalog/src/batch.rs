//! Sequential candidate processing with per-repository failure isolation.
//!
//! Candidates are resolved strictly one at a time: the search API is rate
//! limited hard enough that concurrent requests buy nothing but bans.

use crate::discovery::CandidateSet;
use crate::resolver::{MetadataResolver, PluginMetadata, ResolveError};
use crate::summary::ProcessingResult;
use std::collections::BTreeMap;
use std::future::Future;
use tracing::{info, warn};

/// Successfully resolved metadata keyed by repository full name.
///
/// Every key also exists in the candidate set the map was built from.
pub type ResultMap = BTreeMap<String, PluginMetadata>;

/// Resolves every candidate in candidate-set order, one repository at a time.
///
/// A failing candidate is logged and skipped; no single bad repository can
/// abort the batch.
pub async fn process_candidates(
    resolver: &MetadataResolver,
    candidates: &CandidateSet,
) -> (ResultMap, Vec<ProcessingResult>) {
    process_with(candidates, |repo, branch| resolver.resolve(repo, branch)).await
}

/// Inner processing loop, generic over the resolve function.
async fn process_with<'a, F, Fut>(
    candidates: &'a CandidateSet,
    mut resolve: F,
) -> (ResultMap, Vec<ProcessingResult>)
where
    F: FnMut(&'a str, &'a str) -> Fut,
    Fut: Future<Output = Result<Option<PluginMetadata>, ResolveError>>,
{
    let total = candidates.len();
    let mut resolved = ResultMap::new();
    let mut results = Vec::with_capacity(total);

    for (index, (name, record)) in candidates.iter().enumerate() {
        info!(
            progress = percent(index, total),
            repo = %name,
            "Querying candidate"
        );

        match resolve(name, &record.default_branch).await {
            Ok(Some(metadata)) => {
                info!(repo = %name, "Found plugin meta file");
                resolved.insert(name.clone(), metadata);
                results.push(ProcessingResult::Resolved {
                    repository: name.clone(),
                });
            }
            Ok(None) => {
                info!(repo = %name, "Skipping, no meta found");
                results.push(ProcessingResult::NoMetadata {
                    repository: name.clone(),
                });
            }
            Err(error) => {
                warn!(repo = %name, error = %error, "Skipping candidate");
                results.push(ProcessingResult::Failed {
                    repository: name.clone(),
                    error: error.to_string(),
                });
            }
        }
    }

    (resolved, results)
}

/// Share of processed candidates, as a whole percentage.
fn percent(index: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (index as f64 / total as f64 * 100.0) as u32
}
