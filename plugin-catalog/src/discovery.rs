//! Candidate discovery via GitHub repository search.
//!
//! Aggregates a paginated keyword search with a topic search, deduplicates
//! by repository full name and drops template repositories and blacklisted
//! entries before anything else runs.

mod error;
mod record;

pub use error::DiscoveryError;
pub use record::{CandidateSet, RepositoryOwner, RepositoryRecord};

use crate::rate_limit::log_search_rate_limit;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Keyword for the main repository search.
pub const SEARCH_TERM: &str = "mindustry plugin";

/// Topic tag for the secondary search.
pub const SEARCH_TOPIC: &str = "mindustry-plugin";

/// Results per search page (GitHub maximum).
pub const RESULTS_PER_PAGE: u32 = 100;

/// Repositories that match the searches but never belong in the catalog.
const BLACKLIST: [&str; 2] = ["Anuken/ExamplePlugin", "MindustryInside/MindustryPlugins"];

#[derive(Debug, Serialize)]
struct SearchParams<'a> {
    q: &'a str,
    per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    total_count: u64,
    #[serde(default)]
    items: Vec<RepositoryRecord>,
}

/// Aggregates keyword and topic searches into one candidate set.
///
/// The keyword search is paginated using the first response's `total_count`;
/// topic search items are appended only when no keyword result already
/// carries the same full name.
///
/// # Errors
///
/// Returns [`DiscoveryError`] if any search request fails. A failure here
/// aborts the whole run; this stage has no partial-result tolerance.
pub async fn aggregate_candidates(octocrab: &Octocrab) -> Result<CandidateSet, DiscoveryError> {
    let first = search_repositories(octocrab, SEARCH_TERM, None).await?;
    let pages = total_pages(first.total_count, RESULTS_PER_PAGE);
    let mut items = first.items;

    for page in 2..=pages {
        let response = search_repositories(octocrab, SEARCH_TERM, Some(page)).await?;
        items.extend(response.items);
    }

    let topic_query = format!("topic:{SEARCH_TOPIC}");
    let topic = search_repositories(octocrab, &topic_query, None).await?;
    merge_topic_items(&mut items, topic.items);

    Ok(build_candidate_set(items))
}

/// Issues one repository search request and logs the remaining quota.
async fn search_repositories(
    octocrab: &Octocrab,
    query: &str,
    page: Option<u32>,
) -> Result<SearchResponse, DiscoveryError> {
    debug!(query, page, "Sending repository search request");
    let response: SearchResponse = octocrab
        .get(
            "/search/repositories",
            Some(&SearchParams {
                q: query,
                per_page: RESULTS_PER_PAGE,
                page,
            }),
        )
        .await?;
    log_search_rate_limit(octocrab).await;
    Ok(response)
}

/// Number of pages needed to cover `total` results.
fn total_pages(total: u64, per_page: u32) -> u32 {
    total.div_ceil(u64::from(per_page)) as u32
}

/// Appends topic search results not already present, comparing by full name.
///
/// The linear containment scan is deliberate; it is the published catalog's
/// merge rule, not an implementation detail.
fn merge_topic_items(items: &mut Vec<RepositoryRecord>, topic_items: Vec<RepositoryRecord>) {
    for item in topic_items {
        if !items
            .iter()
            .any(|existing| existing.full_name == item.full_name)
        {
            items.push(item);
        }
    }
}

/// Drops template repositories, keys the rest by full name and removes
/// blacklisted entries regardless of which search produced them.
fn build_candidate_set(items: Vec<RepositoryRecord>) -> CandidateSet {
    let mut candidates: CandidateSet = items
        .into_iter()
        .filter(|item| !item.is_template)
        .map(|item| (item.full_name.clone(), item))
        .collect();

    for name in BLACKLIST {
        candidates.remove(name);
    }

    info!(count = candidates.len(), "Total plugins found");
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(full_name: &str) -> RepositoryRecord {
        RepositoryRecord {
            full_name: full_name.to_string(),
            name: full_name
                .split('/')
                .next_back()
                .unwrap_or_default()
                .to_string(),
            default_branch: "master".to_string(),
            language: None,
            stargazers_count: 0,
            pushed_at: None,
            is_template: false,
            owner: RepositoryOwner::default(),
        }
    }

    #[test]
    fn computes_page_count_from_total() {
        assert_eq!(total_pages(0, 100), 0);
        assert_eq!(total_pages(1, 100), 1);
        assert_eq!(total_pages(100, 100), 1);
        assert_eq!(total_pages(101, 100), 2);
        assert_eq!(total_pages(250, 100), 3);
    }

    #[test]
    fn topic_items_merge_without_duplicates() {
        let mut items = vec![record("a/one"), record("b/two")];
        merge_topic_items(
            &mut items,
            vec![record("b/two"), record("c/three"), record("a/one")],
        );

        let names: Vec<&str> = items.iter().map(|i| i.full_name.as_str()).collect();
        assert_eq!(names, ["a/one", "b/two", "c/three"]);
    }

    #[test]
    fn candidate_set_keys_are_unique() {
        let set = build_candidate_set(vec![record("a/one"), record("a/one"), record("b/two")]);
        assert_eq!(set.len(), 2);
        assert!(set.contains_key("a/one"));
        assert!(set.contains_key("b/two"));
    }

    #[test]
    fn template_repositories_are_dropped() {
        let mut template = record("t/template");
        template.is_template = true;

        let set = build_candidate_set(vec![record("a/one"), template]);
        assert_eq!(set.len(), 1);
        assert!(!set.contains_key("t/template"));
    }

    #[test]
    fn blacklisted_repositories_are_removed() {
        let set = build_candidate_set(vec![
            record("Anuken/ExamplePlugin"),
            record("MindustryInside/MindustryPlugins"),
            record("a/one"),
        ]);

        assert_eq!(set.len(), 1);
        assert!(set.contains_key("a/one"));
    }
}
