//! Repository records returned by GitHub search.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Candidate repositories keyed by full name ("owner/name").
///
/// Keys are unique by construction and iteration order is deterministic,
/// so the batch stage always visits candidates in the same order.
pub type CandidateSet = BTreeMap<String, RepositoryRecord>;

/// A repository returned by GitHub repository search.
///
/// Only the fields the pipeline consumes are modeled; unknown response
/// fields are ignored during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryRecord {
    /// Full repository name in "owner/name" format.
    pub full_name: String,

    /// Repository name without the owner.
    pub name: String,

    /// Default branch name (e.g., "master").
    #[serde(default)]
    pub default_branch: String,

    /// Primary language reported by GitHub, if any.
    #[serde(default)]
    pub language: Option<String>,

    /// Stargazer count at search time.
    #[serde(default)]
    pub stargazers_count: u32,

    /// Last push timestamp, ISO-8601.
    #[serde(default)]
    pub pushed_at: Option<String>,

    /// Whether this is a template repository.
    #[serde(default)]
    pub is_template: bool,

    /// Repository owner.
    #[serde(default)]
    pub owner: RepositoryOwner,
}

/// Owner block of a search result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepositoryOwner {
    /// Owner login name.
    #[serde(default)]
    pub login: String,
}
