//! Catalog building: version gating, sorting, normalization and output.

mod entry;
mod error;

pub use entry::CatalogEntry;
pub use error::CatalogError;

use crate::batch::ResultMap;
use crate::discovery::{CandidateSet, RepositoryRecord};
use crate::resolver::PluginMetadata;
use crate::text::strip_color_markup;
use std::path::Path;
use tracing::info;

/// Maximum display-name length before truncation.
pub const MAX_NAME_LENGTH: usize = 55;

/// Minimum compatible game build accepted into the catalog.
const MIN_COMPATIBLE_BUILD: i64 = 105;

/// JVM-hosted languages that imply Java compatibility.
/// Obviously not a comprehensive list.
const JVM_LANGUAGES: [&str; 3] = ["Java", "Kotlin", "Groovy"];

/// Description used when a plugin provides none.
const DEFAULT_DESCRIPTION: &str = "No description provided.";

/// Builds the sorted, filtered, normalized catalog.
///
/// Plugins below the minimum compatible build are excluded entirely.
/// Survivors are sorted by descending star count, ties broken by ascending
/// push timestamp (ISO-8601 strings compare correctly lexicographically).
#[must_use]
pub fn build_catalog(candidates: &CandidateSet, resolved: &ResultMap) -> Vec<CatalogEntry> {
    let mut names: Vec<&String> = resolved
        .iter()
        .filter(|(_, metadata)| {
            compatible_build(metadata.min_game_version()) >= MIN_COMPATIBLE_BUILD
        })
        .map(|(name, _)| name)
        .collect();

    names.sort_by(|a, b| {
        stars_of(candidates, b)
            .cmp(&stars_of(candidates, a))
            .then_with(|| pushed_at_of(candidates, a).cmp(pushed_at_of(candidates, b)))
    });

    names
        .into_iter()
        .filter_map(|name| {
            let record = candidates.get(name)?;
            let metadata = resolved.get(name)?;
            Some(catalog_entry(name, record, metadata))
        })
        .collect()
}

/// Serializes the catalog and writes it to `path`, replacing any previous
/// file contents.
///
/// # Errors
///
/// Returns [`CatalogError`] when serialization or the write fails.
pub fn write_catalog(entries: &[CatalogEntry], path: &Path) -> Result<(), CatalogError> {
    let body = serde_json::to_string_pretty(entries)?;
    std::fs::write(path, body).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;

    info!(path = %path.display(), count = entries.len(), "Catalog written");
    Ok(())
}

/// Leading build number of a version string; "105.2" gates on 105.
/// Unparseable versions count as build 0 and fall below the gate.
fn compatible_build(version: &str) -> i64 {
    let leading = version.split('.').next().unwrap_or(version);
    leading.parse().unwrap_or(0)
}

fn stars_of(candidates: &CandidateSet, name: &str) -> u32 {
    candidates
        .get(name)
        .map(|record| record.stargazers_count)
        .unwrap_or(0)
}

fn pushed_at_of<'a>(candidates: &'a CandidateSet, name: &str) -> &'a str {
    candidates
        .get(name)
        .and_then(|record| record.pushed_at.as_deref())
        .unwrap_or("")
}

/// Builds one catalog entry from a record/metadata pair.
fn catalog_entry(
    full_name: &str,
    record: &RepositoryRecord,
    metadata: &PluginMetadata,
) -> CatalogEntry {
    CatalogEntry {
        repo: full_name.to_string(),
        name: display_name(full_name, record, metadata),
        author: strip_color_markup(metadata.author.as_deref().unwrap_or(&record.owner.login)),
        last_updated: record.pushed_at.clone().unwrap_or_default(),
        stars: record.stargazers_count,
        min_game_version: metadata.min_game_version().to_string(),
        has_java: metadata.java || is_jvm_language(record.language.as_deref()),
        description: description(metadata),
    }
}

/// Normalizes the display name.
///
/// Falls back to the repository's short name when the cleaned metadata name
/// is empty. Over-long names are truncated to the RAW repository full name's
/// prefix plus an ellipsis, not the cleaned display name's. The published
/// catalog has always behaved this way, so the asymmetry stays.
fn display_name(full_name: &str, record: &RepositoryRecord, metadata: &PluginMetadata) -> String {
    let mut display =
        strip_color_markup(metadata.display_name.as_deref().unwrap_or("")).replace("\\n", "");
    if display.is_empty() {
        display = record.name.clone();
    }

    let cleaned = strip_color_markup(&display).replace('\n', "");
    if cleaned.chars().count() > MAX_NAME_LENGTH {
        let prefix: String = full_name.chars().take(MAX_NAME_LENGTH).collect();
        return format!("{prefix}...");
    }

    cleaned
}

fn description(metadata: &PluginMetadata) -> String {
    let cleaned = strip_color_markup(metadata.description.as_deref().unwrap_or(""));
    if cleaned.is_empty() {
        DEFAULT_DESCRIPTION.to_string()
    } else {
        cleaned
    }
}

fn is_jvm_language(language: Option<&str>) -> bool {
    language.is_some_and(|lang| JVM_LANGUAGES.contains(&lang))
}
