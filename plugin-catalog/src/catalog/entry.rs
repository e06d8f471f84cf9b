//! Catalog entry shape.

use serde::Serialize;

/// One plugin in the published catalog.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Repository full name in "owner/name" format.
    pub repo: String,

    /// Normalized display name.
    pub name: String,

    /// Normalized author.
    pub author: String,

    /// Last push timestamp, verbatim from repository metadata.
    pub last_updated: String,

    /// Stargazer count, verbatim from repository metadata.
    pub stars: u32,

    /// Minimum compatible game version, verbatim from plugin metadata.
    pub min_game_version: String,

    /// Whether the plugin is Java/JVM based.
    pub has_java: bool,

    /// Normalized description.
    pub description: String,
}
