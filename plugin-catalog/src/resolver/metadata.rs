//! Plugin metadata documents.

use serde::{Deserialize, Deserializer};

/// Version assumed when a plugin does not declare `minGameVersion`.
const DEFAULT_MIN_GAME_VERSION: &str = "104";

/// Parsed `plugin.json` / `plugin.hjson` contents.
///
/// Only the fields the catalog consumes are modeled; everything else in the
/// document is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginMetadata {
    /// Display name, possibly containing color markup.
    pub display_name: Option<String>,

    /// Author, possibly containing color markup.
    pub author: Option<String>,

    /// Short description.
    pub description: Option<String>,

    /// Minimum compatible game build, e.g. "105" or "105.2".
    #[serde(deserialize_with = "version_string")]
    pub min_game_version: Option<String>,

    /// Whether the plugin declares itself as Java/JVM based.
    pub java: bool,
}

impl PluginMetadata {
    /// Minimum compatible game version, with the historical default.
    #[must_use]
    pub fn min_game_version(&self) -> &str {
        self.min_game_version
            .as_deref()
            .unwrap_or(DEFAULT_MIN_GAME_VERSION)
    }
}

/// Accepts `minGameVersion` as either a string or a bare number.
fn version_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    }))
}

/// Parses a metadata document.
///
/// Tries strict JSON first, then falls back to HJSON for the relaxed syntax
/// many plugins use.
///
/// # Errors
///
/// Returns the HJSON parse error when the body is valid under neither
/// syntax.
pub fn parse_metadata(body: &str) -> Result<PluginMetadata, deser_hjson::Error> {
    match serde_json::from_str(body) {
        Ok(metadata) => Ok(metadata),
        Err(_) => deser_hjson::from_str(body),
    }
}
