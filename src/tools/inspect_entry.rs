use crate::entry::Category;
use crate::format::{DetailLevel, render_matches};
use crate::query::{find, suggest};
use crate::store::IndexStore;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct InspectEntryRequest {
    /// Entry title to look up (e.g. "AxisSets.validate", "validate", "Dataset")
    pub query: String,
    /// Optional filter by category
    #[serde(default)]
    pub category: Option<Category>,
    /// Detail level: low (title only), medium (+summary), high (+full text)
    #[serde(default = "default_detail_level")]
    pub detail_level: DetailLevel,
    /// Maximum number of entries to return (default: 5)
    #[serde(default)]
    pub limit: Option<usize>,
}

const fn default_detail_level() -> DetailLevel {
    DetailLevel::High
}

/// Look up entries of the current index by title.
/// Falls back to similar-title suggestions when nothing matches.
pub async fn handle_inspect_entry(
    store: &IndexStore,
    request: InspectEntryRequest,
) -> Result<String, String> {
    let index = store.current().await.map_err(|e| format!("{:#}", e))?;
    // A zero limit would hide real matches behind the suggestion path.
    let limit = request.limit.unwrap_or(5).max(1);

    let mut matches = find(&index, &request.query, index.len());
    if let Some(category) = request.category {
        matches.retain(|m| m.entry.category == category);
    }
    matches.truncate(limit);

    if matches.is_empty() {
        let suggestions = suggest(&index, &request.query, 5);
        if suggestions.is_empty() {
            return Ok(format!(
                "No entries found for '{}'.\n\nTry a shorter title, or list_entries to browse.\n",
                request.query
            ));
        }

        let mut result = format!(
            "No entries found for '{}'. Did you mean one of these?\n\n",
            request.query
        );
        for (title, _) in suggestions {
            result.push_str(&format!("• `{}`\n", title));
        }
        return Ok(result);
    }

    Ok(render_matches(&matches, &request.query, request.detail_level))
}
