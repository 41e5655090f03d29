use crate::format::render_stats;
use crate::index::SearchIndex;
use crate::store::IndexStore;
use rmcp::schemars;
use serde::Deserialize;
use std::path::Path;

/// Parameters for open_index tool
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct OpenIndexRequest {
    /// Path to a generated search index (e.g. "docs/build/search_index.js")
    pub path: String,
}

/// Load an index and make it current for the following tool calls.
pub async fn handle_open_index(
    store: &IndexStore,
    request: OpenIndexRequest,
) -> Result<String, String> {
    let (path, index) = store
        .open(&request.path)
        .await
        .map_err(|e| format!("Failed to open search index: {:#}", e))?;

    Ok(format_response(&path, &index))
}

/// Format a user-friendly response showing what was loaded.
pub fn format_response(path: &Path, index: &SearchIndex) -> String {
    let mut response = format!("Search index opened: {}\n\n", path.display());
    response.push_str(&render_stats(&index.stats()));

    let pages = index.pages();
    if !pages.is_empty() {
        response.push_str(&format!("\nPages ({}):\n", pages.len()));
        for page in pages.iter().take(20) {
            response.push_str(&format!("  - {}\n", page));
        }
        if pages.len() > 20 {
            response.push_str(&format!("  ... and {} more\n", pages.len() - 20));
        }
    }

    response
}
