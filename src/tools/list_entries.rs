use crate::entry::Category;
use crate::format::{DetailLevel, render_entries};
use crate::query::EntryFilter;
use crate::store::IndexStore;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListEntriesRequest {
    /// Only list entries of this category (page, section, constant, type, method, ...)
    #[serde(default)]
    pub category: Option<Category>,
    /// Only list entries on this page (display name, e.g. "Home")
    #[serde(default)]
    pub page: Option<String>,
    /// Maximum number of entries to return (default: 50)
    #[serde(default = "default_limit")]
    pub limit: Option<usize>,
    /// Detail level: low (title only), medium (+summary), high (+full text)
    #[serde(default = "default_detail_level")]
    pub detail_level: DetailLevel,
}

fn default_limit() -> Option<usize> {
    Some(50)
}

const fn default_detail_level() -> DetailLevel {
    DetailLevel::Low
}

/// List entries of the current index in navigation order.
pub async fn handle_list_entries(
    store: &IndexStore,
    request: ListEntriesRequest,
) -> Result<String, String> {
    let index = store.current().await.map_err(|e| format!("{:#}", e))?;

    let mut filter = EntryFilter::new();
    if let Some(category) = request.category {
        filter = filter.category(category);
    }
    if let Some(page) = request.page {
        filter = filter.page(page);
    }

    let matches = filter.apply(&index);
    if matches.is_empty() {
        let mut msg = "No entries match the given filters.\n\n".to_string();
        msg.push_str(&format!("Pages: {}\n", index.pages().join(", ")));
        return Ok(msg);
    }

    let limit = request.limit.unwrap_or(50).max(1);
    let mut output = format!("{} matching entries", matches.len());
    if matches.len() > limit {
        output.push_str(&format!(" (showing first {})", limit));
    }
    output.push_str(":\n\n");
    output.push_str(&render_entries(
        matches.iter().copied().take(limit),
        request.detail_level,
    ));

    Ok(output)
}
