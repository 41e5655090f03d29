use crate::format::render_report;
use crate::store::IndexStore;
use crate::validate::validate;
use rmcp::schemars;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ValidateIndexRequest {
    /// Index to validate; defaults to the currently opened index
    #[serde(default)]
    pub path: Option<String>,
}

/// Validate an index and report every issue found.
pub async fn handle_validate_index(
    store: &IndexStore,
    request: ValidateIndexRequest,
) -> Result<String, String> {
    let index = match request.path {
        Some(path) => {
            let expanded = crate::store::expand_tilde(&path);
            store.get(Path::new(expanded.as_ref())).await
        }
        None => store.current().await,
    }
    .map_err(|e| format!("Failed to load search index: {:#}", e))?;

    Ok(render_report(&validate(&index)))
}
