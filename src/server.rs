//! MCP server exposing a documentation search index as tools.

use crate::store::IndexStore;
use crate::tools::{
    InspectEntryRequest, ListEntriesRequest, OpenIndexRequest, ValidateIndexRequest,
    handle_inspect_entry, handle_list_entries, handle_open_index, handle_validate_index,
};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars::{self, JsonSchema, generate::SchemaSettings},
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP Server for documentation search index queries
#[derive(Clone)]
pub struct IndexServer {
    /// Shared index cache and current-index selection
    store: Arc<IndexStore>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for IndexServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexServer")
            .field("store", &self.store)
            .finish()
    }
}

impl Default for IndexServer {
    fn default() -> Self {
        Self::new(Arc::new(IndexStore::new()))
    }
}

#[tool_router]
impl IndexServer {
    pub fn new(store: Arc<IndexStore>) -> Self {
        Self {
            store,
            tool_router: Self::tool_router(),
        }
    }

    pub fn store(&self) -> &Arc<IndexStore> {
        &self.store
    }

    #[tool(
        description = "Open a generated documentation search index (search_index.js or its JSON form) and make it current. Returns entry counts per category and the list of pages."
    )]
    async fn open_index(
        &self,
        Parameters(request): Parameters<OpenIndexRequest>,
    ) -> std::result::Result<String, String> {
        handle_open_index(&self.store, request).await
    }

    #[tool(
        description = "List entries of the current search index in site navigation order, optionally filtered by category and page.",
        input_schema = inline_schema_for_type::<ListEntriesRequest>()
    )]
    async fn list_entries(
        &self,
        Parameters(request): Parameters<ListEntriesRequest>,
    ) -> std::result::Result<String, String> {
        handle_list_entries(&self.store, request).await
    }

    #[tool(
        description = "Look up documentation entries by title (e.g. 'AxisSets.validate' or just 'validate'). Returns ranked matches with their rendered documentation text, or similar titles when nothing matches.",
        input_schema = inline_schema_for_type::<InspectEntryRequest>()
    )]
    async fn inspect_entry(
        &self,
        Parameters(request): Parameters<InspectEntryRequest>,
    ) -> std::result::Result<String, String> {
        handle_inspect_entry(&self.store, request).await
    }

    #[tool(
        description = "Validate a search index: required fields, page-root locations, method signatures in anchors and anchor/title agreement. Defaults to the current index."
    )]
    async fn validate_index(
        &self,
        Parameters(request): Parameters<ValidateIndexRequest>,
    ) -> std::result::Result<String, String> {
        handle_validate_index(&self.store, request).await
    }
}

#[tool_handler]
impl ServerHandler for IndexServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.protocol_version = ProtocolVersion::V_2024_11_05;
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info = Implementation::from_build_env();
        info.instructions = Some(
            "docindex: browse and validate generated documentation search indices. \
             Start with open_index, then use list_entries and inspect_entry."
                .to_string(),
        );
        info
    }
}

/// Generate an inline JSON schema for MCP tools
///
/// Unlike rmcp's default `schema_for_type()`, this function sets `inline_subschemas = true`
/// to generate inline enum definitions instead of $ref patterns. This ensures MCP Inspector
/// displays enums as dropdown widgets rather than raw JSON input fields.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];
    settings.inline_subschemas = true;

    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();
    let object = serde_json::to_value(schema).expect("failed to serialize schema");

    let json_object = match object {
        serde_json::Value::Object(object) => object,
        _ => panic!("Schema serialization produced non-object value"),
    };

    Arc::new(json_object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn server_info_advertises_tools() {
        let info = IndexServer::default().get_info();
        check!(info.capabilities.tools.is_some());
        check!(info.instructions.is_some_and(|text| text.contains("open_index")));
    }

    #[test]
    fn detail_level_schema_is_inlined() {
        let schema = inline_schema_for_type::<InspectEntryRequest>();
        let rendered = serde_json::to_string(&*schema).unwrap();
        check!(rendered.contains("\"high\""));
        check!(!rendered.contains("$ref"));
    }
}
