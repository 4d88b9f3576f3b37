use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::core::{LoadResult, ResourceSource, TranslationLookup};

use super::types::{
    ListTablesParams, LookupParams, LookupToolResult, SkippedFile, SourceParams, TableInfo,
    TablesResult,
};

#[derive(Clone)]
pub struct ResxLookupMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for ResxLookupMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ResxLookupMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Look up the translation of a key
    #[tool(
        description = "Look up the translation of a sentence in .resx resource tables. The first table (in file name order) containing the exact key wins."
    )]
    pub async fn lookup(
        &self,
        params: Parameters<LookupParams>,
    ) -> Result<CallToolResult, McpError> {
        let LookupParams { key, source } = params.0;
        let source = resolve_source(&source)?;
        let (lookup, _) = open(&source)?;

        let result = lookup.search(&key);
        let table = lookup.find(&key).map(|m| m.table.name().to_string());

        json_result(&LookupToolResult {
            message: result.message,
            error: result.error,
            table,
            language: source.language().map(|l| l.code().to_string()),
        })
    }

    /// List loaded resource tables
    #[tool(
        description = "List the resource tables that would be searched, in lookup priority order, with key counts and any files that could not be parsed."
    )]
    pub async fn list_tables(
        &self,
        params: Parameters<ListTablesParams>,
    ) -> Result<CallToolResult, McpError> {
        let source = resolve_source(&params.0.source)?;
        let (lookup, load) = open(&source)?;

        let tables = lookup
            .collection()
            .iter()
            .map(|t| TableInfo {
                name: t.name().to_string(),
                file_path: t.file_path().to_string(),
                key_count: t.len(),
            })
            .collect();

        json_result(&TablesResult {
            source: source.to_string(),
            tables,
            skipped: load.warnings.into_iter().map(SkippedFile::from).collect(),
        })
    }
}

#[tool_handler]
impl ServerHandler for ResxLookupMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "resx-lookup MCP looks up translations in .resx resource tables.\n\n\
                 Available tools:\n\
                 1. lookup - Translate one sentence (exact, case-sensitive key match)\n\
                 2. list_tables - Show which tables are loaded and in what priority\n\n\
                 Pass either `resourcesDir` (absolute path to a folder of .resx files)\n\
                 or `bundled` (one of ar, es, de, ur) with every call."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

fn resolve_source(params: &SourceParams) -> Result<ResourceSource, McpError> {
    match (&params.resources_dir, params.bundled) {
        (Some(dir), None) => Ok(ResourceSource::directory(dir)),
        (None, Some(language)) => Ok(ResourceSource::Bundled(language)),
        (Some(_), Some(_)) => Err(McpError::invalid_params(
            "Pass either resourcesDir or bundled, not both",
            None,
        )),
        (None, None) => Err(McpError::invalid_params(
            "One of resourcesDir or bundled is required",
            None,
        )),
    }
}

fn open(source: &ResourceSource) -> Result<(TranslationLookup, LoadResult), McpError> {
    source.open().map_err(|e| {
        McpError::internal_error(
            format!("Failed to load resource tables from {}: {}", source, e),
            None,
        )
    })
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = ResxLookupMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
