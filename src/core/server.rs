//! The rmcp server handler.
//!
//! [`McpServer`] owns the resource service, the tool registry and the rmcp
//! tool router, all sharing one [`FootballClient`]. It is cloned into every
//! TCP session and HTTP request.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::tool::ToolRouter,
    model::{
        Implementation, ListResourcesResult, PaginatedRequestParam, ReadResourceRequestParam,
        ReadResourceResult, ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    tool_handler,
};
use tracing::{debug, instrument};

use super::config::Config;
use crate::domains::football::FootballClient;
use crate::domains::resources::{ResourceError, ResourceService};
use crate::domains::tools::{ToolRegistry, build_tool_router};

/// Instructions sent to clients on initialization.
pub const INSTRUCTIONS: &str = "Soccer statistics server backed by API-Football. \
    Use get-teams to find team ids, get-fixtures to search matches, get-goal-stats \
    for a team's goal statistics, and get-predictions / get-odds for a fixture. \
    Supported leagues are listed in the football://leagues resource.";

#[derive(Clone)]
pub struct McpServer {
    config: Arc<Config>,
    resources: Arc<ResourceService>,
    tools: Arc<ToolRegistry>,
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Build the server and its football client.
    ///
    /// Fails only if the HTTP client cannot be constructed.
    pub fn new(config: Config) -> super::Result<Self> {
        let config = Arc::new(config);
        let client = Arc::new(FootballClient::new(config.football.clone())?);

        Ok(Self {
            resources: Arc::new(ResourceService::new(config.clone())),
            tools: Arc::new(ToolRegistry::new(client.clone())),
            tool_router: build_tool_router::<Self>(client),
            config,
        })
    }

    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Tool metadata as served by `tools/list`.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Name-based tool dispatch for transports without an rmcp session.
    pub fn registry(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn resources(&self) -> &ResourceService {
        &self.resources
    }
}

fn resource_error(err: ResourceError) -> McpError {
    match err {
        ResourceError::NotFound(uri) => {
            McpError::resource_not_found(format!("Resource not found: {}", uri), None)
        }
        ResourceError::Internal(msg) => McpError::internal_error(msg, None),
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip_all)]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        let resources = self.resources.list();
        debug!("Listing {} resources", resources.len());
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip_all, fields(uri = %request.uri))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.resources.read(&request.uri).map_err(resource_error)
    }
}
