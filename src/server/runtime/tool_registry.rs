use std::sync::Arc;

use rmcp::{
    handler::server::ServerHandler,
    model::{
        CallToolResult, ErrorData, Implementation, ListResourcesResult, PaginatedRequestParam,
        ReadResourceRequestParam, ReadResourceResult, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, RoleServer,
};

use crate::{
    lib::service::ServiceIdentity,
    tools::{self, ResourceRegistry, ServerToolRouter},
};

#[derive(Clone)]
pub struct McpApiServer {
    identity: Arc<ServiceIdentity>,
    instructions: Arc<String>,
    tool_router: ServerToolRouter<Self>,
    resources: Arc<ResourceRegistry>,
}

impl McpApiServer {
    pub fn new(identity: ServiceIdentity, instructions: String) -> Self {
        let router = tools::build_router(Self::tool_router);
        Self {
            identity: Arc::new(identity),
            instructions: Arc::new(instructions),
            tool_router: router,
            resources: Arc::new(ResourceRegistry::with_defaults()),
        }
    }
}

#[tool_router(router = tool_router)]
impl McpApiServer {
    #[tool(
        name = "get_info",
        description = "Return basic info about this MCP server"
    )]
    async fn get_info_tool(&self) -> Result<CallToolResult, ErrorData> {
        Ok(tools::info_tool_result(&self.identity))
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for McpApiServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.identity.name().to_string(),
                version: self.identity.version().to_string(),
                ..Implementation::default()
            },
            instructions: Some((*self.instructions).clone()),
            ..ServerInfo::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult::with_all_items(self.resources.list()))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        tracing::debug!(
            target: "mcp_api_boilerplate::runtime",
            uri = %request.uri,
            "Reading resource"
        );
        self.resources.read(&request.uri, &self.identity)
    }
}
