//! MCP tools and resources registered on the server and helper functions for the router.

pub mod info;
pub mod resources;

use rmcp::handler::server::router::tool::ToolRouter;

pub use info::{info_tool_result, GET_INFO_TOOL_ID};
pub use resources::{ResourceRegistry, StaticResource, APP_CONFIG_RESOURCE, APP_CONFIG_URI};

pub type ServerToolRouter<S> = ToolRouter<S>;

/// Helper for building a tool router.
pub fn build_router<S>(builder: impl FnOnce() -> ServerToolRouter<S>) -> ServerToolRouter<S>
where
    S: Send + Sync + 'static,
{
    builder()
}
