use crate::{
    cli::{LaunchProfile, TransportMode},
    server::config::ServerConfig,
    tools::{APP_CONFIG_URI, GET_INFO_TOOL_ID},
};

/// Build the `ServerInfo.instructions` string shown to MCP clients.
pub fn build_instructions(profile: &LaunchProfile, config: &ServerConfig) -> String {
    let endpoint = match profile.transport {
        TransportMode::Stdio => String::from("stdio"),
        TransportMode::Tcp => config.mcp.bind_addr(),
    };
    format!(
        "{name} v{version} loaded config {path}; serving over {transport} ({endpoint}). \
         Call the `{tool}` tool for server info or read `{resource}` for the app config.",
        name = config.service.name(),
        version = config.service.version(),
        path = config.source_path.display(),
        transport = profile.transport.as_str(),
        tool = GET_INFO_TOOL_ID,
        resource = APP_CONFIG_URI,
    )
}
