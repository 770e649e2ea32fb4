use std::path::Path;

use tracing::{debug, info};

use crate::cli::ConfigSource;

use super::{ServerConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_config_source(path: &Path, source: ConfigSource) {
    match source {
        ConfigSource::Cli => info!(
            target: "mcp_api_boilerplate::config",
            path = %path.display(),
            "Loading configuration from --config"
        ),
        ConfigSource::Env => info!(
            target: "mcp_api_boilerplate::config",
            path = %path.display(),
            "Loading configuration using MCP_CONFIG_PATH environment variable"
        ),
        ConfigSource::Default => debug!(
            target: "mcp_api_boilerplate::config",
            path = %path.display(),
            env = CONFIG_ENV_KEY,
            default = DEFAULT_CONFIG_PATH,
            "MCP_CONFIG_PATH not set; using default config.toml"
        ),
    }
}

pub fn log_defaults(path: &Path) {
    info!(
        target: "mcp_api_boilerplate::config",
        path = %path.display(),
        "Configuration file not found; using built-in defaults"
    );
}

pub fn log_loaded(config: &ServerConfig) {
    info!(
        target: "mcp_api_boilerplate::config",
        path = %config.source_path.display(),
        service_name = config.service.name(),
        service_version = config.service.version(),
        http_addr = %config.http.bind_addr(),
        mcp_addr = %config.mcp.bind_addr(),
        "Configuration loaded successfully"
    );
}
