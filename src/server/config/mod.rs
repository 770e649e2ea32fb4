//! Load and validate server configuration.
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{error, info};

use crate::{
    cli::ConfigSource,
    lib::{errors::ConfigError, service::ServiceIdentity},
};

pub mod service;
pub mod socket;
pub mod telemetry;

pub use service::{parse_service_section, RawServiceSection};
pub use socket::{
    parse_socket_section, RawSocketSection, SocketDefaults, SocketSection, DEFAULT_HTTP_HOST,
    DEFAULT_HTTP_PORT, DEFAULT_MCP_HOST, DEFAULT_MCP_PORT, HTTP_SOCKET_DEFAULTS,
    MCP_SOCKET_DEFAULTS,
};

pub const CONFIG_ENV_KEY: &str = "MCP_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Top-level configuration container.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub service: ServiceIdentity,
    pub http: SocketSection,
    pub mcp: SocketSection,
    pub source_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawServerConfig {
    service: Option<RawServiceSection>,
    http: Option<RawSocketSection>,
    mcp: Option<RawSocketSection>,
}

impl ServerConfig {
    /// Built-in defaults, reported as if loaded from `source_path`.
    pub fn defaults(source_path: PathBuf) -> Self {
        Self {
            service: ServiceIdentity::default(),
            http: HTTP_SOCKET_DEFAULTS.section(),
            mcp: MCP_SOCKET_DEFAULTS.section(),
            source_path,
        }
    }

    /// Load the file a launch profile resolved. Paths named on the command
    /// line or through `MCP_CONFIG_PATH` must exist; the implicit
    /// `config.toml` may be absent.
    pub fn load_for_source(path: PathBuf, source: ConfigSource) -> Result<Self, ConfigError> {
        telemetry::log_config_source(&path, source);
        if source.is_explicit() {
            Self::load_from_path(path)
        } else {
            Self::load_or_default(path)
        }
    }

    /// Load `path` if it exists; otherwise return the built-in defaults.
    pub fn load_or_default(path: PathBuf) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::load_from_path(path);
        }
        telemetry::log_defaults(&path);
        let config = Self::defaults(path);
        telemetry::log_loaded(&config);
        Ok(config)
    }

    /// Load configuration from a specific path. The file must exist.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "mcp_api_boilerplate::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "mcp_api_boilerplate::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawServerConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "mcp_api_boilerplate::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "mcp_api_boilerplate::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawServerConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let service = parse_service_section(raw.service, &path)?;
        let http = parse_socket_section(raw.http, HTTP_SOCKET_DEFAULTS, &path)?;
        let mcp = parse_socket_section(raw.mcp, MCP_SOCKET_DEFAULTS, &path)?;

        Ok(Self {
            service,
            http,
            mcp,
            source_path: path,
        })
    }
}
