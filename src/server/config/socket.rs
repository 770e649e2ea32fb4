use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
pub const DEFAULT_HTTP_PORT: u16 = 8000;
pub const DEFAULT_MCP_HOST: &str = "127.0.0.1";
pub const DEFAULT_MCP_PORT: u16 = 8787;

/// Listener socket settings for one front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocketSection {
    pub host: String,
    pub port: u16,
}

impl SocketSection {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawSocketSection {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Defaults and field names for a `[http]` or `[mcp]` table.
#[derive(Debug, Clone, Copy)]
pub struct SocketDefaults {
    pub host: &'static str,
    pub port: u16,
    pub host_field: &'static str,
    pub port_field: &'static str,
}

pub const HTTP_SOCKET_DEFAULTS: SocketDefaults = SocketDefaults {
    host: DEFAULT_HTTP_HOST,
    port: DEFAULT_HTTP_PORT,
    host_field: "http.host",
    port_field: "http.port",
};

pub const MCP_SOCKET_DEFAULTS: SocketDefaults = SocketDefaults {
    host: DEFAULT_MCP_HOST,
    port: DEFAULT_MCP_PORT,
    host_field: "mcp.host",
    port_field: "mcp.port",
};

impl SocketDefaults {
    pub fn section(&self) -> SocketSection {
        SocketSection {
            host: self.host.to_string(),
            port: self.port,
        }
    }
}

pub fn parse_socket_section(
    raw: Option<RawSocketSection>,
    defaults: SocketDefaults,
    path: &Path,
) -> Result<SocketSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    let host = match raw.host {
        Some(host) if host.trim().is_empty() => {
            return Err(ConfigError::InvalidField {
                path: path.to_path_buf(),
                field: defaults.host_field,
                message: "Host must not be blank".into(),
            })
        }
        Some(host) => host.trim().to_string(),
        None => defaults.host.to_string(),
    };
    let port = raw.port.unwrap_or(defaults.port);
    validate_port(port, defaults.port_field, path)?;
    Ok(SocketSection { host, port })
}

fn validate_port(port: u16, field: &'static str, path: &Path) -> Result<(), ConfigError> {
    if (1024..=65535).contains(&port) {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field,
        message: "Use a port in the range 1024-65535".into(),
    })
}
