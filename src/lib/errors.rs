use std::path::PathBuf;

use config::ConfigError as ConfigLoaderError;
use rmcp::model::ErrorData;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Required field is missing.
    #[error("Configuration file {path} is missing `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Structured error metadata returned by MCP requests.
#[derive(Debug, Clone, Serialize)]
pub struct McpErrorDescriptor {
    /// Error code.
    pub code: &'static str,
    /// User-facing message.
    pub message: &'static str,
    /// Recommended remediation.
    pub remediation: &'static str,
}

impl McpErrorDescriptor {
    pub const fn new(code: &'static str, message: &'static str, remediation: &'static str) -> Self {
        Self {
            code,
            message,
            remediation,
        }
    }

    fn data(&self, details: Value) -> Value {
        let mut data = Map::new();
        data.insert("code".into(), Value::String(self.code.into()));
        data.insert("remediation".into(), Value::String(self.remediation.into()));
        data.insert("details".into(), details);
        Value::Object(data)
    }

    /// Build `resource_not_found` error data carrying this descriptor.
    pub fn resource_not_found(&self, details: Value) -> ErrorData {
        ErrorData::resource_not_found(self.message, Some(self.data(details)))
    }
}

/// Returned when `resources/read` names a URI that is not registered.
pub const UNKNOWN_RESOURCE_ERROR: McpErrorDescriptor = McpErrorDescriptor::new(
    "UNKNOWN_RESOURCE",
    "Requested resource URI is not registered",
    "Call resources/list and read one of the advertised URIs.",
);
