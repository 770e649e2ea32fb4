//! Service identity and the status/info/config handlers shared by both front ends.
use serde::Serialize;
use serde_json::json;

/// Service name used when the configuration does not override it.
pub const DEFAULT_SERVICE_NAME: &str = "McpApiBoilerplate";
/// Service version used when the configuration does not override it.
pub const DEFAULT_SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Immutable name/version pair describing the running service.
///
/// Built once at startup and shared (behind `Arc`) with every handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceIdentity {
    name: String,
    version: String,
}

impl ServiceIdentity {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl Default for ServiceIdentity {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_VERSION)
    }
}

/// Liveness payload returned by the health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

impl HealthStatus {
    pub const OK: HealthStatus = HealthStatus { status: "ok" };
}

/// Answer a health query. Always `{"status": "ok"}`.
pub fn check_health() -> HealthStatus {
    HealthStatus::OK
}

/// Human-readable server banner, e.g. `McpApiBoilerplate MCP Server v0.1.0`.
pub fn get_info(identity: &ServiceIdentity) -> String {
    format!(
        "{name} MCP Server v{version}",
        name = identity.name,
        version = identity.version
    )
}

/// JSON object with exactly the `name` and `version` keys.
pub fn get_config(identity: &ServiceIdentity) -> String {
    json!({
        "name": identity.name,
        "version": identity.version,
    })
    .to_string()
}
