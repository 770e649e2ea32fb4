//! Telemetry initialization and runtime-mode logging.

use anyhow::Result;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` and format developer logs.
///
/// Logs go to stderr so the MCP stdio transport keeps stdout to itself.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Payload for logging the runtime state of a front end as structured telemetry.
#[derive(Debug, Serialize)]
pub struct RuntimeModeTelemetry<'a> {
    pub front_end: &'a str,
    pub transport: &'a str,
    pub bind_addr: Option<&'a str>,
    pub service_name: &'a str,
    pub service_version: &'a str,
    pub config_path: &'a str,
    pub launch_args: &'a [String],
}

/// Emit runtime mode to `tracing`.
pub fn emit_runtime_mode(telemetry: &RuntimeModeTelemetry<'_>) {
    info!(
        target: "mcp_api_boilerplate::runtime",
        front_end = telemetry.front_end,
        transport = telemetry.transport,
        bind_addr = telemetry.bind_addr.unwrap_or(""),
        service_name = telemetry.service_name,
        service_version = telemetry.service_version,
        config_path = telemetry.config_path,
        launch_args = ?telemetry.launch_args,
        "Starting server"
    );
}
