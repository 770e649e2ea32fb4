//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use super::{build_launch_args, resolve_config_path, FrontEnd, LaunchProfile, TransportMode};

/// Front end to run.
#[derive(Debug, Clone, Subcommand)]
pub enum ServeCommand {
    /// Run the HTTP API (`GET /health`).
    #[command(about = "Run the HTTP API (GET /health)")]
    Api,
    /// Run the MCP server (`get_info` tool, `config://app` resource).
    #[command(about = "Run the MCP server (get_info tool, config://app resource)")]
    Mcp(McpArgs),
}

/// Arguments for `mcp`.
#[derive(Debug, Clone, Args)]
pub struct McpArgs {
    /// Select stdio (default) or tcp.
    #[arg(long, value_enum, default_value_t = TransportMode::Stdio)]
    pub transport: TransportMode,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "McpApiBoilerplate: HTTP health API and MCP server",
    long_about = None
)]
pub struct LaunchProfileArgs {
    /// Path to config.toml (overrides MCP_CONFIG_PATH).
    #[arg(long = "config", global = true)]
    pub config_override: Option<PathBuf>,
    #[command(subcommand)]
    pub command: ServeCommand,
}

impl LaunchProfileArgs {
    /// Build a `LaunchProfile` from CLI args and environment variables.
    pub fn build(self) -> Result<LaunchProfile> {
        let (config_path, config_source) = resolve_config_path(self.config_override)?;
        let (front_end, transport) = match self.command {
            ServeCommand::Api => (FrontEnd::Api, TransportMode::Tcp),
            ServeCommand::Mcp(args) => (FrontEnd::Mcp, args.transport),
        };
        let launch_args = build_launch_args(front_end, transport, &config_path);

        Ok(LaunchProfile {
            front_end,
            transport,
            config_path,
            config_source,
            launch_args,
        })
    }
}
