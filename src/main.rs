//! Entry point for McpApiBoilerplate.
use std::process::ExitCode;

use clap::Parser;
use mcp_api_boilerplate::{
    cli::{LaunchProfile, LaunchProfileArgs},
    lib::telemetry,
    server::{
        config::ServerConfig,
        runtime::{self, RuntimeExit},
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = LaunchProfileArgs::parse();
    let profile = args.build().map_err(RuntimeExit::from_error)?;
    let config = load_config(&profile)?;
    runtime::run_server(profile, config).await
}

fn load_config(profile: &LaunchProfile) -> Result<ServerConfig, RuntimeExit> {
    ServerConfig::load_for_source(profile.config_path.clone(), profile.config_source)
        .map_err(RuntimeExit::from_config_error)
}
