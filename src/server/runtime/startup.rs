use std::process::ExitCode;

use anyhow::{Context, Error};
use rmcp::ServiceExt;
use tokio::net::TcpListener;

use crate::{
    cli::{FrontEnd, LaunchProfile, TransportMode},
    lib::{
        errors::ConfigError,
        telemetry::{emit_runtime_mode, RuntimeModeTelemetry},
    },
    server::{
        config::ServerConfig,
        http,
        runtime::{build_instructions, McpApiServer},
    },
};

const CONFIG_EXIT_CODE: u8 = 2;

/// Bundles a runtime error message with an exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn from_config_error(err: ConfigError) -> Self {
        Self {
            message: err.to_string(),
            exit_code: ExitCode::from(CONFIG_EXIT_CODE),
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }
}

/// Start the front end named by the launch profile.
pub async fn run_server(profile: LaunchProfile, config: ServerConfig) -> Result<(), RuntimeExit> {
    match profile.front_end {
        FrontEnd::Api => run_api(&profile, &config).await,
        FrontEnd::Mcp => run_mcp(&profile, &config).await,
    }
}

async fn run_api(profile: &LaunchProfile, config: &ServerConfig) -> Result<(), RuntimeExit> {
    let addr = config.http.bind_addr();
    log_start(profile, config, "http", Some(&addr));

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind HTTP port {addr}"))
        .map_err(RuntimeExit::from_error)?;
    http::serve(listener).await.map_err(RuntimeExit::from_error)
}

async fn run_mcp(profile: &LaunchProfile, config: &ServerConfig) -> Result<(), RuntimeExit> {
    let instructions = build_instructions(profile, config);
    let server = McpApiServer::new(config.service.clone(), instructions);

    match profile.transport {
        TransportMode::Stdio => {
            log_start(profile, config, TransportMode::Stdio.as_str(), None);
            run_stdio(server).await
        }
        TransportMode::Tcp => {
            let addr = config.mcp.bind_addr();
            log_start(profile, config, TransportMode::Tcp.as_str(), Some(&addr));
            run_tcp(server, &addr).await
        }
    }
}

fn log_start(profile: &LaunchProfile, config: &ServerConfig, transport: &str, addr: Option<&str>) {
    emit_runtime_mode(&RuntimeModeTelemetry {
        front_end: profile.front_end.as_str(),
        transport,
        bind_addr: addr,
        service_name: config.service.name(),
        service_version: config.service.version(),
        config_path: config.source_path.to_string_lossy().as_ref(),
        launch_args: &profile.launch_args,
    });
}

async fn run_stdio(server: McpApiServer) -> Result<(), RuntimeExit> {
    let running = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(RuntimeExit::from_error)?;
    running.waiting().await.map_err(RuntimeExit::from_error)?;
    Ok(())
}

async fn run_tcp(server: McpApiServer, addr: &str) -> Result<(), RuntimeExit> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind TCP port {addr}"))
        .map_err(RuntimeExit::from_error)?;
    tracing::info!(
        target: "mcp_api_boilerplate::runtime",
        transport = "tcp",
        bind_addr = %addr,
        "Started listening in TCP mode"
    );

    loop {
        let (stream, peer) = listener
            .accept()
            .await
            .with_context(|| format!("failed to accept TCP connection ({addr})"))
            .map_err(RuntimeExit::from_error)?;
        tracing::info!(
            target: "mcp_api_boilerplate::runtime",
            peer = %peer,
            "Accepted connection from MCP client"
        );
        let cloned = server.clone();
        tokio::spawn(async move {
            let running = match cloned.serve(stream).await {
                Ok(running) => running,
                Err(err) => {
                    tracing::warn!(
                        target: "mcp_api_boilerplate::runtime",
                        peer = %peer,
                        error = %err,
                        "MCP handshake failed"
                    );
                    return;
                }
            };
            if let Err(err) = running.waiting().await {
                tracing::warn!(
                    target: "mcp_api_boilerplate::runtime",
                    peer = %peer,
                    error = %err,
                    "MCP session ended with an error"
                );
            }
        });
    }
}
