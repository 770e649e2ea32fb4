use std::{
    fs,
    process::{Command as StdCommand, Stdio},
    time::Duration,
};

use anyhow::{Context, Result};
use rmcp::{
    model::{CallToolRequestParam, ClientInfo, ReadResourceRequestParam},
    serve_client,
};
use serde_json::json;
use tempfile::tempdir;
use tokio::{
    net::{TcpListener, TcpStream},
    process::Command,
    time::{sleep, timeout},
};

use crate::common::{fixture, resource_json, spawn_mcp_stdio_process, tool_text, BINARY_PATH};

#[tokio::test]
async fn inspector_style_spawn_serves_tool_and_resource() -> Result<()> {
    let (mut child, transport, stderr_task) = spawn_mcp_stdio_process().await?;

    let client = serve_client(ClientInfo::default(), transport).await?;
    let info = client
        .call_tool(CallToolRequestParam {
            name: "get_info".into(),
            arguments: None,
        })
        .await?;
    let config = client
        .read_resource(ReadResourceRequestParam {
            uri: "config://app".into(),
        })
        .await?;

    assert_eq!(
        tool_text(&info).as_deref(),
        Some("McpApiBoilerplate MCP Server v0.1.0")
    );
    assert_eq!(
        resource_json(&config),
        Some(json!({ "name": "McpApiBoilerplate", "version": "0.1.0" }))
    );

    client.cancel().await?;
    let status = timeout(Duration::from_secs(5), child.wait()).await??;
    assert!(
        status.success(),
        "server should exit cleanly but exit status was {status:?}"
    );
    if let Some(handle) = stderr_task {
        let _ = handle.await;
    }
    Ok(())
}

#[tokio::test]
async fn tcp_transport_serves_concurrent_clients() -> Result<()> {
    let port = free_port().await?;
    let dir = tempdir()?;
    let config_path = dir.path().join("tcp.toml");
    fs::write(
        &config_path,
        format!("[mcp]\nhost = \"127.0.0.1\"\nport = {port}\n"),
    )?;

    let mut child = Command::new(BINARY_PATH)
        .arg("--config")
        .arg(&config_path)
        .args(["mcp", "--transport", "tcp"])
        .env("RUST_LOG", "warn")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .context("failed to spawn server process")?;

    let addr = format!("127.0.0.1:{port}");
    let sessions = timeout(Duration::from_secs(10), two_sessions(&addr)).await;
    child.kill().await?;

    let (first, second) = sessions.context("TCP sessions timed out")??;
    assert_eq!(first.as_deref(), Some("McpApiBoilerplate MCP Server v0.1.0"));
    assert_eq!(second.as_deref(), Some("McpApiBoilerplate MCP Server v0.1.0"));
    Ok(())
}

/// Opens two sessions, keeps both initialized at once, then calls
/// `get_info` on each.
async fn two_sessions(addr: &str) -> Result<(Option<String>, Option<String>)> {
    let first_stream = connect_when_ready(addr).await;
    let second_stream = TcpStream::connect(addr).await?;
    let (first, second) = tokio::join!(
        serve_client(ClientInfo::default(), first_stream),
        serve_client(ClientInfo::default(), second_stream)
    );
    let (first, second) = (first?, second?);

    let get_info = || CallToolRequestParam {
        name: "get_info".into(),
        arguments: None,
    };
    let (first_info, second_info) =
        tokio::join!(first.call_tool(get_info()), second.call_tool(get_info()));
    let texts = (tool_text(&first_info?), tool_text(&second_info?));

    first.cancel().await?;
    second.cancel().await?;
    Ok(texts)
}

async fn connect_when_ready(addr: &str) -> TcpStream {
    loop {
        match TcpStream::connect(addr).await {
            Ok(stream) => return stream,
            Err(_) => sleep(Duration::from_millis(50)).await,
        }
    }
}

async fn free_port() -> Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    Ok(listener.local_addr()?.port())
}

#[test]
fn invalid_port_config_exits_with_config_error() {
    let status = StdCommand::new(BINARY_PATH)
        .arg("--config")
        .arg(fixture("tests/fixtures/config_invalid_port.toml"))
        .arg("api")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .status()
        .expect("process should start");
    assert_eq!(
        status.code(),
        Some(2),
        "config error exit code (2) expected"
    );
}

#[test]
fn missing_explicit_config_exits_with_config_error() {
    let status = StdCommand::new(BINARY_PATH)
        .arg("--config")
        .arg(fixture("tests/fixtures/does_not_exist.toml"))
        .args(["mcp", "--transport", "stdio"])
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .status()
        .expect("process should start");
    assert_eq!(
        status.code(),
        Some(2),
        "config error exit code (2) expected"
    );
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let output = StdCommand::new(BINARY_PATH)
        .stdin(Stdio::null())
        .output()
        .expect("process should start");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
}
