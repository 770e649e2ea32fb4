//! LaunchProfile and config path resolution.
use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::server::config::{CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

/// Front end selected by the subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontEnd {
    Api,
    Mcp,
}

impl FrontEnd {
    pub const fn as_str(&self) -> &'static str {
        match self {
            FrontEnd::Api => "api",
            FrontEnd::Mcp => "mcp",
        }
    }
}

/// MCP transport mode.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum TransportMode {
    Stdio,
    Tcp,
}

impl TransportMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Stdio => "stdio",
            TransportMode::Tcp => "tcp",
        }
    }
}

/// Where the config path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Cli,
    Env,
    Default,
}

impl ConfigSource {
    /// Explicitly named files must exist; the implicit default may be absent.
    pub const fn is_explicit(&self) -> bool {
        !matches!(self, ConfigSource::Default)
    }
}

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub front_end: FrontEnd,
    pub transport: TransportMode,
    pub config_path: PathBuf,
    pub config_source: ConfigSource,
    pub launch_args: Vec<String>,
}

/// Resolve config path in the order: CLI override → env var → default.
pub fn resolve_config_path(override_path: Option<PathBuf>) -> Result<(PathBuf, ConfigSource)> {
    let (path, source) = match override_path {
        Some(path) => (path, ConfigSource::Cli),
        None => match env::var_os(CONFIG_ENV_KEY).filter(|value| !value.is_empty()) {
            Some(value) => (PathBuf::from(value), ConfigSource::Env),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), ConfigSource::Default),
        },
    };

    Ok((absolutize(path)?, source))
}

fn absolutize(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(cwd.join(path))
}

/// Build launch arguments suitable for reproduction/logging.
pub fn build_launch_args(
    front_end: FrontEnd,
    transport: TransportMode,
    config: &Path,
) -> Vec<String> {
    let mut args = vec![format!("--config={}", config.display())];
    args.push(front_end.as_str().to_string());
    if front_end == FrontEnd::Mcp {
        args.push(format!("--transport={}", transport.as_str()));
    }
    args
}
