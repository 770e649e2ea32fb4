use std::path::Path;

use serde::Deserialize;

use crate::lib::{
    errors::ConfigError,
    service::{ServiceIdentity, DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_VERSION},
};

#[derive(Debug, Deserialize, Default)]
pub struct RawServiceSection {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// Build the process-wide identity from `[service]`, falling back to built-in defaults.
pub fn parse_service_section(
    raw: Option<RawServiceSection>,
    path: &Path,
) -> Result<ServiceIdentity, ConfigError> {
    let raw = raw.unwrap_or_default();
    let name = non_blank(raw.name, DEFAULT_SERVICE_NAME, "service.name", path)?;
    let version = non_blank(
        raw.version,
        DEFAULT_SERVICE_VERSION,
        "service.version",
        path,
    )?;
    Ok(ServiceIdentity::new(name, version))
}

fn non_blank(
    value: Option<String>,
    default: &str,
    field: &'static str,
    path: &Path,
) -> Result<String, ConfigError> {
    match value {
        None => Ok(default.to_string()),
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field,
            message: "Value must not be blank".into(),
        }),
        Some(value) => Ok(value.trim().to_string()),
    }
}
