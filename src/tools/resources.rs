//! Static resource registry served through `resources/list` and `resources/read`.
use std::fmt;

use rmcp::model::{
    AnnotateAble, ErrorData, RawResource, ReadResourceResult, Resource, ResourceContents,
};
use serde_json::json;

use crate::lib::{
    errors::UNKNOWN_RESOURCE_ERROR,
    service::{get_config, ServiceIdentity},
};

pub const APP_CONFIG_URI: &str = "config://app";

/// A resource whose body is derived from the service identity on every read.
#[derive(Clone, Copy)]
pub struct StaticResource {
    pub uri: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub mime_type: &'static str,
    pub read: fn(&ServiceIdentity) -> String,
}

impl fmt::Debug for StaticResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticResource")
            .field("uri", &self.uri)
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .finish_non_exhaustive()
    }
}

/// `config://app`: the service name and version as JSON.
pub const APP_CONFIG_RESOURCE: StaticResource = StaticResource {
    uri: APP_CONFIG_URI,
    name: "app_config",
    description: "Application configuration resource",
    mime_type: "application/json",
    read: get_config,
};

/// URI-keyed resources, fixed after startup.
#[derive(Debug, Clone, Default)]
pub struct ResourceRegistry {
    entries: Vec<StaticResource>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every resource this server ships.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.insert(APP_CONFIG_RESOURCE);
        registry
    }

    /// Register a resource, replacing any existing entry with the same URI.
    pub fn insert(&mut self, resource: StaticResource) {
        match self.entries.iter_mut().find(|e| e.uri == resource.uri) {
            Some(existing) => *existing = resource,
            None => self.entries.push(resource),
        }
    }

    pub fn get(&self, uri: &str) -> Option<&StaticResource> {
        self.entries.iter().find(|entry| entry.uri == uri)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resources in registration order, for `resources/list`.
    pub fn list(&self) -> Vec<Resource> {
        self.entries.iter().map(resource_to_mcp).collect()
    }

    /// Read `uri`, or fail with `resource_not_found` naming the known URIs.
    pub fn read(
        &self,
        uri: &str,
        identity: &ServiceIdentity,
    ) -> Result<ReadResourceResult, ErrorData> {
        let Some(resource) = self.get(uri) else {
            let available: Vec<&str> = self.entries.iter().map(|entry| entry.uri).collect();
            return Err(UNKNOWN_RESOURCE_ERROR.resource_not_found(json!({
                "uri": uri,
                "available": available,
            })));
        };

        let mut contents = ResourceContents::text((resource.read)(identity), resource.uri);
        if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
            *mime_type = Some(resource.mime_type.to_string());
        }
        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }
}

fn resource_to_mcp(resource: &StaticResource) -> Resource {
    let mut raw = RawResource::new(resource.uri, resource.name);
    raw.description = Some(resource.description.to_string());
    raw.mime_type = Some(resource.mime_type.to_string());
    raw.no_annotation()
}
