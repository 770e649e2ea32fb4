//! Configuration, HTTP routing, and MCP runtime.

pub mod config;
pub mod http;
pub mod runtime;
