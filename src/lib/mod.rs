//! Shared library modules: service identity, error types, and telemetry setup.

pub mod errors;
pub mod service;
pub mod telemetry;
