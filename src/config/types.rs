//! Configuration types for the salary engine service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML service configuration file. Every section
//! and field has a default, so a partial file (or none at all) is valid.

use serde::Deserialize;

use crate::models::Cents;

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind to.
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// Returns the `host:port` string to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive used when `RUST_LOG` is not set.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info,salary_engine=debug".to_string(),
        }
    }
}

/// Employee validation limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Smallest accepted annual salary in cents.
    pub min_salary_cents: Cents,
    /// Largest accepted annual salary in cents.
    pub max_salary_cents: Cents,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_salary_cents: 100_000,
            max_salary_cents: 100_000_000_000,
        }
    }
}

/// Listing pagination limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Page size used when a request does not give one.
    pub default_limit: usize,
    /// Largest page size a request may ask for.
    pub max_limit: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: 20,
            max_limit: 100,
        }
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Employee validation limits.
    pub validation: ValidationConfig,
    /// Listing pagination limits.
    pub pagination: PaginationConfig,
}
