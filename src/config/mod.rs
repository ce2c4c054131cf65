//! Configuration loading and management for the salary engine service.
//!
//! This module loads listener, logging, validation and pagination settings
//! from a YAML file. Tax brackets, rates and caps are static data in
//! [`crate::calculation`] and are not configurable.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Port: {}", config.config().server.port);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LoggingConfig, PaginationConfig, ServerConfig, ServiceConfig, ValidationConfig};
