//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::ServiceConfig;

/// Loads and provides access to the service configuration.
///
/// # File Format
///
/// ```yaml
/// server:
///   host: 0.0.0.0
///   port: 8080
/// logging:
///   filter: info
/// validation:
///   min_salary_cents: 100000
///   max_salary_cents: 100000000000
/// pagination:
///   default_limit: 20
///   max_limit: 100
/// ```
///
/// Any section or field may be omitted and falls back to its default.
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/service.yaml")?;
/// println!("Listening on {}", loader.config().server.bind_address());
/// # Ok::<(), salary_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// Returns `ConfigNotFound` if the file cannot be read and
    /// `ConfigParseError` if it is not valid configuration YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|message| EngineError::ConfigParseError {
            path: path_str,
            message,
        })
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn from_yaml_str(content: &str) -> Result<Self, String> {
        // an empty document deserializes to unit, not to an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: ServiceConfig = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn validate(config: &ServiceConfig) -> Result<(), String> {
        let validation = &config.validation;
        if validation.min_salary_cents < 0 {
            return Err("validation.min_salary_cents must not be negative".to_string());
        }
        if validation.max_salary_cents < validation.min_salary_cents {
            return Err(
                "validation.max_salary_cents must not be below min_salary_cents".to_string(),
            );
        }
        let pagination = &config.pagination;
        if pagination.default_limit == 0 || pagination.max_limit == 0 {
            return Err("pagination limits must be positive".to_string());
        }
        if pagination.default_limit > pagination.max_limit {
            return Err("pagination.default_limit must not exceed max_limit".to_string());
        }
        Ok(())
    }

    /// Returns the underlying service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "salary_engine_{}_{}.yaml",
            name,
            uuid::Uuid::new_v4()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_full_config() {
        let path = write_temp_config(
            "full",
            r#"
server:
  host: 0.0.0.0
  port: 8080
logging:
  filter: warn
validation:
  min_salary_cents: 50000
  max_salary_cents: 900000000
pagination:
  default_limit: 10
  max_limit: 50
"#,
        );

        let loader = ConfigLoader::load(&path).unwrap();
        let config = loader.config();

        assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.logging.filter, "warn");
        assert_eq!(config.validation.min_salary_cents, 50_000);
        assert_eq!(config.pagination.default_limit, 10);
        assert_eq!(config.pagination.max_limit, 50);

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let path = write_temp_config("partial", "server:\n  port: 9000\n");

        let loader = ConfigLoader::load(&path).unwrap();
        let config = loader.config();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.validation, Default::default());

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_empty_file_is_default() {
        let path = write_temp_config("empty", "");
        let loader = ConfigLoader::load(&path).unwrap();
        assert_eq!(loader.config(), &ServiceConfig::default());
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file_returns_not_found() {
        let result = ConfigLoader::load("/nonexistent/service.yaml");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let loader = ConfigLoader::load_or_default("/nonexistent/service.yaml").unwrap();
        assert_eq!(loader.config().server.port, 3000);
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let path = write_temp_config("invalid", "server: [unclosed");
        let result = ConfigLoader::load(&path);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_inconsistent_limits_are_rejected() {
        let path = write_temp_config(
            "limits",
            "pagination:\n  default_limit: 500\n  max_limit: 100\n",
        );
        let result = ConfigLoader::load(&path);
        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("default_limit"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
        fs::remove_file(path).unwrap();
    }
}
