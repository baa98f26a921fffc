//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::timeouts;
use crate::ConfigError;

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - permissive CORS allowed
    #[default]
    Development,
    Staging,
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging and metrics
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Tool execution configuration
    #[serde(default)]
    pub tools: ToolsConfig,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_tools()?;
        self.validate_observability()?;

        if self.environment.is_production() && !self.server.cors_enabled {
            tracing::warn!("CORS is disabled in production - all origins will be allowed");
        }

        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                message: "Port must be non-zero".to_string(),
            });
        }

        if self.server.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.timeout_seconds".to_string(),
                message: "Request timeout must be at least 1 second".to_string(),
            });
        }

        Ok(())
    }

    fn validate_tools(&self) -> Result<(), ConfigError> {
        let timeout = self.tools.timeout_secs;
        if timeout == 0 || timeout > timeouts::TOOL_MAX_SECS {
            return Err(ConfigError::InvalidValue {
                field: "tools.timeout_secs".to_string(),
                message: format!(
                    "Must be between 1 and {}, got {}",
                    timeouts::TOOL_MAX_SECS,
                    timeout
                ),
            });
        }

        Ok(())
    }

    fn validate_observability(&self) -> Result<(), ConfigError> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        let level = self.observability.log_level.to_lowercase();
        if !LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                message: format!("Unknown log level '{}'", self.observability.log_level),
            });
        }

        Ok(())
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Enable CORS origin checks (false = permissive, development only)
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// CORS allowed origins
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_timeout() -> u64 {
    timeouts::HTTP_REQUEST_SECS
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout_seconds: default_timeout(),
            cors_enabled: true,
            cors_origins: Vec::new(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON log lines
    #[serde(default)]
    pub log_json: bool,

    /// Install the Prometheus recorder and serve /metrics
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
            metrics_enabled: true,
        }
    }
}

/// Tool execution configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Per-tool execution timeout
    #[serde(default = "default_tool_timeout")]
    pub timeout_secs: u64,

    /// Tool names left out of the registry
    #[serde(default)]
    pub disabled: Vec<String>,
}

fn default_tool_timeout() -> u64 {
    timeouts::TOOL_DEFAULT_SECS
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_tool_timeout(),
            disabled: Vec::new(),
        }
    }
}

impl ToolsConfig {
    pub fn is_enabled(&self, tool_name: &str) -> bool {
        !self.disabled.iter().any(|d| d == tool_name)
    }
}

/// Load settings from `config/` and the environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (RETIREE_RESOURCES_ prefix, `__` separator)
/// 2. config/{env}.yaml|toml|json (if env specified)
/// 3. config/default.yaml|toml|json
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from(Path::new("config"), env)
}

/// Load settings from an explicit config directory
pub fn load_settings_from(config_dir: &Path, env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    let base = config_dir.join("default");
    builder = builder.add_source(File::with_name(&base.to_string_lossy()).required(false));

    if let Some(env_name) = env {
        let overlay = config_dir.join(env_name);
        builder = builder.add_source(File::with_name(&overlay.to_string_lossy()).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("RETIREE_RESOURCES")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.tools.timeout_secs, timeouts::TOOL_DEFAULT_SECS);
        assert!(settings.observability.metrics_enabled);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_tool_timeout_validation() {
        let mut settings = Settings::default();
        settings.tools.timeout_secs = 0;
        assert!(settings.validate().is_err());

        settings.tools.timeout_secs = timeouts::TOOL_MAX_SECS + 1;
        assert!(settings.validate().is_err());

        settings.tools.timeout_secs = 5;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_server_validation() {
        let mut settings = Settings::default();
        settings.server.port = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_log_level_validation() {
        let mut settings = Settings::default();
        settings.observability.log_level = "verbose".to_string();
        assert!(settings.validate().is_err());

        settings.observability.log_level = "DEBUG".to_string();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_disabled_tools() {
        let tools = ToolsConfig {
            disabled: vec!["search_medicare_plans".to_string()],
            ..Default::default()
        };
        assert!(!tools.is_enabled("search_medicare_plans"));
        assert!(tools.is_enabled("get_medicare_info"));
    }

    #[test]
    fn test_load_from_missing_dir_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(dir.path(), Some("staging")).unwrap();
        assert_eq!(settings.server.port, 8000);
    }

    #[test]
    fn test_load_layers_env_file_over_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.yaml"),
            "server:\n  port: 9000\ntools:\n  timeout_secs: 10\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("production.yaml"),
            "environment: production\nserver:\n  port: 9100\n",
        )
        .unwrap();

        let settings = load_settings_from(dir.path(), Some("production")).unwrap();
        assert_eq!(settings.environment, RuntimeEnvironment::Production);
        assert_eq!(settings.server.port, 9100);
        assert_eq!(settings.tools.timeout_secs, 10);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("default.toml"), "[tools]\ntimeout_secs = 0\n").unwrap();

        let err = load_settings_from(dir.path(), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
