use std::fmt;

use serde::Deserialize;

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug)]
pub enum ConfigError {
    Parse(String),
    InvalidValue { key: String, details: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(s) => write!(f, "Config parse error: {}", s),
            ConfigError::InvalidValue { key, details } => {
                write!(f, "Config error: {} - {}", key, details)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_yaml::Error> for ConfigError {
    fn from(error: serde_yaml::Error) -> Self {
        ConfigError::Parse(error.to_string())
    }
}

/// Console settings, read from YAML. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortalConfig {
    /// prefix for every backend path, empty means same origin
    pub api_base_url: String,
    pub log_level: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl PortalConfig {
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: PortalConfig = serde_yaml::from_str(content)?;
        config.log_level_filter()?;
        Ok(config)
    }

    pub fn log_level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.log_level.parse::<log::LevelFilter>().map_err(|_| {
            ConfigError::InvalidValue {
                key: "log_level".to_string(),
                details: format!("unknown level '{}'", self.log_level),
            }
        })
    }

    /// Full url for a backend path.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PortalConfig::from_yaml("").unwrap();
        assert_eq!(config, PortalConfig::default());
        assert_eq!(config.log_level_filter().unwrap(), log::LevelFilter::Info);
        assert_eq!(
            config.api_url("/api/v1/mkube/tenants"),
            "/api/v1/mkube/tenants"
        );
    }

    #[test]
    fn test_from_yaml() {
        let config = PortalConfig::from_yaml(
            "api_base_url: http://localhost:9090/\nlog_level: debug\n",
        )
        .unwrap();
        assert_eq!(
            config.api_url("/api/v1/mkube/storage-classes"),
            "http://localhost:9090/api/v1/mkube/storage-classes"
        );
        assert_eq!(config.log_level_filter().unwrap(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            PortalConfig::from_yaml("log_level: chatty"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            PortalConfig::from_yaml("unknown_key: 1"),
            Err(ConfigError::Parse(_))
        ));
    }
}
