use std::collections::HashMap;

use serde::Deserialize;

use crate::infrastructure::observability::ObservabilityConfig;

/// Application configuration for the `iamctl` binary and SDK defaults
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    /// Per-service overrides keyed by service name, e.g. `iam_identity`
    #[serde(default)]
    pub services: HashMap<String, ServiceOverride>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout; 0 disables it
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ServiceOverride {
    pub url: Option<String>,
    #[serde(default)]
    pub disable_ssl: bool,
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Option<std::time::Duration> {
        (self.timeout_secs > 0).then(|| std::time::Duration::from_secs(self.timeout_secs))
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("IAM_SDK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    pub fn service(&self, name: &str) -> Option<&ServiceOverride> {
        self.services.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.logging.level, "warn");
        assert!(matches!(config.logging.format, LogFormat::Pretty));
        assert_eq!(config.http.timeout(), Some(std::time::Duration::from_secs(60)));
        assert!(config.services.is_empty());
    }

    #[test]
    fn test_zero_timeout_disables_it() {
        let http = HttpConfig { timeout_secs: 0 };
        assert_eq!(http.timeout(), None);
    }

    #[test]
    fn test_deserialize_service_overrides() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "logging": { "level": "debug", "format": "json" },
            "services": {
                "iam_identity": { "url": "https://iam.test.cloud.ibm.com" }
            }
        }))
        .unwrap();

        assert!(matches!(config.logging.format, LogFormat::Json));
        let identity = config.service("iam_identity").unwrap();
        assert_eq!(identity.url.as_deref(), Some("https://iam.test.cloud.ibm.com"));
        assert!(!identity.disable_ssl);
        assert_eq!(config.http.timeout_secs, 60);
    }
}
