//! External service configuration read from `<SERVICE_NAME>_*` variables

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::domain::SdkError;

/// Authentication scheme named by `<NAME>_AUTH_TYPE`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthType {
    NoAuth,
    BearerToken,
    Basic,
    /// API key exchange; recognised but not provided by this crate
    Iam,
}

impl AuthType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoAuth => "noauth",
            Self::BearerToken => "bearertoken",
            Self::Basic => "basic",
            Self::Iam => "iam",
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthType {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "noauth" => Ok(Self::NoAuth),
            "bearertoken" => Ok(Self::BearerToken),
            "basic" => Ok(Self::Basic),
            "iam" => Ok(Self::Iam),
            other => Err(SdkError::configuration(format!(
                "Unknown authentication type: {}",
                other
            ))),
        }
    }
}

/// Connection settings for one service
#[derive(Clone, Default)]
pub struct ServiceConfig {
    pub service_name: String,
    pub url: Option<String>,
    /// Explicit auth type; inferred from the credentials present when unset
    pub auth_type: Option<AuthType>,
    pub bearer_token: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub apikey: Option<String>,
    pub disable_ssl: bool,
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("service_name", &self.service_name)
            .field("url", &self.url)
            .field("auth_type", &self.auth_type)
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "[REDACTED]"))
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("apikey", &self.apikey.as_ref().map(|_| "[REDACTED]"))
            .field("disable_ssl", &self.disable_ssl)
            .finish()
    }
}

/// Environment prefix for a service name: upper-cased, `-` mapped to `_`
pub fn env_prefix(service_name: &str) -> String {
    service_name.to_ascii_uppercase().replace('-', "_")
}

impl ServiceConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Read `<NAME>_URL`, `<NAME>_AUTH_TYPE`, `<NAME>_BEARER_TOKEN`,
    /// `<NAME>_USERNAME`, `<NAME>_PASSWORD`, `<NAME>_APIKEY` and
    /// `<NAME>_DISABLE_SSL` from the process environment
    pub fn from_env(service_name: &str) -> Result<Self, SdkError> {
        Self::from_lookup(service_name, |key| env::var(key).ok())
    }

    /// Same as [`ServiceConfig::from_env`] with a custom variable source
    pub fn from_lookup<F>(service_name: &str, lookup: F) -> Result<Self, SdkError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = env_prefix(service_name);
        let var = |suffix: &str| {
            lookup(&format!("{}_{}", prefix, suffix)).filter(|value| !value.trim().is_empty())
        };

        let auth_type = var("AUTH_TYPE").map(|value| value.parse()).transpose()?;
        let disable_ssl = var("DISABLE_SSL")
            .map(|value| value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            service_name: service_name.to_string(),
            url: var("URL"),
            auth_type,
            bearer_token: var("BEARER_TOKEN"),
            username: var("USERNAME"),
            password: var("PASSWORD"),
            apikey: var("APIKEY"),
            disable_ssl,
        })
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.auth_type = Some(AuthType::BearerToken);
        self.bearer_token = Some(token.into());
        self
    }

    /// The configured auth type, or one inferred from the credentials present
    pub fn effective_auth_type(&self) -> AuthType {
        if let Some(auth_type) = self.auth_type {
            return auth_type;
        }

        if self.bearer_token.is_some() {
            AuthType::BearerToken
        } else if self.username.is_some() {
            AuthType::Basic
        } else if self.apikey.is_some() {
            AuthType::Iam
        } else {
            AuthType::NoAuth
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_env_prefix() {
        assert_eq!(env_prefix("iam_identity"), "IAM_IDENTITY");
        assert_eq!(env_prefix("enterprise-management"), "ENTERPRISE_MANAGEMENT");
    }

    #[test]
    fn test_from_lookup_reads_service_vars() {
        let config = ServiceConfig::from_lookup(
            "iam_access_groups",
            lookup(&[
                ("IAM_ACCESS_GROUPS_URL", "https://iam.test.cloud.ibm.com"),
                ("IAM_ACCESS_GROUPS_AUTH_TYPE", "BearerToken"),
                ("IAM_ACCESS_GROUPS_BEARER_TOKEN", "tok"),
                ("IAM_ACCESS_GROUPS_DISABLE_SSL", "TRUE"),
                ("IAM_IDENTITY_URL", "https://other"),
            ]),
        )
        .unwrap();

        assert_eq!(config.url.as_deref(), Some("https://iam.test.cloud.ibm.com"));
        assert_eq!(config.auth_type, Some(AuthType::BearerToken));
        assert_eq!(config.bearer_token.as_deref(), Some("tok"));
        assert!(config.disable_ssl);
    }

    #[test]
    fn test_unknown_auth_type_is_rejected() {
        let err = ServiceConfig::from_lookup(
            "iam_identity",
            lookup(&[("IAM_IDENTITY_AUTH_TYPE", "kerberos")]),
        )
        .unwrap_err();

        assert!(matches!(err, SdkError::Configuration { .. }));
    }

    #[test]
    fn test_auth_type_inference() {
        let basic = ServiceConfig {
            username: Some("user".into()),
            password: Some("pass".into()),
            ..ServiceConfig::new("svc")
        };
        assert_eq!(basic.effective_auth_type(), AuthType::Basic);

        assert_eq!(ServiceConfig::new("svc").effective_auth_type(), AuthType::NoAuth);
        assert_eq!(
            ServiceConfig::new("svc").with_bearer_token("t").effective_auth_type(),
            AuthType::BearerToken
        );
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = ServiceConfig::new("svc").with_bearer_token("secret-token");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        unsafe { env::set_var("IAMSDK_ENV_TEST_URL", "https://env.example.com") };

        let config = ServiceConfig::from_env("iamsdk-env-test").unwrap();
        assert_eq!(config.url.as_deref(), Some("https://env.example.com"));

        unsafe { env::remove_var("IAMSDK_ENV_TEST_URL") };
    }
}
