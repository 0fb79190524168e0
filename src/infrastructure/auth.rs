//! Authenticators that decorate requests with static credentials

use std::sync::Arc;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::config::{AuthType, ServiceConfig};
use crate::domain::request::merge_header;
use crate::domain::{Authenticator, SdkError};

const AUTHORIZATION: &str = "Authorization";

/// Credentials may not be wrapped in braces or quotes, a common copy/paste slip
fn validate_credential(name: &str, value: &str) -> Result<(), SdkError> {
    if value.trim().is_empty() {
        return Err(SdkError::authentication(format!("The {} shouldn't be empty.", name)));
    }

    let wrapped = |open: char, close: char| value.starts_with(open) && value.ends_with(close);
    if wrapped('{', '}') || wrapped('"', '"') {
        return Err(SdkError::authentication(format!(
            "The {} shouldn't start or end with curly brackets or quotes.",
            name
        )));
    }

    Ok(())
}

/// Sends requests without credentials
#[derive(Debug, Clone, Default)]
pub struct NoAuthAuthenticator;

#[async_trait]
impl Authenticator for NoAuthAuthenticator {
    async fn authenticate(&self, _headers: &mut Vec<(String, String)>) -> Result<(), SdkError> {
        Ok(())
    }

    fn authentication_type(&self) -> &'static str {
        AuthType::NoAuth.as_str()
    }
}

/// Sends a caller-managed bearer token
#[derive(Clone)]
pub struct BearerTokenAuthenticator {
    bearer_token: String,
}

impl std::fmt::Debug for BearerTokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerTokenAuthenticator")
            .field("bearer_token", &"[REDACTED]")
            .finish()
    }
}

impl BearerTokenAuthenticator {
    pub fn new(bearer_token: impl Into<String>) -> Result<Self, SdkError> {
        let bearer_token = bearer_token.into();
        validate_credential("bearer token", &bearer_token)?;
        Ok(Self { bearer_token })
    }
}

#[async_trait]
impl Authenticator for BearerTokenAuthenticator {
    async fn authenticate(&self, headers: &mut Vec<(String, String)>) -> Result<(), SdkError> {
        merge_header(headers, AUTHORIZATION, &format!("Bearer {}", self.bearer_token));
        Ok(())
    }

    fn authentication_type(&self) -> &'static str {
        AuthType::BearerToken.as_str()
    }
}

/// HTTP basic authentication
#[derive(Clone)]
pub struct BasicAuthenticator {
    username: String,
    header_value: String,
}

impl std::fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthenticator")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl BasicAuthenticator {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, SdkError> {
        let username = username.into();
        let password = password.into();
        validate_credential("username", &username)?;
        validate_credential("password", &password)?;

        let encoded = STANDARD.encode(format!("{}:{}", username, password));
        Ok(Self {
            username,
            header_value: format!("Basic {}", encoded),
        })
    }
}

#[async_trait]
impl Authenticator for BasicAuthenticator {
    async fn authenticate(&self, headers: &mut Vec<(String, String)>) -> Result<(), SdkError> {
        merge_header(headers, AUTHORIZATION, &self.header_value);
        Ok(())
    }

    fn authentication_type(&self) -> &'static str {
        AuthType::Basic.as_str()
    }
}

/// Build the authenticator described by a service configuration
pub fn authenticator_from_config(
    config: &ServiceConfig,
) -> Result<Arc<dyn Authenticator>, SdkError> {
    match config.effective_auth_type() {
        AuthType::NoAuth => Ok(Arc::new(NoAuthAuthenticator)),
        AuthType::BearerToken => {
            let token = config.bearer_token.clone().ok_or_else(|| {
                SdkError::configuration(format!(
                    "Bearer token authentication requires a token for service '{}'",
                    config.service_name
                ))
            })?;
            Ok(Arc::new(BearerTokenAuthenticator::new(token)?))
        }
        AuthType::Basic => {
            let (Some(username), Some(password)) =
                (config.username.clone(), config.password.clone())
            else {
                return Err(SdkError::configuration(format!(
                    "Basic authentication requires a username and password for service '{}'",
                    config.service_name
                )));
            };
            Ok(Arc::new(BasicAuthenticator::new(username, password)?))
        }
        AuthType::Iam => Err(SdkError::configuration(format!(
            "IAM API key authentication is not supported for service '{}'; \
             obtain a token and use bearertoken",
            config.service_name
        ))),
    }
}
