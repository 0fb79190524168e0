use async_trait::async_trait;

use super::error::SdkError;

#[cfg(test)]
use mockall::automock;

/// Adds credentials to an outgoing request.
///
/// Implementations only decorate headers; how a token is obtained is their
/// own business.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Authenticator: Send + Sync + std::fmt::Debug {
    /// Add authentication headers to the request
    async fn authenticate(&self, headers: &mut Vec<(String, String)>) -> Result<(), SdkError>;

    /// Authentication type, as named in external configuration
    fn authentication_type(&self) -> &'static str;
}
