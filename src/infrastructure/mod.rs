//! Infrastructure layer - HTTP transport, authentication and service clients

pub mod auth;
pub mod base_service;
pub mod enterprise_management;
pub mod http_client;
pub mod iam_access_groups;
pub mod iam_identity;
pub mod logging;
pub mod observability;

pub use auth::{
    authenticator_from_config, BasicAuthenticator, BearerTokenAuthenticator, NoAuthAuthenticator,
};
pub use base_service::{BaseService, BaseServiceOptions};
pub use enterprise_management::EnterpriseManagementV1;
pub use http_client::{HttpClient, HttpClientTrait, HttpRequest, HttpResponse};
pub use iam_access_groups::IamAccessGroupsV2;
pub use iam_identity::IamIdentityV1;
