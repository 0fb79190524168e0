//! Domain layer - request/response model and per-service types

pub mod authenticator;
pub mod enterprise_management;
pub mod error;
pub mod iam_access_groups;
pub mod iam_identity;
pub mod pagination;
pub mod request;
pub mod response;

pub use authenticator::Authenticator;
pub use error::SdkError;
pub use pagination::{query_param_from_url, PageCursor, PagedResult, Pager};
pub use request::{ApiRequest, Headers, HttpMethod, QueryValue, RequiredParams};
pub use response::{DetailedResponse, EmptyObject};
