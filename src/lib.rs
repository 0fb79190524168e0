//! IBM Cloud IAM SDK
//!
//! Typed async clients for:
//! - IAM Identity v1 (API keys, service IDs, trusted profiles, account settings)
//! - IAM Access Groups v2 (groups, members, dynamic rules)
//! - Enterprise Management v1 (enterprises, accounts, account groups)

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{AppConfig, ServiceConfig};
pub use domain::{DetailedResponse, EmptyObject, Pager, SdkError};
pub use infrastructure::{
    BaseServiceOptions, EnterpriseManagementV1, IamAccessGroupsV2, IamIdentityV1,
};
