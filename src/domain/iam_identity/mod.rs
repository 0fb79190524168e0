//! IAM Identity v1: API keys, service IDs, trusted profiles, account settings,
//! reports and identity templates

pub mod models;
pub mod params;

pub use models::*;
pub use params::*;
