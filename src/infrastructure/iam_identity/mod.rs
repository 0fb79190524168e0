//! IAM Identity v1 service client

mod service;

pub use service::{IamIdentityV1, DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL};
