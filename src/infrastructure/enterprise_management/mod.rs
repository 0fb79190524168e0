//! Enterprise Management v1 service client

mod service;

pub use service::{EnterpriseManagementV1, DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL};
