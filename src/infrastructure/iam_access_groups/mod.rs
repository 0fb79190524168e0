//! IAM Access Groups v2 service client

mod service;

pub use service::{IamAccessGroupsV2, DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL};
