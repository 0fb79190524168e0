//! IAM Access Groups v2

pub mod models;
pub mod params;

pub use models::*;
pub use params::*;
