//! Configuration: application settings and external service credentials

mod app_config;
mod service_config;

pub use app_config::{AppConfig, HttpConfig, LogFormat, LoggingConfig, ServiceOverride};
pub use service_config::{AuthType, ServiceConfig};
