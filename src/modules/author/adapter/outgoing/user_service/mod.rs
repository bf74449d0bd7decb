mod service_token;
mod user_service_client;
mod user_service_config;

pub use service_token::{ServiceTokenError, ServiceTokenSource};
pub use user_service_client::{UserServiceClient, SUMMARY_INFO_PATH};
pub use user_service_config::{ClientCredentials, UserServiceConfig, UserServiceConfigError};
