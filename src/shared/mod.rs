pub mod api;
pub mod server_config;
