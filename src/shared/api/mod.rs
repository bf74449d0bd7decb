pub mod json_config;
pub mod problem;
pub mod response;

pub use json_config::{custom_json_config, custom_query_config};
pub use problem::{ProblemDetail, ProblemResponse};
pub use response::{ApiResponse, HttpMessage, ACK_MESSAGE};
