// src/shared/api/response.rs
use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const ACK_MESSAGE: &str = "HttpStatusCode OK";

/// Acknowledgement body for successful writes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HttpMessage {
    #[schema(example = "HttpStatusCode OK")]
    pub message: String,
}

impl HttpMessage {
    pub fn ok() -> Self {
        Self {
            message: ACK_MESSAGE.to_string(),
        }
    }
}

pub struct ApiResponse;

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn created() -> HttpResponse {
        HttpResponse::Created().json(HttpMessage::ok())
    }

    pub fn acknowledged() -> HttpResponse {
        HttpResponse::Ok().json(HttpMessage::ok())
    }
}
