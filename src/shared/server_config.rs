use std::env;

use actix_web::http::StatusCode;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServerConfigError {
    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,

    #[error("PORT must be a valid port number: {0}")]
    InvalidPort(String),

    #[error("PRIVILEGE_DENIED_STATUS must be 418 or 403: {0}")]
    InvalidPrivilegeStatus(String),
}

/// Process-level settings shared by the HTTP server and the database pool.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Status returned when a caller may not touch someone else's topic.
    pub privilege_denied_status: StatusCode,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ServerConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ServerConfigError::MissingDatabaseUrl)?;
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ServerConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };
        let privilege_denied_status =
            parse_privilege_denied_status(env::var("PRIVILEGE_DENIED_STATUS").ok().as_deref())?;

        Ok(Self {
            database_url,
            host,
            port,
            privilege_denied_status,
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

pub fn parse_privilege_denied_status(raw: Option<&str>) -> Result<StatusCode, ServerConfigError> {
    match raw.map(str::trim) {
        None | Some("") | Some("418") => Ok(StatusCode::IM_A_TEAPOT),
        Some("403") => Ok(StatusCode::FORBIDDEN),
        Some(other) => Err(ServerConfigError::InvalidPrivilegeStatus(other.to_string())),
    }
}
