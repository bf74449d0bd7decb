use crate::author::application::domain::entities::AuthorId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Invalid token claims: {0}")]
    InvalidClaims(String),
}

/// Caller identity carried by a verified access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessClaims {
    pub author_id: AuthorId,
    pub scopes: Vec<String>,
}

impl AccessClaims {
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.iter().any(|s| s == scope)
    }
}

pub trait TokenVerifier: Send + Sync {
    fn verify_access_token(&self, token: &str) -> Result<AccessClaims, TokenError>;
}
