use async_trait::async_trait;

use crate::author::application::domain::entities::{Author, AuthorId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthorClientError {
    #[error("Author not found")]
    NotFound,

    #[error("User service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("User service timed out")]
    Timeout,
}

/// Remote lookup of authors owned by the user service.
///
/// A single call is made per lookup; failures are surfaced as-is.
#[async_trait]
pub trait AuthorClient: Send + Sync {
    async fn get_author_by_id(&self, id: AuthorId) -> Result<Author, AuthorClientError>;
}
