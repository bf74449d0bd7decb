use std::sync::Arc;

use crate::author::application::domain::entities::{Author, AuthorId};
use crate::author::application::ports::outgoing::{
    AuthorClient, AuthorClientError, AuthorRepository,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveAuthorError {
    #[error("Author not found")]
    NotFound,

    #[error("User service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("User service timed out")]
    Timeout,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AuthorClientError> for ResolveAuthorError {
    fn from(err: AuthorClientError) -> Self {
        match err {
            AuthorClientError::NotFound => ResolveAuthorError::NotFound,
            AuthorClientError::ServiceUnavailable(msg) => ResolveAuthorError::ServiceUnavailable(msg),
            AuthorClientError::Timeout => ResolveAuthorError::Timeout,
        }
    }
}

/// Resolves the acting author through the user service and refreshes the
/// local mirror used by topic views.
#[derive(Clone)]
pub struct AuthorResolver {
    client: Arc<dyn AuthorClient + Send + Sync>,
    repository: Arc<dyn AuthorRepository + Send + Sync>,
}

impl AuthorResolver {
    pub fn new(
        client: Arc<dyn AuthorClient + Send + Sync>,
        repository: Arc<dyn AuthorRepository + Send + Sync>,
    ) -> Self {
        Self { client, repository }
    }

    pub async fn resolve(&self, id: AuthorId) -> Result<Author, ResolveAuthorError> {
        let author = self.client.get_author_by_id(id).await.map_err(|e| {
            tracing::warn!(author_id = %id, error = %e, "Author lookup failed");
            ResolveAuthorError::from(e)
        })?;

        self.repository
            .upsert_author(&author)
            .await
            .map_err(|e| ResolveAuthorError::RepositoryError(e.to_string()))?;

        Ok(author)
    }
}
