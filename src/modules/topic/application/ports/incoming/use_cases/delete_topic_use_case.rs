use async_trait::async_trait;

use crate::author::application::domain::entities::AuthorId;
use crate::author::application::services::ResolveAuthorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteTopicCommand {
    pub topic_id: i64,
    pub actor_id: AuthorId,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Author not found")]
    AuthorNotFound,

    #[error("Author service unavailable: {0}")]
    AuthorServiceUnavailable(String),

    #[error("Caller is not allowed to remove this topic")]
    NotOwner,

    #[error("Topic author no longer exists")]
    OrphanAuthor,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ResolveAuthorError> for DeleteTopicError {
    fn from(err: ResolveAuthorError) -> Self {
        match err {
            ResolveAuthorError::NotFound => DeleteTopicError::AuthorNotFound,
            ResolveAuthorError::ServiceUnavailable(msg) => {
                DeleteTopicError::AuthorServiceUnavailable(msg)
            }
            ResolveAuthorError::Timeout => {
                DeleteTopicError::AuthorServiceUnavailable("timeout".to_string())
            }
            ResolveAuthorError::RepositoryError(msg) => DeleteTopicError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait DeleteTopicUseCase: Send + Sync {
    async fn execute(&self, command: DeleteTopicCommand) -> Result<(), DeleteTopicError>;
}
