use async_trait::async_trait;

use crate::author::application::domain::entities::AuthorId;
use crate::author::application::services::ResolveAuthorError;
use crate::topic::application::ports::outgoing::TopicRecord;

use super::topic_content::{TopicCommandError, TopicContent};

//
// ──────────────────────────────────────────────────────────
// Create Topic Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateTopicCommand {
    author_id: AuthorId,
    content: TopicContent,
}

impl CreateTopicCommand {
    pub fn new(
        author_id: AuthorId,
        title: Option<String>,
        message: Option<String>,
        course_id: Option<i64>,
    ) -> Result<Self, TopicCommandError> {
        Ok(Self {
            author_id,
            content: TopicContent::new(title, message, course_id)?,
        })
    }

    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }

    pub fn content(&self) -> &TopicContent {
        &self.content
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateTopicError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("Author not found")]
    AuthorNotFound,

    #[error("Author service unavailable: {0}")]
    AuthorServiceUnavailable(String),

    #[error("Duplicate record")]
    DuplicateRecord,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ResolveAuthorError> for CreateTopicError {
    fn from(err: ResolveAuthorError) -> Self {
        match err {
            ResolveAuthorError::NotFound => CreateTopicError::AuthorNotFound,
            ResolveAuthorError::ServiceUnavailable(msg) => {
                CreateTopicError::AuthorServiceUnavailable(msg)
            }
            ResolveAuthorError::Timeout => {
                CreateTopicError::AuthorServiceUnavailable("timeout".to_string())
            }
            ResolveAuthorError::RepositoryError(msg) => CreateTopicError::RepositoryError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(&self, command: CreateTopicCommand) -> Result<TopicRecord, CreateTopicError>;
}
