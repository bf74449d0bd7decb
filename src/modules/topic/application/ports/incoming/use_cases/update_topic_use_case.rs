use async_trait::async_trait;

use crate::author::application::domain::entities::AuthorId;
use crate::author::application::services::ResolveAuthorError;
use crate::topic::application::domain::entities::TopicStatus;

use super::topic_content::{TopicCommandError, TopicContent};

//
// ──────────────────────────────────────────────────────────
// Update Topic Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateTopicCommand {
    topic_id: i64,
    actor_id: AuthorId,
    content: TopicContent,
    status: TopicStatus,
}

impl UpdateTopicCommand {
    pub fn new(
        topic_id: i64,
        actor_id: AuthorId,
        title: Option<String>,
        message: Option<String>,
        status: Option<TopicStatus>,
        course_id: Option<i64>,
    ) -> Result<Self, TopicCommandError> {
        let content = TopicContent::new(title, message, course_id)?;
        let status = status.ok_or(TopicCommandError::MissingStatus)?;

        Ok(Self {
            topic_id,
            actor_id,
            content,
            status,
        })
    }

    pub fn topic_id(&self) -> i64 {
        self.topic_id
    }

    pub fn actor_id(&self) -> AuthorId {
        self.actor_id
    }

    pub fn content(&self) -> &TopicContent {
        &self.content
    }

    pub fn status(&self) -> TopicStatus {
        self.status
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Course not found")]
    CourseNotFound,

    #[error("Author not found")]
    AuthorNotFound,

    #[error("Author service unavailable: {0}")]
    AuthorServiceUnavailable(String),

    #[error("Caller is not allowed to edit this topic")]
    NotOwner,

    #[error("Topic author no longer exists")]
    OrphanAuthor,

    #[error("Duplicate record")]
    DuplicateRecord,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ResolveAuthorError> for UpdateTopicError {
    fn from(err: ResolveAuthorError) -> Self {
        match err {
            ResolveAuthorError::NotFound => UpdateTopicError::AuthorNotFound,
            ResolveAuthorError::ServiceUnavailable(msg) => {
                UpdateTopicError::AuthorServiceUnavailable(msg)
            }
            ResolveAuthorError::Timeout => {
                UpdateTopicError::AuthorServiceUnavailable("timeout".to_string())
            }
            ResolveAuthorError::RepositoryError(msg) => UpdateTopicError::RepositoryError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateTopicUseCase: Send + Sync {
    async fn execute(&self, command: UpdateTopicCommand) -> Result<(), UpdateTopicError>;
}
