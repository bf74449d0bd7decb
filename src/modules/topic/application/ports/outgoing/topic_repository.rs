use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::author::application::domain::entities::AuthorId;
use crate::topic::application::domain::entities::TopicStatus;

// Input DTO for inserting a topic
#[derive(Debug, Clone)]
pub struct NewTopicData {
    pub title: String,
    pub message: String,
    pub status: TopicStatus,
    pub author_id: AuthorId,
    pub course_id: i64,
    pub created_at: DateTime<Utc>,
}

// Fields overwritten by an edit
#[derive(Debug, Clone)]
pub struct UpdateTopicData {
    pub topic_id: i64,
    pub title: String,
    pub message: String,
    pub status: TopicStatus,
    pub course_id: i64,
}

/// Persisted topic row after a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRecord {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub status: TopicStatus,
    pub author_id: Option<AuthorId>,
    pub course_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Topic not found")]
    TopicNotFound,

    #[error("Duplicate record")]
    DuplicateRecord,
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create_topic(&self, data: NewTopicData) -> Result<TopicRecord, TopicRepositoryError>;

    async fn update_topic(
        &self,
        data: UpdateTopicData,
    ) -> Result<TopicRecord, TopicRepositoryError>;

    /// Removes the topic together with its answers.
    async fn delete_topic(&self, topic_id: i64) -> Result<(), TopicRepositoryError>;
}
