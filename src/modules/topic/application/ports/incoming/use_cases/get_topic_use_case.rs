use async_trait::async_trait;

use crate::topic::application::ports::outgoing::TopicView;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetTopicError {
    #[error("Topic not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetTopicUseCase: Send + Sync {
    async fn execute(&self, topic_id: i64) -> Result<TopicView, GetTopicError>;
}
