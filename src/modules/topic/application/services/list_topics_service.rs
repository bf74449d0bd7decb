use async_trait::async_trait;

use crate::topic::application::ports::{
    incoming::use_cases::{ListTopicsCommand, ListTopicsError, ListTopicsUseCase},
    outgoing::{Page, TopicQuery, TopicView},
};

#[derive(Debug, Clone)]
pub struct ListTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListTopicsUseCase for ListTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: ListTopicsCommand,
    ) -> Result<Page<TopicView>, ListTopicsError> {
        self.query
            .list_topics(command.page_request().clone())
            .await
            .map_err(|e| ListTopicsError::RepositoryError(e.to_string()))
    }
}
