use async_trait::async_trait;

use crate::author::application::services::AuthorResolver;
use crate::topic::application::domain::policies::{authorize_mutation, MutationDecision};
use crate::topic::application::ports::{
    incoming::use_cases::{DeleteTopicCommand, DeleteTopicError, DeleteTopicUseCase},
    outgoing::{TopicQuery, TopicQueryError, TopicRepository, TopicRepositoryError},
};

#[derive(Clone)]
pub struct DeleteTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    query: Q,
    repository: R,
    authors: AuthorResolver,
}

impl<Q, R> DeleteTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, authors: AuthorResolver) -> Self {
        Self {
            query,
            repository,
            authors,
        }
    }
}

#[async_trait]
impl<Q, R> DeleteTopicUseCase for DeleteTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, command: DeleteTopicCommand) -> Result<(), DeleteTopicError> {
        let topic = self
            .query
            .get_topic(command.topic_id)
            .await
            .map_err(|e| match e {
                TopicQueryError::NotFound => DeleteTopicError::TopicNotFound,
                TopicQueryError::DatabaseError(msg) => DeleteTopicError::RepositoryError(msg),
            })?;

        let actor = self.authors.resolve(command.actor_id).await?;

        match authorize_mutation(&actor, topic.author_id()) {
            MutationDecision::Allowed => {}
            MutationDecision::DeniedNotOwner => {
                tracing::warn!(
                    topic_id = topic.id,
                    actor_id = %actor.id,
                    "Removal denied: caller does not own the topic"
                );
                return Err(DeleteTopicError::NotOwner);
            }
            MutationDecision::DeniedOrphanAuthor => {
                tracing::warn!(topic_id = topic.id, "Removal denied: topic author is unknown");
                return Err(DeleteTopicError::OrphanAuthor);
            }
        }

        self.repository
            .delete_topic(topic.id)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => DeleteTopicError::TopicNotFound,
                other => DeleteTopicError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(
            topic_id = topic.id,
            actor_id = %actor.id,
            answers = topic.answers.len(),
            "Topic removed"
        );

        Ok(())
    }
}
