use async_trait::async_trait;

use crate::author::application::services::AuthorResolver;
use crate::course::application::ports::outgoing::CourseQuery;
use crate::topic::application::domain::policies::{authorize_mutation, MutationDecision};
use crate::topic::application::ports::{
    incoming::use_cases::{UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase},
    outgoing::{
        TopicQuery, TopicQueryError, TopicRepository, TopicRepositoryError, UpdateTopicData,
    },
};

#[derive(Clone)]
pub struct UpdateTopicService<Q, R, C>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
    C: CourseQuery + Send + Sync,
{
    query: Q,
    repository: R,
    courses: C,
    authors: AuthorResolver,
}

impl<Q, R, C> UpdateTopicService<Q, R, C>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
    C: CourseQuery + Send + Sync,
{
    pub fn new(query: Q, repository: R, courses: C, authors: AuthorResolver) -> Self {
        Self {
            query,
            repository,
            courses,
            authors,
        }
    }
}

#[async_trait]
impl<Q, R, C> UpdateTopicUseCase for UpdateTopicService<Q, R, C>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
    C: CourseQuery + Send + Sync,
{
    async fn execute(&self, command: UpdateTopicCommand) -> Result<(), UpdateTopicError> {
        let topic = self
            .query
            .get_topic(command.topic_id())
            .await
            .map_err(|e| match e {
                TopicQueryError::NotFound => UpdateTopicError::TopicNotFound,
                TopicQueryError::DatabaseError(msg) => UpdateTopicError::RepositoryError(msg),
            })?;

        let content = command.content();
        let course = self
            .courses
            .find_course(content.course_id())
            .await
            .map_err(|e| UpdateTopicError::RepositoryError(e.to_string()))?
            .ok_or(UpdateTopicError::CourseNotFound)?;

        let actor = self.authors.resolve(command.actor_id()).await?;

        match authorize_mutation(&actor, topic.author_id()) {
            MutationDecision::Allowed => {}
            MutationDecision::DeniedNotOwner => {
                tracing::warn!(
                    topic_id = topic.id,
                    actor_id = %actor.id,
                    "Edit denied: caller does not own the topic"
                );
                return Err(UpdateTopicError::NotOwner);
            }
            MutationDecision::DeniedOrphanAuthor => {
                tracing::warn!(topic_id = topic.id, "Edit denied: topic author is unknown");
                return Err(UpdateTopicError::OrphanAuthor);
            }
        }

        let data = UpdateTopicData {
            topic_id: topic.id,
            title: content.title().to_string(),
            message: content.message().to_string(),
            status: command.status(),
            course_id: course.id,
        };

        self.repository
            .update_topic(data)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => UpdateTopicError::TopicNotFound,
                TopicRepositoryError::DuplicateRecord => UpdateTopicError::DuplicateRecord,
                other => UpdateTopicError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(topic_id = topic.id, actor_id = %actor.id, "Topic updated");

        Ok(())
    }
}
