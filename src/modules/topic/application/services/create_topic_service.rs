use async_trait::async_trait;
use chrono::Utc;

use crate::author::application::services::AuthorResolver;
use crate::course::application::ports::outgoing::CourseQuery;
use crate::topic::application::domain::entities::TopicStatus;
use crate::topic::application::ports::{
    incoming::use_cases::{CreateTopicCommand, CreateTopicError, CreateTopicUseCase},
    outgoing::{NewTopicData, TopicRecord, TopicRepository, TopicRepositoryError},
};

#[derive(Clone)]
pub struct CreateTopicService<R, C>
where
    R: TopicRepository + Send + Sync,
    C: CourseQuery + Send + Sync,
{
    repository: R,
    courses: C,
    authors: AuthorResolver,
}

impl<R, C> CreateTopicService<R, C>
where
    R: TopicRepository + Send + Sync,
    C: CourseQuery + Send + Sync,
{
    pub fn new(repository: R, courses: C, authors: AuthorResolver) -> Self {
        Self {
            repository,
            courses,
            authors,
        }
    }
}

#[async_trait]
impl<R, C> CreateTopicUseCase for CreateTopicService<R, C>
where
    R: TopicRepository + Send + Sync,
    C: CourseQuery + Send + Sync,
{
    async fn execute(&self, command: CreateTopicCommand) -> Result<TopicRecord, CreateTopicError> {
        let author = self.authors.resolve(command.author_id()).await?;

        let content = command.content();
        let course = self
            .courses
            .find_course(content.course_id())
            .await
            .map_err(|e| CreateTopicError::RepositoryError(e.to_string()))?
            .ok_or(CreateTopicError::CourseNotFound)?;

        let data = NewTopicData {
            title: content.title().to_string(),
            message: content.message().to_string(),
            status: TopicStatus::Unsolved,
            author_id: author.id,
            course_id: course.id,
            created_at: Utc::now(),
        };

        let record = self
            .repository
            .create_topic(data)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::DuplicateRecord => CreateTopicError::DuplicateRecord,
                other => CreateTopicError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(topic_id = record.id, author_id = %author.id, "Topic created");

        Ok(record)
    }
}
