use async_trait::async_trait;

use crate::course::application::domain::entities::Course;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CourseQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CourseQuery: Send + Sync {
    async fn find_course(&self, course_id: i64) -> Result<Option<Course>, CourseQueryError>;
}
