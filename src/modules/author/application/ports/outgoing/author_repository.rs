use async_trait::async_trait;

use crate::author::application::domain::entities::Author;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthorRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Local mirror of the authors seen through the user service.
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn upsert_author(&self, author: &Author) -> Result<(), AuthorRepositoryError>;
}
