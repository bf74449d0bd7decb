mod author_client;
mod author_repository;

pub use author_client::{AuthorClient, AuthorClientError};
pub use author_repository::{AuthorRepository, AuthorRepositoryError};
