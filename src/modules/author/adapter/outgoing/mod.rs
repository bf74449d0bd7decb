mod author_repository_postgres;
pub mod sea_orm_entity;
pub mod user_service;

pub use author_repository_postgres::AuthorRepositoryPostgres;
