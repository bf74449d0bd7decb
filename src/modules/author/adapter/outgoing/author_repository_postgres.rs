use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;

use crate::author::application::domain::entities::Author;
use crate::author::application::ports::outgoing::{AuthorRepository, AuthorRepositoryError};

use super::sea_orm_entity::authors::{ActiveModel as AuthorActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct AuthorRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AuthorRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthorRepository for AuthorRepositoryPostgres {
    async fn upsert_author(&self, author: &Author) -> Result<(), AuthorRepositoryError> {
        let active = AuthorActiveModel {
            id: Set(author.id.value()),
            username: Set(author.username.clone()),
            profile: Set(author.profile.as_str().to_string()),
            updated_at: Set(Utc::now().fixed_offset()),
        };

        Entity::insert(active)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([Column::Username, Column::Profile, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(|e| AuthorRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
