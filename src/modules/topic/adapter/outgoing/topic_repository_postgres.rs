use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    Set, SqlErr, TransactionTrait,
};
use std::sync::Arc;

use crate::topic::application::ports::outgoing::{
    NewTopicData, TopicRecord, TopicRepository, TopicRepositoryError, UpdateTopicData,
};

use super::sea_orm_entity::answers::{Column as AnswerColumn, Entity as AnswerEntity};
use super::sea_orm_entity::topics::{
    ActiveModel as TopicActiveModel, Entity as TopicEntity, Model as TopicModel,
};

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> TopicRepositoryError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => TopicRepositoryError::DuplicateRecord,
        _ => TopicRepositoryError::DatabaseError(err.to_string()),
    }
}

fn to_record(model: TopicModel) -> Result<TopicRecord, TopicRepositoryError> {
    model
        .to_record()
        .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn create_topic(&self, data: NewTopicData) -> Result<TopicRecord, TopicRepositoryError> {
        let active = TopicActiveModel {
            id: NotSet,
            title: Set(data.title),
            message: Set(data.message),
            status: Set(data.status.as_str().to_string()),
            author_id: Set(Some(data.author_id.value())),
            course_id: Set(data.course_id),
            created_at: Set(data.created_at.fixed_offset()),
        };

        let inserted: TopicModel = active.insert(&*self.db).await.map_err(map_db_err)?;

        to_record(inserted)
    }

    async fn update_topic(
        &self,
        data: UpdateTopicData,
    ) -> Result<TopicRecord, TopicRepositoryError> {
        let active = TopicActiveModel {
            id: Set(data.topic_id),
            title: Set(data.title),
            message: Set(data.message),
            status: Set(data.status.as_str().to_string()),
            course_id: Set(data.course_id),
            ..Default::default()
        };

        let updated = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => TopicRepositoryError::TopicNotFound,
            other => map_db_err(other),
        })?;

        to_record(updated)
    }

    async fn delete_topic(&self, topic_id: i64) -> Result<(), TopicRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        AnswerEntity::delete_many()
            .filter(AnswerColumn::TopicId.eq(topic_id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let result = TopicEntity::delete_by_id(topic_id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            txn.rollback().await.map_err(map_db_err)?;
            return Err(TopicRepositoryError::TopicNotFound);
        }

        txn.commit().await.map_err(map_db_err)?;

        Ok(())
    }
}
