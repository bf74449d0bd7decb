use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::author::adapter::outgoing::sea_orm_entity::authors::{
    Entity as AuthorEntity, Model as AuthorModel,
};
use crate::course::adapter::outgoing::sea_orm_entity::courses::{
    Column as CourseColumn, Entity as CourseEntity,
};
use crate::course::application::domain::entities::Course;
use crate::topic::application::ports::outgoing::{
    AnswerView, AuthorSummary, Page, PageRequest, SortDirection, SortField, TopicQuery,
    TopicQueryError, TopicView,
};

use super::sea_orm_entity::answers::{Column as AnswerColumn, Entity as AnswerEntity};
use super::sea_orm_entity::topics::{
    Column as TopicColumn, Entity as TopicEntity, Model as TopicModel,
};

type TopicRow = (TopicModel, Option<AuthorModel>);

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Loads courses and answers for the given rows and builds the read models, keeping row order.
    async fn assemble(&self, rows: Vec<TopicRow>) -> Result<Vec<TopicView>, TopicQueryError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let course_ids: BTreeSet<i64> = rows.iter().map(|(t, _)| t.course_id).collect();
        let topic_ids: Vec<i64> = rows.iter().map(|(t, _)| t.id).collect();

        let courses: HashMap<i64, Course> = CourseEntity::find()
            .filter(CourseColumn::Id.is_in(course_ids))
            .all(&*self.db)
            .await
            .map_err(db_error)?
            .into_iter()
            .map(|m| (m.id, m.to_course()))
            .collect();

        let mut answers: HashMap<i64, Vec<AnswerView>> = HashMap::new();
        for answer in AnswerEntity::find()
            .filter(AnswerColumn::TopicId.is_in(topic_ids))
            .order_by_asc(AnswerColumn::Id)
            .all(&*self.db)
            .await
            .map_err(db_error)?
        {
            answers
                .entry(answer.topic_id)
                .or_default()
                .push(answer.to_view());
        }

        rows.into_iter()
            .map(|(topic, author)| {
                let course = courses.get(&topic.course_id).cloned().ok_or_else(|| {
                    TopicQueryError::DatabaseError(format!(
                        "topic {} references missing course {}",
                        topic.id, topic.course_id
                    ))
                })?;
                let status = topic
                    .status()
                    .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

                Ok(TopicView {
                    id: topic.id,
                    title: topic.title,
                    message: topic.message,
                    created_at: topic.created_at.with_timezone(&Utc),
                    status,
                    author: author.as_ref().and_then(author_summary),
                    course,
                    answers: answers.remove(&topic.id).unwrap_or_default(),
                })
            })
            .collect()
    }
}

fn db_error(err: DbErr) -> TopicQueryError {
    tracing::error!(error = %err, "Topic query failed");
    TopicQueryError::DatabaseError(err.to_string())
}

fn author_summary(model: &AuthorModel) -> Option<AuthorSummary> {
    model.to_author().map(|author| AuthorSummary {
        id: author.id,
        username: author.username,
        profile: author.profile,
    })
}

fn sort_column(field: SortField) -> TopicColumn {
    match field {
        SortField::Id => TopicColumn::Id,
        SortField::Title => TopicColumn::Title,
        SortField::Message => TopicColumn::Message,
        SortField::CreatedAt => TopicColumn::CreatedAt,
        SortField::Status => TopicColumn::Status,
    }
}

fn sort_order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn get_topic(&self, topic_id: i64) -> Result<TopicView, TopicQueryError> {
        let row = TopicEntity::find_by_id(topic_id)
            .find_also_related(AuthorEntity)
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .ok_or(TopicQueryError::NotFound)?;

        self.assemble(vec![row])
            .await?
            .pop()
            .ok_or(TopicQueryError::NotFound)
    }

    async fn list_topics(&self, page: PageRequest) -> Result<Page<TopicView>, TopicQueryError> {
        let total_elements = TopicEntity::find()
            .count(&*self.db)
            .await
            .map_err(db_error)?;

        let mut select = TopicEntity::find().find_also_related(AuthorEntity);
        for order in &page.sort {
            select = select.order_by(sort_column(order.field), sort_order(order.direction));
        }

        let rows = select
            .order_by_asc(TopicColumn::Id)
            .offset(page.offset())
            .limit(page.size)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(Page {
            items: self.assemble(rows).await?,
            number: page.page,
            size: page.size,
            total_elements,
        })
    }
}
