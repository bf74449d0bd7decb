use chrono::Utc;
use sea_orm::entity::prelude::*;

use crate::author::adapter::outgoing::sea_orm_entity::authors;
use crate::author::application::domain::entities::AuthorId;
use crate::course::adapter::outgoing::sea_orm_entity::courses;
use crate::topic::application::domain::entities::{TopicStatus, UnknownTopicStatus};
use crate::topic::application::ports::outgoing::TopicRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub message: String,

    pub status: String,

    pub author_id: Option<i64>,

    pub course_id: i64,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn status(&self) -> Result<TopicStatus, UnknownTopicStatus> {
        self.status.parse()
    }

    pub fn to_record(&self) -> Result<TopicRecord, UnknownTopicStatus> {
        Ok(TopicRecord {
            id: self.id,
            title: self.title.clone(),
            message: self.message.clone(),
            status: self.status()?,
            author_id: self.author_id.map(AuthorId::from),
            course_id: self.course_id,
            created_at: self.created_at.with_timezone(&Utc),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::author::adapter::outgoing::sea_orm_entity::authors::Entity",
        from = "Column::AuthorId",
        to = "crate::author::adapter::outgoing::sea_orm_entity::authors::Column::Id",
        on_delete = "SetNull"
    )]
    Author,

    #[sea_orm(
        belongs_to = "crate::course::adapter::outgoing::sea_orm_entity::courses::Entity",
        from = "Column::CourseId",
        to = "crate::course::adapter::outgoing::sea_orm_entity::courses::Column::Id",
        on_delete = "Restrict"
    )]
    Course,

    #[sea_orm(has_many = "super::answers::Entity")]
    Answers,
}

impl Related<authors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::answers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Answers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
