use chrono::Utc;
use sea_orm::entity::prelude::*;

use crate::author::application::domain::entities::AuthorId;
use crate::topic::application::ports::outgoing::AnswerView;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "answers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub topic_id: i64,

    pub author_id: Option<i64>,

    #[sea_orm(column_type = "Text")]
    pub solution: String,

    pub best_answer: bool,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_view(&self) -> AnswerView {
        AnswerView {
            id: self.id,
            solution: self.solution.clone(),
            best_answer: self.best_answer,
            author_id: self.author_id.map(AuthorId::from),
            created_at: self.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::topics::Entity",
        from = "Column::TopicId",
        to = "super::topics::Column::Id",
        on_delete = "Cascade"
    )]
    Topic,
}

impl Related<super::topics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Topic.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
