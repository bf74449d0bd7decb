use sea_orm::entity::prelude::*;

use crate::course::application::domain::entities::Course;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub name: String,

    pub category: String,
}

impl Model {
    pub fn to_course(&self) -> Course {
        Course {
            id: self.id,
            name: self.name.clone(),
            category: self.category.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
