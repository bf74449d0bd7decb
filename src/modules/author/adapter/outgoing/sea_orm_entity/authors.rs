use sea_orm::entity::prelude::*;

use crate::author::application::domain::entities::{Author, AuthorId, ProfileName};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,

    pub username: String,

    pub profile: String,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    /// `None` when the stored profile is not one this service knows.
    pub fn to_author(&self) -> Option<Author> {
        let profile = self.profile.parse::<ProfileName>().ok()?;
        Some(Author {
            id: AuthorId::from(self.id),
            username: self.username.clone(),
            profile,
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
