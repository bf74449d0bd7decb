use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Course {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Spring Cloud")]
    pub name: String,
    #[schema(example = "Programação")]
    pub category: String,
}
