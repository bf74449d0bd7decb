mod course_query_postgres;
pub mod sea_orm_entity;

pub use course_query_postgres::CourseQueryPostgres;
