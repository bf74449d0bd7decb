pub mod create_topic;
pub mod delete_topic;
pub mod get_topic;
pub mod list_topics;
pub mod update_topic;

pub use create_topic::create_topic_handler;
pub use delete_topic::delete_topic_handler;
pub use get_topic::get_topic_handler;
pub use list_topics::list_topics_handler;
pub use update_topic::update_topic_handler;

use serde::Deserialize;
use utoipa::IntoParams;

pub const TOPIC_NOT_FOUND: &str = "O tópico informado não existe";
pub const COURSE_NOT_FOUND: &str = "O curso informado não existe";
pub const AUTHOR_NOT_FOUND: &str = "O usuário informado não existe";

/// `?topic_id=` selector shared by the single-topic routes.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TopicIdQuery {
    /// Topic identifier
    pub topic_id: i64,
}
