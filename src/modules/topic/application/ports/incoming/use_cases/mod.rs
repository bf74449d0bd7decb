mod create_topic_use_case;
mod delete_topic_use_case;
mod get_topic_use_case;
mod list_topics_use_case;
mod topic_content;
mod update_topic_use_case;

pub use create_topic_use_case::{CreateTopicCommand, CreateTopicError, CreateTopicUseCase};
pub use delete_topic_use_case::{DeleteTopicCommand, DeleteTopicError, DeleteTopicUseCase};
pub use get_topic_use_case::{GetTopicError, GetTopicUseCase};
pub use list_topics_use_case::{ListTopicsCommand, ListTopicsCommandError, ListTopicsError, ListTopicsUseCase};
pub use topic_content::{TopicCommandError, TopicContent};
pub use update_topic_use_case::{UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase};
