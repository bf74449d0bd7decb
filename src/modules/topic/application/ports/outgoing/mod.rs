pub mod topic_query;
pub mod topic_repository;

pub use topic_query::{
    AnswerView, AuthorSummary, Page, PageRequest, SortDirection, SortField, SortOrder,
    SortParseError, TopicQuery, TopicQueryError, TopicView, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
    MAX_ROW_OFFSET,
};
pub use topic_repository::{
    NewTopicData, TopicRecord, TopicRepository, TopicRepositoryError, UpdateTopicData,
};
