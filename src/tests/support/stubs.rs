use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::author::application::domain::entities::{AuthorId, ProfileName};
use crate::course::application::domain::entities::Course;
use crate::tests::support::fakes::fixed_time;
use crate::topic::application::domain::entities::TopicStatus;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicCommand, CreateTopicError, CreateTopicUseCase, DeleteTopicCommand,
    DeleteTopicError, DeleteTopicUseCase, GetTopicError, GetTopicUseCase, ListTopicsCommand,
    ListTopicsError, ListTopicsUseCase, UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase,
};
use crate::topic::application::ports::outgoing::{
    AuthorSummary, Page, PageRequest, TopicRecord, TopicView,
};

/// Topic owned by Jose (id 1, BASIC) in course 1.
pub fn sample_topic_view(id: i64) -> TopicView {
    TopicView {
        id,
        title: "Dúvida na utilização do Feign Client".to_string(),
        message: "Como utilizar o Feign Client para integração de serviços?".to_string(),
        created_at: fixed_time(id),
        status: TopicStatus::Unsolved,
        author: Some(AuthorSummary {
            id: AuthorId::from(1),
            username: "Jose".to_string(),
            profile: ProfileName::Basic,
        }),
        course: Course {
            id: 1,
            name: "Spring Cloud".to_string(),
            category: "Programação".to_string(),
        },
        answers: vec![],
    }
}

// ──────────────────────────────────────────────────────────
// Create
// ──────────────────────────────────────────────────────────

/// Succeeds with a record echoing the command unless built with `failing`.
#[derive(Default, Clone)]
pub struct StubCreateTopicUseCase {
    failure: Option<CreateTopicError>,
}

impl StubCreateTopicUseCase {
    pub fn failing(err: CreateTopicError) -> Self {
        Self { failure: Some(err) }
    }
}

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(&self, command: CreateTopicCommand) -> Result<TopicRecord, CreateTopicError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        let content = command.content();
        Ok(TopicRecord {
            id: 1,
            title: content.title().to_string(),
            message: content.message().to_string(),
            status: TopicStatus::Unsolved,
            author_id: Some(command.author_id()),
            course_id: content.course_id(),
            created_at: fixed_time(0),
        })
    }
}

// ──────────────────────────────────────────────────────────
// Get single
// ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct StubGetTopicUseCase {
    result: Result<TopicView, GetTopicError>,
}

impl StubGetTopicUseCase {
    pub fn found(view: TopicView) -> Self {
        Self { result: Ok(view) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetTopicError::NotFound),
        }
    }
}

#[async_trait]
impl GetTopicUseCase for StubGetTopicUseCase {
    async fn execute(&self, _topic_id: i64) -> Result<TopicView, GetTopicError> {
        self.result.clone()
    }
}

// ──────────────────────────────────────────────────────────
// List
// ──────────────────────────────────────────────────────────

/// Pages over a fixed list in the given order and records the last request.
#[derive(Clone, Default)]
pub struct StubListTopicsUseCase {
    topics: Vec<TopicView>,
    failure: Option<String>,
    seen: Arc<Mutex<Option<PageRequest>>>,
}

impl StubListTopicsUseCase {
    pub fn with_topics(topics: Vec<TopicView>) -> Self {
        Self {
            topics,
            ..Default::default()
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            failure: Some(msg.to_string()),
            ..Default::default()
        }
    }

    pub fn last_request(&self) -> Option<PageRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ListTopicsUseCase for StubListTopicsUseCase {
    async fn execute(
        &self,
        command: ListTopicsCommand,
    ) -> Result<Page<TopicView>, ListTopicsError> {
        let request = command.page_request().clone();
        *self.seen.lock().unwrap() = Some(request.clone());

        if let Some(msg) = &self.failure {
            return Err(ListTopicsError::RepositoryError(msg.clone()));
        }

        let items = self
            .topics
            .iter()
            .skip(request.offset() as usize)
            .take(request.size as usize)
            .cloned()
            .collect();

        Ok(Page {
            items,
            number: request.page,
            size: request.size,
            total_elements: self.topics.len() as u64,
        })
    }
}

// ──────────────────────────────────────────────────────────
// Update / Delete
// ──────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubUpdateTopicUseCase {
    failure: Option<UpdateTopicError>,
}

impl StubUpdateTopicUseCase {
    pub fn failing(err: UpdateTopicError) -> Self {
        Self { failure: Some(err) }
    }
}

#[async_trait]
impl UpdateTopicUseCase for StubUpdateTopicUseCase {
    async fn execute(&self, _command: UpdateTopicCommand) -> Result<(), UpdateTopicError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteTopicUseCase {
    failure: Option<DeleteTopicError>,
}

impl StubDeleteTopicUseCase {
    pub fn failing(err: DeleteTopicError) -> Self {
        Self { failure: Some(err) }
    }
}

#[async_trait]
impl DeleteTopicUseCase for StubDeleteTopicUseCase {
    async fn execute(&self, _command: DeleteTopicCommand) -> Result<(), DeleteTopicError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
