use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::author::application::domain::entities::{Author, AuthorId, ProfileName};
use crate::author::application::ports::outgoing::{
    AuthorClient, AuthorClientError, AuthorRepository, AuthorRepositoryError,
};
use crate::author::application::services::AuthorResolver;
use crate::course::application::domain::entities::Course;
use crate::course::application::ports::outgoing::{CourseQuery, CourseQueryError};
use crate::topic::application::domain::entities::TopicStatus;
use crate::topic::application::ports::outgoing::{
    AnswerView, AuthorSummary, NewTopicData, Page, PageRequest, SortDirection, SortField,
    TopicQuery, TopicQueryError, TopicRecord, TopicRepository, TopicRepositoryError, TopicView,
    UpdateTopicData,
};

#[derive(Debug, Clone)]
struct StoredAnswer {
    id: i64,
    topic_id: i64,
    solution: String,
    created_at: DateTime<Utc>,
}

#[derive(Default)]
struct ForumState {
    topics: BTreeMap<i64, TopicRecord>,
    answers: Vec<StoredAnswer>,
    courses: BTreeMap<i64, Course>,
    user_service: HashMap<i64, Author>,
    mirror: HashMap<i64, Author>,
    next_topic_id: i64,
    next_answer_id: i64,
    user_service_down: bool,
}

/// In-memory stand-in for the database and the user service.
///
/// Every clone shares the same state, so one instance can back all ports of
/// a service graph while the test inspects what happened.
#[derive(Clone, Default)]
pub struct InMemoryForum {
    state: Arc<Mutex<ForumState>>,
}

pub fn fixed_time(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap() + Duration::minutes(minutes)
}

impl InMemoryForum {
    fn lock(&self) -> MutexGuard<'_, ForumState> {
        self.state.lock().unwrap()
    }

    pub fn with_course(self, id: i64, name: &str) -> Self {
        self.lock().courses.insert(
            id,
            Course {
                id,
                name: name.to_string(),
                category: "Programação".to_string(),
            },
        );
        self
    }

    /// Registers the user with the user service and in the local mirror.
    pub fn with_user(self, id: i64, username: &str, profile: ProfileName) -> Self {
        let author = Author {
            id: AuthorId::from(id),
            username: username.to_string(),
            profile,
        };
        {
            let mut state = self.lock();
            state.user_service.insert(id, author.clone());
            state.mirror.insert(id, author);
        }
        self
    }

    pub fn seed_topic(
        &self,
        title: &str,
        message: &str,
        status: TopicStatus,
        author_id: Option<i64>,
        course_id: i64,
    ) -> i64 {
        let mut state = self.lock();
        state.next_topic_id += 1;
        let id = state.next_topic_id;
        state.topics.insert(
            id,
            TopicRecord {
                id,
                title: title.to_string(),
                message: message.to_string(),
                status,
                author_id: author_id.map(AuthorId::from),
                course_id,
                created_at: fixed_time(id),
            },
        );
        id
    }

    pub fn seed_answer(&self, topic_id: i64, solution: &str) -> i64 {
        let mut state = self.lock();
        state.next_answer_id += 1;
        let id = state.next_answer_id;
        state.answers.push(StoredAnswer {
            id,
            topic_id,
            solution: solution.to_string(),
            created_at: fixed_time(100 + id),
        });
        id
    }

    /// Drops the mirrored author row, leaving their topics orphaned.
    pub fn forget_author(&self, id: i64) {
        self.lock().mirror.remove(&id);
    }

    pub fn set_user_service_down(&self, down: bool) {
        self.lock().user_service_down = down;
    }

    pub fn topic(&self, id: i64) -> Option<TopicRecord> {
        self.lock().topics.get(&id).cloned()
    }

    pub fn topic_count(&self) -> usize {
        self.lock().topics.len()
    }

    pub fn answer_count(&self, topic_id: i64) -> usize {
        self.lock()
            .answers
            .iter()
            .filter(|a| a.topic_id == topic_id)
            .count()
    }

    pub fn mirrored_author(&self, id: i64) -> Option<Author> {
        self.lock().mirror.get(&id).cloned()
    }

    pub fn author_resolver(&self) -> AuthorResolver {
        AuthorResolver::new(Arc::new(self.clone()), Arc::new(self.clone()))
    }

    fn view_of(state: &ForumState, topic: &TopicRecord) -> Result<TopicView, TopicQueryError> {
        let author = topic
            .author_id
            .and_then(|id| state.mirror.get(&id.value()))
            .map(|a| AuthorSummary {
                id: a.id,
                username: a.username.clone(),
                profile: a.profile,
            });

        let course = state
            .courses
            .get(&topic.course_id)
            .cloned()
            .ok_or_else(|| TopicQueryError::DatabaseError("dangling course".to_string()))?;

        let answers = state
            .answers
            .iter()
            .filter(|a| a.topic_id == topic.id)
            .map(|a| AnswerView {
                id: a.id,
                solution: a.solution.clone(),
                best_answer: false,
                author_id: None,
                created_at: a.created_at,
            })
            .collect();

        Ok(TopicView {
            id: topic.id,
            title: topic.title.clone(),
            message: topic.message.clone(),
            created_at: topic.created_at,
            status: topic.status,
            author,
            course,
            answers,
        })
    }
}

fn compare(a: &TopicRecord, b: &TopicRecord, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Title => a.title.cmp(&b.title),
        SortField::Message => a.message.cmp(&b.message),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::Status => a.status.as_str().cmp(b.status.as_str()),
    }
}

#[async_trait]
impl TopicRepository for InMemoryForum {
    async fn create_topic(&self, data: NewTopicData) -> Result<TopicRecord, TopicRepositoryError> {
        let mut state = self.lock();
        state.next_topic_id += 1;
        let record = TopicRecord {
            id: state.next_topic_id,
            title: data.title,
            message: data.message,
            status: data.status,
            author_id: Some(data.author_id),
            course_id: data.course_id,
            created_at: data.created_at,
        };
        state.topics.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update_topic(
        &self,
        data: UpdateTopicData,
    ) -> Result<TopicRecord, TopicRepositoryError> {
        let mut state = self.lock();
        let topic = state
            .topics
            .get_mut(&data.topic_id)
            .ok_or(TopicRepositoryError::TopicNotFound)?;

        topic.title = data.title;
        topic.message = data.message;
        topic.status = data.status;
        topic.course_id = data.course_id;

        Ok(topic.clone())
    }

    async fn delete_topic(&self, topic_id: i64) -> Result<(), TopicRepositoryError> {
        let mut state = self.lock();
        if state.topics.remove(&topic_id).is_none() {
            return Err(TopicRepositoryError::TopicNotFound);
        }
        state.answers.retain(|a| a.topic_id != topic_id);
        Ok(())
    }
}

#[async_trait]
impl TopicQuery for InMemoryForum {
    async fn get_topic(&self, topic_id: i64) -> Result<TopicView, TopicQueryError> {
        let state = self.lock();
        let topic = state.topics.get(&topic_id).ok_or(TopicQueryError::NotFound)?;
        Self::view_of(&state, topic)
    }

    async fn list_topics(&self, page: PageRequest) -> Result<Page<TopicView>, TopicQueryError> {
        let state = self.lock();

        let mut topics: Vec<&TopicRecord> = state.topics.values().collect();
        topics.sort_by(|a, b| {
            page.sort
                .iter()
                .map(|order| match order.direction {
                    SortDirection::Asc => compare(a, b, order.field),
                    SortDirection::Desc => compare(b, a, order.field),
                })
                .find(|o| *o != Ordering::Equal)
                .unwrap_or_else(|| a.id.cmp(&b.id))
        });

        let items = topics
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.size as usize)
            .map(|t| Self::view_of(&state, t))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page {
            items,
            number: page.page,
            size: page.size,
            total_elements: state.topics.len() as u64,
        })
    }
}

#[async_trait]
impl CourseQuery for InMemoryForum {
    async fn find_course(&self, course_id: i64) -> Result<Option<Course>, CourseQueryError> {
        Ok(self.lock().courses.get(&course_id).cloned())
    }
}

#[async_trait]
impl AuthorClient for InMemoryForum {
    async fn get_author_by_id(&self, id: AuthorId) -> Result<Author, AuthorClientError> {
        let state = self.lock();
        if state.user_service_down {
            return Err(AuthorClientError::ServiceUnavailable(
                "connection refused".to_string(),
            ));
        }
        state
            .user_service
            .get(&id.value())
            .cloned()
            .ok_or(AuthorClientError::NotFound)
    }
}

#[async_trait]
impl AuthorRepository for InMemoryForum {
    async fn upsert_author(&self, author: &Author) -> Result<(), AuthorRepositoryError> {
        self.lock().mirror.insert(author.id.value(), author.clone());
        Ok(())
    }
}
