use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::author::application::domain::entities::{AuthorId, ProfileName};
use crate::course::application::domain::entities::Course;
use crate::topic::application::domain::entities::TopicStatus;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;
/// Largest row offset the database driver binds as a signed 64-bit value.
pub const MAX_ROW_OFFSET: u64 = i64::MAX as u64;

// ─── Read models ───────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AuthorSummary {
    #[schema(value_type = i64, example = 1)]
    pub id: AuthorId,
    #[schema(example = "Jose")]
    pub username: String,
    pub profile: ProfileName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnswerView {
    pub id: i64,
    pub solution: String,
    pub best_answer: bool,
    #[schema(value_type = Option<i64>)]
    pub author_id: Option<AuthorId>,
    pub created_at: DateTime<Utc>,
}

/// Topic as shown to readers. `author` is `None` when the topic's author is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopicView {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Dúvida na utilização do Feign Client")]
    pub title: String,
    #[schema(example = "Como utilizar o Feign Client para integração de serviços?")]
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub status: TopicStatus,
    pub author: Option<AuthorSummary>,
    pub course: Course,
    pub answers: Vec<AnswerView>,
}

impl TopicView {
    pub fn author_id(&self) -> Option<AuthorId> {
        self.author.as_ref().map(|a| a.id)
    }
}

// ─── Sorting ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Title,
    Message,
    CreatedAt,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortParseError {
    #[error("Campo de ordenação desconhecido: {0}")]
    UnknownField(String),

    #[error("Direção de ordenação desconhecida: {0}")]
    UnknownDirection(String),
}

impl FromStr for SortField {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "id" => Ok(SortField::Id),
            "title" => Ok(SortField::Title),
            "message" => Ok(SortField::Message),
            "createdAt" | "created_at" => Ok(SortField::CreatedAt),
            "status" => Ok(SortField::Status),
            other => Err(SortParseError::UnknownField(other.to_string())),
        }
    }
}

impl FromStr for SortDirection {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(SortParseError::UnknownDirection(s.trim().to_string())),
        }
    }
}

/// Parses `field` or `field,asc|desc`.
impl FromStr for SortOrder {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(2, ',');
        let field = parts.next().unwrap_or_default().parse::<SortField>()?;
        let direction = match parts.next() {
            Some(dir) if !dir.trim().is_empty() => dir.parse::<SortDirection>()?,
            _ => SortDirection::Asc,
        };

        Ok(SortOrder { field, direction })
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = match self.field {
            SortField::Id => "id",
            SortField::Title => "title",
            SortField::Message => "message",
            SortField::CreatedAt => "createdAt",
            SortField::Status => "status",
        };
        let direction = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{field},{direction}")
    }
}

// ─── Paging ────────────────────────────────────────────────

/// Zero-based page request. An empty `sort` means insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub sort: Vec<SortOrder>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: Vec::new(),
        }
    }
}

impl PageRequest {
    /// Rows to skip, never above [`MAX_ROW_OFFSET`].
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size).min(MAX_ROW_OFFSET)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            0
        } else {
            self.total_elements.div_ceil(self.size)
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Topic not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TopicQuery: Send + Sync {
    async fn get_topic(&self, topic_id: i64) -> Result<TopicView, TopicQueryError>;

    async fn list_topics(&self, page: PageRequest) -> Result<Page<TopicView>, TopicQueryError>;
}
