use crate::topic::application::domain::entities::TITLE_MAX_CHARS;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopicCommandError {
    #[error("O título não pode ser vazio")]
    EmptyTitle,

    #[error("O título deve conter no máximo 200 caracteres")]
    TitleTooLong,

    #[error("A pergunta não pode ser vazia")]
    EmptyMessage,

    #[error("O curso deve ser informado")]
    MissingCourse,

    #[error("O status deve ser informado")]
    MissingStatus,
}

/// Title, message and course shared by create and edit requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicContent {
    title: String,
    message: String,
    course_id: i64,
}

impl TopicContent {
    pub fn new(
        title: Option<String>,
        message: Option<String>,
        course_id: Option<i64>,
    ) -> Result<Self, TopicCommandError> {
        let title = title
            .filter(|t| !t.trim().is_empty())
            .ok_or(TopicCommandError::EmptyTitle)?;
        if title.chars().count() > TITLE_MAX_CHARS {
            return Err(TopicCommandError::TitleTooLong);
        }

        let message = message
            .filter(|m| !m.trim().is_empty())
            .ok_or(TopicCommandError::EmptyMessage)?;

        let course_id = course_id.ok_or(TopicCommandError::MissingCourse)?;

        Ok(Self {
            title,
            message,
            course_id,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn course_id(&self) -> i64 {
        self.course_id
    }
}
