use actix_web::{put, web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    auth::adapter::incoming::web::extractors::auth::TopicEditor,
    shared::api::{ApiResponse, HttpMessage, ProblemDetail, ProblemResponse},
    topic::application::{
        domain::entities::TopicStatus,
        ports::incoming::use_cases::{UpdateTopicCommand, UpdateTopicError},
    },
    AppState,
};

use super::{TopicIdQuery, AUTHOR_NOT_FOUND, COURSE_NOT_FOUND, TOPIC_NOT_FOUND};

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTopicRequest {
    #[schema(example = "Dúvida na utilização do Feign Client")]
    pub title: Option<String>,
    #[schema(example = "Como utilizar o Feign Client para integração de serviços?")]
    pub message: Option<String>,
    pub status: Option<TopicStatus>,
    #[schema(example = 1)]
    pub course_id: Option<i64>,
}

#[utoipa::path(
    put,
    path = "/api-forum/v1/forumhub/topics",
    tag = "topics",
    params(TopicIdQuery),
    request_body = UpdateTopicRequest,
    responses(
        (status = 200, description = "Topic updated", body = HttpMessage),
        (status = 400, description = "Validation failed or unreadable body", body = ProblemDetail),
        (status = 401, description = "Missing or invalid access token", body = ProblemDetail),
        (status = 403, description = "Token lacks the topic:edit scope", body = ProblemDetail),
        (status = 404, description = "Topic, course or author not found", body = ProblemDetail),
        (status = 418, description = "Caller may not edit this topic", body = ProblemDetail),
        (status = 422, description = "Topic author no longer exists", body = ProblemDetail),
        (status = 503, description = "User service unavailable", body = ProblemDetail),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api-forum/v1/forumhub/topics")]
pub async fn update_topic_handler(
    req: HttpRequest,
    editor: TopicEditor,
    data: web::Data<AppState>,
    query: web::Query<TopicIdQuery>,
    payload: web::Json<UpdateTopicRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match UpdateTopicCommand::new(
        query.topic_id,
        editor.author_id(),
        payload.title,
        payload.message,
        payload.status,
        payload.course_id,
    ) {
        Ok(cmd) => cmd,
        Err(err) => {
            tracing::warn!(topic_id = query.topic_id, reason = %err, "Rejected topic edit");
            return ProblemResponse::validation(req.path(), &err.to_string());
        }
    };

    match data.topic.update.execute(command).await {
        Ok(()) => ApiResponse::acknowledged(),
        Err(err) => map_update_topic_error(req.path(), &data, query.topic_id, err),
    }
}

fn map_update_topic_error(
    instance: &str,
    data: &AppState,
    topic_id: i64,
    err: UpdateTopicError,
) -> HttpResponse {
    match err {
        UpdateTopicError::TopicNotFound => ProblemResponse::not_found(instance, TOPIC_NOT_FOUND),
        UpdateTopicError::CourseNotFound => ProblemResponse::not_found(instance, COURSE_NOT_FOUND),
        UpdateTopicError::AuthorNotFound => ProblemResponse::not_found(instance, AUTHOR_NOT_FOUND),
        UpdateTopicError::NotOwner => {
            ProblemResponse::insufficient_privilege(instance, data.privilege_denied_status)
        }
        UpdateTopicError::OrphanAuthor => ProblemResponse::orphan_author(instance),
        UpdateTopicError::AuthorServiceUnavailable(reason) => {
            tracing::error!(topic_id, %reason, "User service unavailable");
            ProblemResponse::service_unavailable(instance)
        }
        UpdateTopicError::DuplicateRecord => ProblemResponse::conflict(instance),
        UpdateTopicError::RepositoryError(e) => {
            tracing::error!(topic_id, error = %e, "Failed to update topic");
            ProblemResponse::internal_error(instance)
        }
    }
}
