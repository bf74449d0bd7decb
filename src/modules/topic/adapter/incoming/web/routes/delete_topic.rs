use actix_web::{delete, web, HttpRequest, HttpResponse, Responder};

use crate::{
    auth::adapter::incoming::web::extractors::auth::TopicRemover,
    shared::api::{ApiResponse, HttpMessage, ProblemDetail, ProblemResponse},
    topic::application::ports::incoming::use_cases::{DeleteTopicCommand, DeleteTopicError},
    AppState,
};

use super::{TopicIdQuery, AUTHOR_NOT_FOUND, TOPIC_NOT_FOUND};

#[utoipa::path(
    delete,
    path = "/api-forum/v1/forumhub/topics/delete",
    tag = "topics",
    params(TopicIdQuery),
    responses(
        (status = 200, description = "Topic and its answers removed", body = HttpMessage),
        (status = 400, description = "Missing or malformed topic_id", body = ProblemDetail),
        (status = 401, description = "Missing or invalid access token", body = ProblemDetail),
        (status = 403, description = "Token lacks the topic:delete scope", body = ProblemDetail),
        (status = 404, description = "Topic or author not found", body = ProblemDetail),
        (status = 418, description = "Caller may not remove this topic", body = ProblemDetail),
        (status = 422, description = "Topic author no longer exists", body = ProblemDetail),
        (status = 503, description = "User service unavailable", body = ProblemDetail),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api-forum/v1/forumhub/topics/delete")]
pub async fn delete_topic_handler(
    req: HttpRequest,
    remover: TopicRemover,
    data: web::Data<AppState>,
    query: web::Query<TopicIdQuery>,
) -> impl Responder {
    let command = DeleteTopicCommand {
        topic_id: query.topic_id,
        actor_id: remover.author_id(),
    };

    match data.topic.delete.execute(command).await {
        Ok(()) => ApiResponse::acknowledged(),
        Err(err) => map_delete_topic_error(req.path(), &data, command, err),
    }
}

fn map_delete_topic_error(
    instance: &str,
    data: &AppState,
    command: DeleteTopicCommand,
    err: DeleteTopicError,
) -> HttpResponse {
    match err {
        DeleteTopicError::TopicNotFound => ProblemResponse::not_found(instance, TOPIC_NOT_FOUND),
        DeleteTopicError::AuthorNotFound => ProblemResponse::not_found(instance, AUTHOR_NOT_FOUND),
        DeleteTopicError::NotOwner => {
            ProblemResponse::insufficient_privilege(instance, data.privilege_denied_status)
        }
        DeleteTopicError::OrphanAuthor => ProblemResponse::orphan_author(instance),
        DeleteTopicError::AuthorServiceUnavailable(reason) => {
            tracing::error!(topic_id = command.topic_id, %reason, "User service unavailable");
            ProblemResponse::service_unavailable(instance)
        }
        DeleteTopicError::RepositoryError(e) => {
            tracing::error!(
                topic_id = command.topic_id,
                actor_id = %command.actor_id,
                error = %e,
                "Failed to delete topic"
            );
            ProblemResponse::internal_error(instance)
        }
    }
}
