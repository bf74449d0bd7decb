use actix_web::{get, web, HttpRequest, HttpResponse, Responder};

use crate::{
    shared::api::{ApiResponse, ProblemDetail, ProblemResponse},
    topic::application::ports::{incoming::use_cases::GetTopicError, outgoing::TopicView},
    AppState,
};

use super::{TopicIdQuery, TOPIC_NOT_FOUND};

#[utoipa::path(
    get,
    path = "/api-forum/v1/forumhub/topics",
    tag = "topics",
    params(TopicIdQuery),
    responses(
        (status = 200, description = "Topic with author, course and answers", body = TopicView),
        (status = 400, description = "Missing or malformed topic_id", body = ProblemDetail),
        (status = 404, description = "Topic not found", body = ProblemDetail),
    )
)]
#[get("/api-forum/v1/forumhub/topics")]
pub async fn get_topic_handler(
    req: HttpRequest,
    data: web::Data<AppState>,
    query: web::Query<TopicIdQuery>,
) -> impl Responder {
    match data.topic.get_single.execute(query.topic_id).await {
        Ok(topic) => ApiResponse::success(topic),
        Err(err) => map_get_topic_error(req.path(), query.topic_id, err),
    }
}

fn map_get_topic_error(instance: &str, topic_id: i64, err: GetTopicError) -> HttpResponse {
    match err {
        GetTopicError::NotFound => {
            tracing::warn!(topic_id, "Topic not found");
            ProblemResponse::not_found(instance, TOPIC_NOT_FOUND)
        }
        GetTopicError::RepositoryError(e) => {
            tracing::error!(topic_id, error = %e, "Failed to load topic");
            ProblemResponse::internal_error(instance)
        }
    }
}
