use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedCaller,
    shared::api::{ApiResponse, HttpMessage, ProblemDetail, ProblemResponse},
    topic::application::ports::incoming::use_cases::{CreateTopicCommand, CreateTopicError},
    AppState,
};

use super::{AUTHOR_NOT_FOUND, COURSE_NOT_FOUND};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTopicRequest {
    #[schema(example = "Dúvida na utilização do Feign Client")]
    pub title: Option<String>,
    #[schema(example = "Como utilizar o Feign Client para integração de serviços?")]
    pub message: Option<String>,
    #[schema(example = 1)]
    pub course_id: Option<i64>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api-forum/v1/forumhub/topics/create",
    tag = "topics",
    request_body = CreateTopicRequest,
    responses(
        (status = 201, description = "Topic created", body = HttpMessage),
        (status = 400, description = "Validation failed or unreadable body", body = ProblemDetail),
        (status = 401, description = "Missing or invalid access token", body = ProblemDetail),
        (status = 404, description = "Course or author not found", body = ProblemDetail),
        (status = 503, description = "User service unavailable", body = ProblemDetail),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api-forum/v1/forumhub/topics/create")]
pub async fn create_topic_handler(
    req: HttpRequest,
    caller: AuthenticatedCaller,
    data: web::Data<AppState>,
    payload: web::Json<CreateTopicRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match CreateTopicCommand::new(
        caller.author_id,
        payload.title,
        payload.message,
        payload.course_id,
    ) {
        Ok(cmd) => cmd,
        Err(err) => {
            tracing::warn!(author_id = %caller.author_id, reason = %err, "Rejected topic creation");
            return ProblemResponse::validation(req.path(), &err.to_string());
        }
    };

    match data.topic.create.execute(command).await {
        Ok(_) => ApiResponse::created(),
        Err(err) => map_create_topic_error(req.path(), err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_topic_error(instance: &str, err: CreateTopicError) -> HttpResponse {
    match err {
        CreateTopicError::CourseNotFound => {
            tracing::warn!(path = instance, "Topic references an unknown course");
            ProblemResponse::not_found(instance, COURSE_NOT_FOUND)
        }
        CreateTopicError::AuthorNotFound => {
            tracing::warn!(path = instance, "Caller is unknown to the user service");
            ProblemResponse::not_found(instance, AUTHOR_NOT_FOUND)
        }
        CreateTopicError::AuthorServiceUnavailable(reason) => {
            tracing::error!(path = instance, %reason, "User service unavailable");
            ProblemResponse::service_unavailable(instance)
        }
        CreateTopicError::DuplicateRecord => ProblemResponse::conflict(instance),
        CreateTopicError::RepositoryError(e) => {
            tracing::error!(path = instance, error = %e, "Failed to create topic");
            ProblemResponse::internal_error(instance)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};

    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder,
        auth_helper::{bearer_for, test_token_verifier},
        stubs::StubCreateTopicUseCase,
    };

    const PATH: &str = "/api-forum/v1/forumhub/topics/create";

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    async fn call(
        state: web::Data<AppState>,
        bearer: Option<String>,
        body: serde_json::Value,
    ) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(test_token_verifier()))
                .app_data(crate::shared::api::custom_json_config())
                .service(create_topic_handler),
        )
        .await;

        let mut req = test::TestRequest::post().uri(PATH).set_json(body);
        if let Some(bearer) = bearer {
            req = req.insert_header(("Authorization", bearer));
        }

        test::call_service(&app, req.to_request()).await
    }

    fn feign_topic() -> serde_json::Value {
        serde_json::json!({
            "title": "Dúvida na utilização do Feign Client",
            "message": "Como utilizar o Feign Client para integração de serviços?",
            "course_id": 1
        })
    }

    #[actix_web::test]
    async fn create_topic_success_returns_created_ack() {
        let state = TestAppStateBuilder::default().build();

        let resp = call(state, Some(bearer_for(1, &[])), feign_topic()).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let json = read_json(resp).await;
        assert_eq!(json["message"], "HttpStatusCode OK");
    }

    #[actix_web::test]
    async fn create_topic_blank_title_returns_bad_request() {
        let state = TestAppStateBuilder::default().build();

        let resp = call(
            state,
            Some(bearer_for(1, &[])),
            serde_json::json!({ "title": "   ", "message": "m", "course_id": 1 }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = read_json(resp).await;
        assert_eq!(json["title"], "Erro de restrição");
        assert_eq!(json["detail"], "O título não pode ser vazio");
        assert_eq!(json["instance"], PATH);
    }

    #[actix_web::test]
    async fn create_topic_missing_course_returns_bad_request() {
        let state = TestAppStateBuilder::default().build();

        let resp = call(
            state,
            Some(bearer_for(1, &[])),
            serde_json::json!({ "title": "t", "message": "m" }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = read_json(resp).await;
        assert_eq!(json["detail"], "O curso deve ser informado");
    }

    #[actix_web::test]
    async fn create_topic_without_token_returns_unauthorized() {
        let state = TestAppStateBuilder::default().build();

        let resp = call(state, None, feign_topic()).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn create_topic_unknown_course_returns_not_found() {
        let state = TestAppStateBuilder::default()
            .with_create(StubCreateTopicUseCase::failing(
                CreateTopicError::CourseNotFound,
            ))
            .build();

        let resp = call(state, Some(bearer_for(1, &[])), feign_topic()).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json = read_json(resp).await;
        assert_eq!(json["detail"], "O curso informado não existe");
    }

    #[actix_web::test]
    async fn create_topic_user_service_down_returns_unavailable() {
        let state = TestAppStateBuilder::default()
            .with_create(StubCreateTopicUseCase::failing(
                CreateTopicError::AuthorServiceUnavailable("connection refused".to_string()),
            ))
            .build();

        let resp = call(state, Some(bearer_for(1, &[])), feign_topic()).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = read_json(resp).await;
        assert_eq!(json["detail"], "O serviço solicitado está fora do ar");
    }

    #[actix_web::test]
    async fn create_topic_repository_error_returns_internal_error() {
        let state = TestAppStateBuilder::default()
            .with_create(StubCreateTopicUseCase::failing(
                CreateTopicError::RepositoryError("db down".to_string()),
            ))
            .build();

        let resp = call(state, Some(bearer_for(1, &[])), feign_topic()).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
