use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    shared::api::{ApiResponse, ProblemDetail, ProblemResponse},
    topic::application::ports::{
        incoming::use_cases::{ListTopicsCommand, ListTopicsError},
        outgoing::{Page, TopicView},
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TopicPageResponse {
    pub topics: Vec<TopicView>,
    pub page: PageMetadata,
}

impl From<Page<TopicView>> for TopicPageResponse {
    fn from(page: Page<TopicView>) -> Self {
        let metadata = PageMetadata {
            size: page.size,
            total_elements: page.total_elements,
            total_pages: page.total_pages(),
            number: page.number,
        };

        Self {
            topics: page.items,
            page: metadata,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/api-forum/v1/forumhub/topics/listAll",
    tag = "topics",
    params(
        ("page" = Option<u64>, Query, description = "Zero-based page number"),
        ("size" = Option<u64>, Query, description = "Page size, at most 100"),
        ("sort" = Option<Vec<String>>, Query, description = "field[,asc|desc]; repeatable"),
    ),
    responses(
        (status = 200, description = "One page of topics", body = TopicPageResponse),
        (status = 400, description = "Invalid paging or sort parameter", body = ProblemDetail),
    )
)]
#[get("/api-forum/v1/forumhub/topics/listAll")]
pub async fn list_topics_handler(
    req: HttpRequest,
    data: web::Data<AppState>,
    query: web::Query<Vec<(String, String)>>,
) -> impl Responder {
    let command = match ListTopicsCommand::from_query_pairs(&query) {
        Ok(cmd) => cmd,
        Err(err) => {
            tracing::warn!(query = %req.query_string(), reason = %err, "Rejected topic listing");
            return ProblemResponse::invalid_parameter(req.path(), &err.to_string());
        }
    };

    match data.topic.list.execute(command).await {
        Ok(page) => ApiResponse::success(TopicPageResponse::from(page)),
        Err(err) => map_list_topics_error(req.path(), err),
    }
}

fn map_list_topics_error(instance: &str, err: ListTopicsError) -> HttpResponse {
    match err {
        ListTopicsError::RepositoryError(e) => {
            tracing::error!(error = %e, "Failed to list topics");
            ProblemResponse::internal_error(instance)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::shared::api::custom_query_config;
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder,
        stubs::{sample_topic_view, StubListTopicsUseCase},
    };

    async fn call(state: web::Data<AppState>, uri: &str) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_query_config())
                .service(list_topics_handler),
        )
        .await;

        test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await
    }

    #[actix_web::test]
    async fn list_topics_returns_page_envelope() {
        let stub = StubListTopicsUseCase::with_topics(vec![
            sample_topic_view(1),
            sample_topic_view(2),
        ]);
        let state = TestAppStateBuilder::default().with_list(stub.clone()).build();

        let resp = call(state, "/api-forum/v1/forumhub/topics/listAll?size=1&page=1").await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["topics"].as_array().unwrap().len(), 1);
        assert_eq!(json["topics"][0]["id"], 2);
        assert_eq!(json["page"]["size"], 1);
        assert_eq!(json["page"]["number"], 1);
        assert_eq!(json["page"]["totalElements"], 2);
        assert_eq!(json["page"]["totalPages"], 2);
    }

    #[actix_web::test]
    async fn list_topics_passes_repeated_sort_parameters() {
        let stub = StubListTopicsUseCase::with_topics(vec![]);
        let state = TestAppStateBuilder::default().with_list(stub.clone()).build();

        let resp = call(
            state,
            "/api-forum/v1/forumhub/topics/listAll?sort=status,desc&sort=title",
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let seen = stub.last_request().unwrap();
        let sort: Vec<String> = seen.sort.iter().map(ToString::to_string).collect();
        assert_eq!(sort, vec!["status,desc", "title,asc"]);
    }

    #[actix_web::test]
    async fn list_topics_unknown_sort_field_returns_bad_request() {
        let state = TestAppStateBuilder::default().build();

        let resp = call(state, "/api-forum/v1/forumhub/topics/listAll?sort=author").await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["title"], "Parâmetro inválido");
        assert_eq!(json["detail"], "Campo de ordenação desconhecido: author");
    }

    #[actix_web::test]
    async fn list_topics_negative_page_returns_bad_request() {
        let state = TestAppStateBuilder::default().build();

        let resp = call(state, "/api-forum/v1/forumhub/topics/listAll?page=-1").await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn list_topics_unreachable_page_returns_bad_request() {
        let stub = StubListTopicsUseCase::with_topics(vec![sample_topic_view(1)]);
        let state = TestAppStateBuilder::default().with_list(stub.clone()).build();

        let resp = call(
            state,
            "/api-forum/v1/forumhub/topics/listAll?page=1000000000000000000",
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["title"], "Parâmetro inválido");
        assert!(stub.last_request().is_none());
    }

    #[actix_web::test]
    async fn list_topics_repository_error_returns_internal_error() {
        let state = TestAppStateBuilder::default()
            .with_list(StubListTopicsUseCase::failing("db down"))
            .build();

        let resp = call(state, "/api-forum/v1/forumhub/topics/listAll").await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
