// src/shared/api/json_config.rs
use crate::shared::api::ProblemResponse;
use actix_web::web::{JsonConfig, QueryConfig};

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, req| {
        tracing::warn!(path = %req.path(), error = %err, "Unreadable request body");
        actix_web::error::InternalError::from_response(err, ProblemResponse::unreadable(req.path()))
            .into()
    })
}

pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, req| {
        let message = format!("Parâmetro de consulta inválido: {err}");
        actix_web::error::InternalError::from_response(
            err,
            ProblemResponse::invalid_parameter(req.path(), &message),
        )
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, post, test, web, App, HttpResponse, Responder};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Payload {
        #[allow(dead_code)]
        title: String,
    }

    #[derive(Deserialize)]
    struct Params {
        #[allow(dead_code)]
        topic_id: i64,
    }

    #[post("/echo")]
    async fn echo(_body: web::Json<Payload>, _params: web::Query<Params>) -> impl Responder {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn malformed_body_becomes_unreadable_problem() {
        let app = test::init_service(
            App::new()
                .app_data(custom_json_config())
                .app_data(custom_query_config())
                .service(echo),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/echo?topic_id=1")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["title"], "Solicitação desconhecida");
        assert_eq!(json["detail"], "Solicitação com valor ilegível");
        assert_eq!(json["instance"], "/echo");
    }

    #[actix_web::test]
    async fn bad_query_becomes_invalid_parameter_problem() {
        let app = test::init_service(
            App::new()
                .app_data(custom_json_config())
                .app_data(custom_query_config())
                .service(echo),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/echo?topic_id=abc")
            .set_json(serde_json::json!({ "title": "x" }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["title"], "Parâmetro inválido");
    }
}
