// src/shared/api/problem.rs
use actix_web::{
    http::{header::CONTENT_LANGUAGE, StatusCode},
    HttpResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";
pub const PROBLEM_LANGUAGE: &str = "pt-BR";

const TITLE_CONSTRAINT: &str = "Erro de restrição";
const TITLE_UNREADABLE: &str = "Solicitação desconhecida";
const TITLE_INVALID_PARAMETER: &str = "Parâmetro inválido";
const TITLE_NOT_FOUND: &str = "Solicitação não encontrada";
const TITLE_BUSINESS: &str = "Erro de negócio";
const TITLE_UNAUTHENTICATED: &str = "Não autenticado";
const TITLE_FORBIDDEN: &str = "Acesso negado";
const TITLE_UNAVAILABLE: &str = "Serviço indisponível";
const TITLE_INTERNAL: &str = "Erro interno";

pub const DETAIL_UNREADABLE: &str = "Solicitação com valor ilegível";
pub const DETAIL_INSUFFICIENT_PRIVILEGE: &str = "Privilégio insuficiente";
pub const DETAIL_ORPHAN_AUTHOR: &str =
    "O tópico pertence a um autor inexistente, ele não pode ser editado / removido";
pub const DETAIL_UNAVAILABLE: &str = "O serviço solicitado está fora do ar";
pub const DETAIL_CONFLICT: &str = "Registro já existente";
pub const DETAIL_INTERNAL: &str = "Ocorreu um erro inesperado";

/// Problem body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProblemDetail {
    pub timestamp: DateTime<Utc>,
    #[schema(example = 404)]
    pub status: u16,
    #[schema(example = "Solicitação não encontrada")]
    pub title: String,
    #[schema(example = "O tópico informado não existe")]
    pub detail: String,
    #[schema(example = "/api-forum/v1/forumhub/topics")]
    pub instance: String,
}

pub struct ProblemResponse;

impl ProblemResponse {
    pub fn build(status: StatusCode, title: &str, detail: &str, instance: &str) -> HttpResponse {
        HttpResponse::build(status)
            .content_type(PROBLEM_CONTENT_TYPE)
            .insert_header((CONTENT_LANGUAGE, PROBLEM_LANGUAGE))
            .json(ProblemDetail {
                timestamp: Utc::now(),
                status: status.as_u16(),
                title: title.to_string(),
                detail: detail.to_string(),
                instance: instance.to_string(),
            })
    }

    pub fn validation(instance: &str, detail: &str) -> HttpResponse {
        Self::build(StatusCode::BAD_REQUEST, TITLE_CONSTRAINT, detail, instance)
    }

    pub fn unreadable(instance: &str) -> HttpResponse {
        Self::build(
            StatusCode::BAD_REQUEST,
            TITLE_UNREADABLE,
            DETAIL_UNREADABLE,
            instance,
        )
    }

    pub fn invalid_parameter(instance: &str, detail: &str) -> HttpResponse {
        Self::build(
            StatusCode::BAD_REQUEST,
            TITLE_INVALID_PARAMETER,
            detail,
            instance,
        )
    }

    pub fn not_found(instance: &str, detail: &str) -> HttpResponse {
        Self::build(StatusCode::NOT_FOUND, TITLE_NOT_FOUND, detail, instance)
    }

    /// `status` is 418 unless the deployment configured 403.
    pub fn insufficient_privilege(instance: &str, status: StatusCode) -> HttpResponse {
        Self::build(
            status,
            TITLE_BUSINESS,
            DETAIL_INSUFFICIENT_PRIVILEGE,
            instance,
        )
    }

    pub fn orphan_author(instance: &str) -> HttpResponse {
        Self::build(
            StatusCode::UNPROCESSABLE_ENTITY,
            TITLE_BUSINESS,
            DETAIL_ORPHAN_AUTHOR,
            instance,
        )
    }

    pub fn unauthorized(instance: &str, detail: &str) -> HttpResponse {
        Self::build(
            StatusCode::UNAUTHORIZED,
            TITLE_UNAUTHENTICATED,
            detail,
            instance,
        )
    }

    pub fn forbidden(instance: &str, detail: &str) -> HttpResponse {
        Self::build(StatusCode::FORBIDDEN, TITLE_FORBIDDEN, detail, instance)
    }

    pub fn service_unavailable(instance: &str) -> HttpResponse {
        Self::build(
            StatusCode::SERVICE_UNAVAILABLE,
            TITLE_UNAVAILABLE,
            DETAIL_UNAVAILABLE,
            instance,
        )
    }

    pub fn conflict(instance: &str) -> HttpResponse {
        Self::build(StatusCode::CONFLICT, TITLE_CONSTRAINT, DETAIL_CONFLICT, instance)
    }

    pub fn internal_error(instance: &str) -> HttpResponse {
        Self::build(
            StatusCode::INTERNAL_SERVER_ERROR,
            TITLE_INTERNAL,
            DETAIL_INTERNAL,
            instance,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::header::CONTENT_TYPE;

    async fn body_of(resp: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn problem_carries_media_type_and_language() {
        let resp = ProblemResponse::not_found("/topics", "O tópico informado não existe");

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            resp.headers().get(CONTENT_TYPE).unwrap(),
            PROBLEM_CONTENT_TYPE
        );
        assert_eq!(resp.headers().get(CONTENT_LANGUAGE).unwrap(), "pt-BR");

        let json = body_of(resp).await;
        assert_eq!(json["status"], 404);
        assert_eq!(json["title"], "Solicitação não encontrada");
        assert_eq!(json["detail"], "O tópico informado não existe");
        assert_eq!(json["instance"], "/topics");
        assert!(json["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn insufficient_privilege_uses_given_status() {
        let teapot = ProblemResponse::insufficient_privilege("/t", StatusCode::IM_A_TEAPOT);
        let forbidden = ProblemResponse::insufficient_privilege("/t", StatusCode::FORBIDDEN);

        assert_eq!(teapot.status().as_u16(), 418);
        assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

        let json = body_of(teapot).await;
        assert_eq!(json["title"], "Erro de negócio");
        assert_eq!(json["detail"], "Privilégio insuficiente");
    }

    #[actix_web::test]
    async fn orphan_author_is_unprocessable() {
        let resp = ProblemResponse::orphan_author("/t");

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_of(resp).await;
        assert_eq!(json["detail"], DETAIL_ORPHAN_AUTHOR);
    }

    #[actix_web::test]
    async fn internal_error_hides_cause() {
        let resp = ProblemResponse::internal_error("/t");

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_of(resp).await;
        assert_eq!(json["title"], "Erro interno");
        assert_eq!(json["detail"], "Ocorreu um erro inesperado");
    }
}
