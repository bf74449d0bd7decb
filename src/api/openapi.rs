use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::author::application::domain::entities::ProfileName;
use crate::course::application::domain::entities::Course;
use crate::shared::api::{HttpMessage, ProblemDetail};
use crate::topic::adapter::incoming::web::routes::{
    create_topic::CreateTopicRequest,
    list_topics::{PageMetadata, TopicPageResponse},
    update_topic::UpdateTopicRequest,
};
use crate::topic::application::domain::entities::TopicStatus;
use crate::topic::application::ports::outgoing::{AnswerView, AuthorSummary, TopicView};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ForumHub Topic API",
        version = "1.0.0",
        description = "Topics of the ForumHub discussion forum"
    ),
    paths(
        crate::topic::adapter::incoming::web::routes::create_topic::create_topic_handler,
        crate::topic::adapter::incoming::web::routes::list_topics::list_topics_handler,
        crate::topic::adapter::incoming::web::routes::get_topic::get_topic_handler,
        crate::topic::adapter::incoming::web::routes::update_topic::update_topic_handler,
        crate::topic::adapter::incoming::web::routes::delete_topic::delete_topic_handler,
    ),
    components(
        schemas(
            HttpMessage,
            ProblemDetail,
            CreateTopicRequest,
            UpdateTopicRequest,
            TopicPageResponse,
            PageMetadata,
            TopicView,
            AnswerView,
            AuthorSummary,
            Course,
            TopicStatus,
            ProfileName
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "topics", description = "Topic management endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token issued by the ForumHub auth server"))
                        .build(),
                ),
            )
        }
    }
}
