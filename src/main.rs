pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, author, course, topic};

use crate::api::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenVerifier;
use crate::author::adapter::outgoing::user_service::{UserServiceClient, UserServiceConfig};
use crate::author::adapter::outgoing::AuthorRepositoryPostgres;
use crate::author::application::services::AuthorResolver;
use crate::course::adapter::outgoing::CourseQueryPostgres;
use crate::shared::api::{custom_json_config, custom_query_config};
use crate::shared::server_config::ServerConfig;
use crate::topic::adapter::outgoing::{TopicQueryPostgres, TopicRepositoryPostgres};
use crate::topic::application::services::{
    CreateTopicService, DeleteTopicService, GetTopicService, ListTopicsService,
    UpdateTopicService,
};
use crate::topic::application::topic_use_cases::TopicUseCases;

use actix_web::{http::StatusCode, web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub topic: TopicUseCases,
    pub privilege_denied_status: StatusCode,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let server_config = ServerConfig::from_env().context("invalid server configuration")?;
    let jwt_config = JwtConfig::from_env().context("invalid JWT configuration")?;
    let user_service_config =
        UserServiceConfig::from_env().context("invalid user service configuration")?;

    // Database connection
    let mut opt = ConnectOptions::new(server_config.database_url.clone());
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("failed to connect to database")?;
    let db_arc = Arc::new(conn);

    // Authors
    let user_service = UserServiceClient::new(user_service_config)
        .context("failed to build user service client")?;
    let author_resolver = AuthorResolver::new(
        Arc::new(user_service),
        Arc::new(AuthorRepositoryPostgres::new(Arc::clone(&db_arc))),
    );

    // Topics
    let topic_repo = TopicRepositoryPostgres::new(Arc::clone(&db_arc));
    let topic_query = TopicQueryPostgres::new(Arc::clone(&db_arc));
    let course_query = CourseQueryPostgres::new(Arc::clone(&db_arc));

    let topic_use_cases = TopicUseCases {
        create: Arc::new(CreateTopicService::new(
            topic_repo.clone(),
            course_query.clone(),
            author_resolver.clone(),
        )),
        get_single: Arc::new(GetTopicService::new(topic_query.clone())),
        list: Arc::new(ListTopicsService::new(topic_query.clone())),
        update: Arc::new(UpdateTopicService::new(
            topic_query.clone(),
            topic_repo.clone(),
            course_query,
            author_resolver.clone(),
        )),
        delete: Arc::new(DeleteTopicService::new(
            topic_query,
            topic_repo,
            author_resolver,
        )),
    };

    let state = AppState {
        topic: topic_use_cases,
        privilege_denied_status: server_config.privilege_denied_status,
    };

    let token_verifier: Arc<dyn TokenVerifier + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));
    let openapi = ApiDoc::openapi();

    let bind_address = server_config.bind_address();
    info!(host = %bind_address.0, port = bind_address.1, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_verifier)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(bind_address)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Topics
    cfg.service(crate::topic::adapter::incoming::web::routes::create_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::list_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::update_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::delete_topic_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
