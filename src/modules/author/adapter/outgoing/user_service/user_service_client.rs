use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::author::application::domain::entities::{Author, AuthorId, ProfileName};
use crate::author::application::ports::outgoing::{AuthorClient, AuthorClientError};

use super::service_token::ServiceTokenSource;
use super::user_service_config::UserServiceConfig;

pub const SUMMARY_INFO_PATH: &str = "/api-forum/v1/forumhub/users/summary-info";

#[derive(Debug, Deserialize)]
struct ProfileDto {
    #[serde(rename = "profileName")]
    profile_name: ProfileName,
}

#[derive(Debug, Deserialize)]
struct UserSummaryDto {
    id: i64,
    username: String,
    profile: ProfileDto,
}

impl From<UserSummaryDto> for Author {
    fn from(dto: UserSummaryDto) -> Self {
        Author {
            id: AuthorId::from(dto.id),
            username: dto.username,
            profile: dto.profile.profile_name,
        }
    }
}

/// HTTP adapter for the user service.
#[derive(Debug)]
pub struct UserServiceClient {
    http: reqwest::Client,
    base_url: String,
    token_source: Option<ServiceTokenSource>,
}

impl UserServiceClient {
    pub fn new(config: UserServiceConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token_source: config.credentials.map(ServiceTokenSource::new),
        })
    }

    fn map_transport_error(err: reqwest::Error) -> AuthorClientError {
        if err.is_timeout() {
            AuthorClientError::Timeout
        } else {
            AuthorClientError::ServiceUnavailable(err.to_string())
        }
    }
}

#[async_trait]
impl AuthorClient for UserServiceClient {
    async fn get_author_by_id(&self, id: AuthorId) -> Result<Author, AuthorClientError> {
        let url = format!("{}{}", self.base_url, SUMMARY_INFO_PATH);
        let mut request = self.http.get(url).query(&[("user_id", id.value())]);

        if let Some(source) = &self.token_source {
            let token = source.bearer_token(&self.http).await.map_err(|e| {
                tracing::error!(error = %e, "Could not obtain user service token");
                AuthorClientError::ServiceUnavailable(e.to_string())
            })?;
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(Self::map_transport_error)?;

        match response.status() {
            status if status.is_success() => {
                let dto: UserSummaryDto = response
                    .json()
                    .await
                    .map_err(Self::map_transport_error)?;
                Ok(dto.into())
            }
            StatusCode::NOT_FOUND => Err(AuthorClientError::NotFound),
            status => {
                tracing::error!(
                    author_id = %id,
                    status = status.as_u16(),
                    "User service returned an error"
                );
                Err(AuthorClientError::ServiceUnavailable(format!(
                    "user service responded with {status}"
                )))
            }
        }
    }
}
