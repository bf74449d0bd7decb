use std::env;
use std::time::Duration;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserServiceConfigError {
    #[error("USER_SERVICE_URL must be set")]
    MissingBaseUrl,

    #[error("Invalid {0} value")]
    InvalidValue(&'static str),

    #[error("Incomplete client credentials: {0} must be set")]
    IncompleteCredentials(&'static str),
}

/// OAuth2 client-credentials used to authenticate against the user service.
#[derive(Clone)]
pub struct ClientCredentials {
    pub token_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub scope: Option<String>,
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("token_url", &self.token_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("scope", &self.scope)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub credentials: Option<ClientCredentials>,
}

impl UserServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            credentials: None,
        }
    }

    /// Load the user-service configuration from environment variables.
    ///
    /// The credential variables are all-or-nothing: either none of
    /// `USER_SERVICE_TOKEN_URL`, `USER_SERVICE_CLIENT_ID` and
    /// `USER_SERVICE_CLIENT_SECRET` is set, or all of them are.
    pub fn from_env() -> Result<Self, UserServiceConfigError> {
        let base_url = non_empty_var("USER_SERVICE_URL")
            .ok_or(UserServiceConfigError::MissingBaseUrl)?;

        let timeout = match non_empty_var("USER_SERVICE_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or(UserServiceConfigError::InvalidValue(
                        "USER_SERVICE_TIMEOUT_SECS",
                    ))?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let token_url = non_empty_var("USER_SERVICE_TOKEN_URL");
        let client_id = non_empty_var("USER_SERVICE_CLIENT_ID");
        let client_secret = non_empty_var("USER_SERVICE_CLIENT_SECRET");

        let credentials = match (token_url, client_id, client_secret) {
            (None, None, None) => None,
            (Some(token_url), Some(client_id), Some(client_secret)) => Some(ClientCredentials {
                token_url,
                client_id,
                client_secret,
                scope: non_empty_var("USER_SERVICE_SCOPE"),
            }),
            (None, _, _) => {
                return Err(UserServiceConfigError::IncompleteCredentials(
                    "USER_SERVICE_TOKEN_URL",
                ))
            }
            (_, None, _) => {
                return Err(UserServiceConfigError::IncompleteCredentials(
                    "USER_SERVICE_CLIENT_ID",
                ))
            }
            (_, _, None) => {
                return Err(UserServiceConfigError::IncompleteCredentials(
                    "USER_SERVICE_CLIENT_SECRET",
                ))
            }
        };

        Ok(Self {
            base_url,
            timeout,
            credentials,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
